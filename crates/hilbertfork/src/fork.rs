//! The cap‑to‑fork refinement rule.
//!
//! A cap `A B C D` is an open square: `A→B` runs along one side, `B→C`
//! across the top and `C→D` back down. Its fork is the same region split
//! into four half‑scale caps, walked so the path enters near `A` and leaves
//! near `D`. Caps must keep the orientation of [`BASE_CAP`](crate::BASE_CAP)
//! (as every cap produced by refinement does); for any other arrangement of
//! the four corners the result is not a valid fork.

use crate::point::Point;

/// Four points forming one Hilbert cap.
pub type Cap = [Point; 4];

/// Sixteen points forming one Hilbert fork.
pub type Fork = [Point; 16];

/// Replace a cap with its fork.
///
/// With `x = (D - A) / 2` and `y = (B - A) / 2`, the fork starts a quarter
/// step outside `A` and moves one `x` or `y` step at a time, ending a quarter
/// step outside `D`.
pub fn cap_to_fork(cap: &Cap) -> Fork {
    let [a, b, _, d] = *cap;
    let x = (d - a) / 2.0;
    let y = (b - a) / 2.0;

    let e = a - x / 2.0 - y / 2.0;
    let f = e + x;
    let g = f + y;
    let h = g - x;
    let i = h + y;
    let j = i + y;
    let k = j + x;
    let l = k - y;
    let m = l + x;
    let n = m + y;
    let o = n + x;
    let p = o - y;
    let q = p - y;
    let r = q - x;
    let s = r - y;
    let t = d + x / 2.0 - y / 2.0;

    [e, f, g, h, i, j, k, l, m, n, o, p, q, r, s, t]
}
