//! Building curve approximations from the base cap.
//!
//! Three views of the same sequence are offered:
//!
//! - [`hilbert_curve`] / [`generate_curve`] materialise one order.
//! - [`refinements`] walks orders `0, 1, 2, …`, reusing each path for the next.
//! - [`points`] streams a single order depth‑first without materialising it.

use std::iter::FusedIterator;

use smallvec::SmallVec;
use tracing::trace;

use crate::{
    error::{Error, Result},
    fork::{Cap, cap_to_fork},
    order::Order,
    point::{Path, Point},
};

/// The order‑0 curve: one cap spanning the unit square.
pub const BASE_CAP: Cap = [
    Point::new(0.25, 0.25),
    Point::new(0.25, 0.75),
    Point::new(0.75, 0.75),
    Point::new(0.75, 0.25),
];

/// Split a path into its consecutive caps.
///
/// The path length must be a multiple of four. Any trailing remainder is a
/// caller bug: it trips a debug assertion and is otherwise ignored.
pub fn caps_from_path(path: &[Point]) -> impl Iterator<Item = Cap> + '_ {
    debug_assert!(
        path.len().is_multiple_of(4),
        "path length {} is not a multiple of 4",
        path.len()
    );
    path.chunks_exact(4)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
}

/// Refine a path by one order, replacing every cap with its fork.
///
/// The result is four times as long as `path`; forks appear in the order of
/// the caps they replace.
pub fn finegrain(path: &[Point]) -> Path {
    let mut out = Vec::with_capacity(path.len() * 4);
    for cap in caps_from_path(path) {
        out.extend(cap_to_fork(&cap));
    }
    out
}

/// The curve of the given order.
pub fn hilbert_curve(order: Order) -> Path {
    let mut path = BASE_CAP.to_vec();
    for level in 0..order.value() {
        path = finegrain(&path);
        trace!(order = level + 1, points = path.len(), "refined");
    }
    path
}

/// Validate `order` and build the corresponding curve.
///
/// Accepts anything that converts into an [`Order`]: `u32`, `i32`, `i64`,
/// `f64` or `&str`. Negative, non‑integral and oversized orders fail with
/// [`Error::InvalidOrder`] before any work is done.
///
/// ```
/// use hilbertfork::{BASE_CAP, generate_curve};
///
/// assert_eq!(generate_curve(0)?, BASE_CAP.to_vec());
/// assert!(generate_curve(-1).is_err());
/// assert!(generate_curve(1.5).is_err());
/// # Ok::<(), hilbertfork::error::Error>(())
/// ```
pub fn generate_curve<O>(order: O) -> Result<Path>
where
    O: TryInto<Order, Error = Error>,
{
    let order = order.try_into()?;
    Ok(hilbert_curve(order))
}

/// Iterate over successive approximations, starting from the base cap.
pub fn refinements() -> Refinements {
    Refinements { last: None }
}

/// Iterator over `(order, path)` pairs for orders `0..=MAX_ORDER`.
///
/// Each path is derived from the previous one, so walking to order `n` costs
/// the same as building order `n` directly.
///
/// The iterator hands out owned copies of paths it keeps for the next step.
/// Use [`Refinements::advance`] to borrow them instead; it holds only the
/// previous and the new path at once.
#[derive(Debug, Clone)]
pub struct Refinements {
    /// The most recently produced approximation.
    last: Option<(Order, Path)>,
}

impl Refinements {
    /// Step to the next order and borrow its path.
    ///
    /// Returns `None` once [`MAX_ORDER`](crate::MAX_ORDER) has been produced.
    pub fn advance(&mut self) -> Option<(Order, &[Point])> {
        let next = match &self.last {
            None => (Order::ZERO, BASE_CAP.to_vec()),
            Some((order, path)) => (order.next_order()?, finegrain(path)),
        };
        let (order, path) = self.last.insert(next);
        Some((*order, path.as_slice()))
    }
}

impl Iterator for Refinements {
    type Item = (Order, Path);

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|(order, path)| (order, path.to_vec()))
    }
}

/// Stream the points of the curve of `order` without building the full path.
///
/// Memory use grows with the order rather than with the number of points.
/// The sequence is identical to [`hilbert_curve`].
pub fn points(order: Order) -> Points {
    let mut frames = Vec::with_capacity(order.value() as usize + 1);
    frames.push(Frame::new(&BASE_CAP));
    Points {
        frames,
        leaf_depth: order.value() as usize + 1,
        remaining: order.point_count(),
    }
}

/// One level of the depth‑first walk: a cap or fork and a read position.
#[derive(Debug, Clone)]
struct Frame {
    /// Points at this level: the base cap at the root, a fork below it.
    points: SmallVec<[Point; 16]>,
    /// Index of the next unread point.
    cursor: usize,
}

impl Frame {
    /// Start reading `points` from the beginning.
    fn new(points: &[Point]) -> Self {
        Self {
            points: SmallVec::from_slice(points),
            cursor: 0,
        }
    }
}

/// Lazy depth‑first generator returned by [`points`].
#[derive(Debug, Clone)]
pub struct Points {
    /// Open levels, root first. The last frame is the one being read.
    frames: Vec<Frame>,
    /// Stack depth at which frames hold final points rather than caps.
    leaf_depth: usize,
    /// Points not yet yielded.
    remaining: usize,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        loop {
            let depth = self.frames.len();
            let frame = self.frames.last_mut()?;
            if depth == self.leaf_depth {
                if let Some(&p) = frame.points.get(frame.cursor) {
                    frame.cursor += 1;
                    self.remaining -= 1;
                    return Some(p);
                }
                self.frames.pop();
            } else if let Some(chunk) = frame.points.get(frame.cursor..frame.cursor + 4) {
                let cap = [chunk[0], chunk[1], chunk[2], chunk[3]];
                frame.cursor += 4;
                self.frames.push(Frame::new(&cap_to_fork(&cap)));
            } else {
                self.frames.pop();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points {}

impl FusedIterator for Points {}
