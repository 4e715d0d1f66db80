//! Finite approximations to the Hilbert space‑filling curve.
//!
//! The curve of order 0 is a single *Hilbert cap*: four points tracing an
//! open square inside the unit square. Each further order replaces every cap
//! with a *Hilbert fork*, four half‑scale caps joined into one continuous
//! path. The curve of order `n` therefore has `4^(n+1)` points.
//!
//! ```
//! use hilbertfork::generate_curve;
//!
//! let path = generate_curve(2)?;
//! assert_eq!(path.len(), 64);
//! # Ok::<(), hilbertfork::error::Error>(())
//! ```

/// Successive approximations built from the base cap.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// The cap‑to‑fork refinement rule.
pub mod fork;
/// Validated curve orders.
pub mod order;
/// Two‑dimensional points and path helpers.
pub mod point;

pub use crate::{
    curve::{
        BASE_CAP, Points, Refinements, caps_from_path, finegrain, generate_curve, hilbert_curve,
        points, refinements,
    },
    fork::{Cap, Fork, cap_to_fork},
    order::{MAX_ORDER, Order},
    point::{Path, Point},
};
