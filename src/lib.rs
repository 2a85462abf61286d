//! Clarke and Park transforms for three-phase signal analysis.
//!
//! Converts between the three-phase stationary frame (`a`, `b`, `c`), the
//! two-axis stationary frame (`alpha`, `beta`) and the two-axis frame rotating
//! with the electrical angle (`d`, `q`). Every transform is a pure function on
//! small fixed-size values and works in `f64`, `f32` or 16.16 fixed point.
//!
//! ```
//! use clarke_park::park_clarke::{self, ThreePhaseStationaryReferenceFrame};
//!
//! let angle = 0.3_f64;
//! let currents = ThreePhaseStationaryReferenceFrame::from([1., -0.5, -0.5]);
//! let rotating = park_clarke::park(park_clarke::clarke(currents), angle);
//! let currents = park_clarke::inverse_clarke(park_clarke::inverse_park(rotating, angle));
//! assert!((currents.a - 1.).abs() < 1e-9);
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod normalize;
pub mod park_clarke;
mod scalar;

pub use normalize::{normalize, normalized, NormalizeError};
pub use scalar::Scalar;
