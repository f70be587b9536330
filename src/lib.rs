//! Quick-look analysis of Langmuir probe I-V sweeps
//!
//! A Langmuir probe sweep is a sequence of (voltage,current) samples taken
//! as the probe bias is varied. From one cleaned sweep this crate estimates:
//!
//! - the floating potential Vf \[V\] (zero-crossing of the current),
//! - the plasma potential Vp \[V\] (maximum discrete dI/dV),
//! - the electron temperature Te \[eV\] (ln(I) fit in the retardation region),
//! - the electron saturation current Ie_sat \[A\] (high-voltage tail average).
//!
//! Each estimate is an [`Option`]: when the data do not support a value the
//! field is simply absent, it is never a sentinel number.
//!
//! ```
//! use lp_quicklook::{analyze, IvPoint};
//!
//! let points: Vec<IvPoint> = (0..50)
//!     .map(|k| {
//!         let v = -5. + 0.2 * k as f64;
//!         IvPoint::new(v, if v < 2. { v.exp() - 1. } else { 2f64.exp() - 1. })
//!     })
//!     .collect();
//! let result = analyze(points);
//! assert_eq!(result.point_count, 50);
//! assert!(result.floating_potential.is_some());
//! ```

pub mod analysis;
pub mod estimators;
pub mod fit;
pub mod loader;
pub mod sweep;

pub use analysis::{analyze, AnalysisResult};
pub use fit::{linear_fit, LinearFit};
pub use loader::{LoadError, SweepLoader};
pub use sweep::{IvPoint, Sweep};
