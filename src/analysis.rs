use serde::Serialize;

use crate::estimators::{
    electron_saturation_current, electron_temperature, floating_potential, plasma_potential,
};
use crate::sweep::{IvPoint, Sweep, MIN_POINTS};

/// Method family recorded in every result
pub const QUICK_LOOK_NOTES: &str = "Quick-look analysis (zero-crossing Vf, max dI/dV Vp, \
     ln(I) fit for Te, high-V tail average for Ie_sat).";

/// Quick-look estimates from one I-V sweep
///
/// Every estimate is optional: an absent field means the corresponding
/// estimator could not produce a value, callers must check presence before
/// use. `point_count` is the number of samples that survived cleaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "FloatingPotential_Vf")]
    pub floating_potential: Option<f64>,
    #[serde(rename = "PlasmaPotential_Vp")]
    pub plasma_potential: Option<f64>,
    #[serde(rename = "ElectronTemperature_eV")]
    pub electron_temperature: Option<f64>,
    #[serde(rename = "ElectronSaturationCurrent_Amps")]
    pub electron_saturation_current: Option<f64>,
    #[serde(rename = "PointCount")]
    pub point_count: usize,
    #[serde(rename = "Notes")]
    pub notes: String,
}
impl AnalysisResult {
    fn insufficient(point_count: usize) -> Self {
        Self {
            floating_potential: None,
            plasma_potential: None,
            electron_temperature: None,
            electron_saturation_current: None,
            point_count,
            notes: QUICK_LOOK_NOTES.to_string(),
        }
    }
    /// Prints the estimates to the standard output
    pub fn summary(&self) {
        let row = |label: &str, value: Option<f64>, unit: &str| match value {
            Some(value) => println!(" - {:28}: {:12.4e} {}", label, value, unit),
            None => println!(" - {:28}: {:>12}", label, "n/a"),
        };
        println!("SUMMARY:");
        println!(" - {:28}: {:12}", "# of points", self.point_count);
        row("floating potential", self.floating_potential, "V");
        row("plasma potential", self.plasma_potential, "V");
        row("electron temperature", self.electron_temperature, "eV");
        row(
            "electron saturation current",
            self.electron_saturation_current,
            "A",
        );
        println!(" - {}", self.notes);
    }
}

impl Sweep {
    /// Runs the four estimators over the cleaned sweep
    ///
    /// Fewer than [`MIN_POINTS`] samples is not an error: the result simply
    /// carries the surviving count and no estimates. Each estimator fails
    /// independently, an indeterminate quantity leaves its field absent
    /// without affecting the others.
    pub fn analyze(&self) -> AnalysisResult {
        let mut result = AnalysisResult::insufficient(self.len());
        if self.len() < MIN_POINTS {
            log::warn!(
                "insufficient data: {} point(s) after cleaning, need {}",
                self.len(),
                MIN_POINTS
            );
            return result;
        }
        result.floating_potential = floating_potential(self);
        result.plasma_potential = plasma_potential(self);
        result.electron_temperature =
            electron_temperature(self, result.floating_potential, result.plasma_potential);
        result.electron_saturation_current =
            electron_saturation_current(self, result.plasma_potential);
        result
    }
}

/// Cleans raw samples and runs the quick-look analysis
///
/// The single entry point of the engine: a pure function of its input, one
/// immutable result per call.
pub fn analyze<I: IntoIterator<Item = IvPoint>>(points: I) -> AnalysisResult {
    Sweep::prepare(points).analyze()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_gate() {
        let result = analyze(vec![
            IvPoint::new(0., -1.),
            IvPoint::new(1., 0.5),
            IvPoint::new(2., 1.),
            IvPoint::new(3., 2.),
        ]);
        assert_eq!(result.point_count, 4);
        assert_eq!(result.floating_potential, None);
        assert_eq!(result.plasma_potential, None);
        assert_eq!(result.electron_temperature, None);
        assert_eq!(result.electron_saturation_current, None);
    }

    #[test]
    fn point_count_reflects_cleaning() {
        // 7 raw samples, 2 NaN and 1 duplicate voltage leave 4
        let result = analyze(vec![
            IvPoint::new(0., -1.),
            IvPoint::new(f64::NAN, 0.),
            IvPoint::new(1., f64::NAN),
            IvPoint::new(2., 1.),
            IvPoint::new(2., 1.5),
            IvPoint::new(3., 2.),
            IvPoint::new(4., 3.),
        ]);
        assert_eq!(result.point_count, 4);
        assert_eq!(result.floating_potential, None);
    }

    #[test]
    fn full_sweep_yields_all_four_estimates() {
        // ion branch, exponential retardation, then a flat electron plateau
        let points: Vec<IvPoint> = (0..100)
            .map(|k| {
                let v = -10. + 0.2 * k as f64;
                let i = if v < 3. { (v / 1.5).exp() - 0.1 } else { 7.39 };
                IvPoint::new(v, i)
            })
            .collect();
        let result = analyze(points);
        assert_eq!(result.point_count, 100);
        let vf = result.floating_potential.unwrap();
        // I = 0 at V = 1.5 ln(0.1) = -3.45
        assert!((vf + 3.45).abs() < 0.2);
        let vp = result.plasma_potential.unwrap();
        assert!(vp > vf);
        let te = result.electron_temperature.unwrap();
        assert!(te > 0.);
        let ie = result.electron_saturation_current.unwrap();
        assert!((ie - 7.39).abs() < 0.5);
    }

    #[test]
    fn result_serializes_with_original_field_names() {
        let result = analyze(Vec::new());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"FloatingPotential_Vf\":null"));
        assert!(json.contains("\"PointCount\":0"));
        assert!(json.contains("\"Notes\""));
    }
}
