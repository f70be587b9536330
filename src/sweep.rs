use std::ops::Deref;

use serde::Serialize;

/// Two samples closer in voltage than this are the same bias point.
pub const VOLTAGE_TOLERANCE: f64 = 1e-12;
/// A sweep with fewer cleaned samples than this cannot be analyzed.
pub const MIN_POINTS: usize = 5;
/// Floor on voltage spans used as divisors or trim bases.
pub const MIN_SPAN: f64 = 1e-6;

/// One sample of the I-V characteristic: probe bias \[V\] and collected
/// current \[A\]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IvPoint {
    #[serde(rename = "V")]
    pub voltage: f64,
    #[serde(rename = "I")]
    pub current: f64,
}
impl IvPoint {
    pub fn new(voltage: f64, current: f64) -> Self {
        Self { voltage, current }
    }
}
impl PartialOrd for IvPoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.voltage.partial_cmp(&other.voltage)
    }
}

/// A cleaned I-V sweep: finite samples, strictly ascending in voltage
#[derive(Debug, Default, Clone, Serialize)]
pub struct Sweep(Vec<IvPoint>);
impl Deref for Sweep {
    type Target = [IvPoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl Sweep {
    /// Cleans raw samples into a sweep the estimators can consume
    ///
    /// Non-finite samples are dropped, the rest are stable-sorted by
    /// voltage, and of any run of samples within [`VOLTAGE_TOLERANCE`] of
    /// each other only the first survives. Empty or tiny input is not an
    /// error; [`Sweep::analyze`](crate::analysis) checks the length.
    pub fn prepare<I: IntoIterator<Item = IvPoint>>(points: I) -> Self {
        let mut points: Vec<IvPoint> = points
            .into_iter()
            .filter(|p| p.voltage.is_finite() && p.current.is_finite())
            .collect();
        points.sort_by(|a, b| a.voltage.total_cmp(&b.voltage));
        let mut sweep = Vec::with_capacity(points.len());
        let mut last_voltage = f64::NEG_INFINITY;
        for point in points {
            if (point.voltage - last_voltage).abs() > VOLTAGE_TOLERANCE {
                last_voltage = point.voltage;
                sweep.push(point);
            }
        }
        Self(sweep)
    }
    /// Iterator over the probe bias \[V\]
    pub fn voltages(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.voltage)
    }
    /// Iterator over the collected current \[A\]
    pub fn currents(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.current)
    }
    /// Writes the cleaned sweep to a CSV file
    pub fn to_csv<P: AsRef<std::path::Path>>(&self, filename: P) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_path(filename)?;
        wtr.write_record(["Voltage [V]", "Current [A]"])?;
        for point in self.iter() {
            wtr.write_record(&[format!("{}", point.voltage), format!("{}", point.current)])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    #[test]
    fn prepare_sorts_any_permutation() {
        let mut raw: Vec<IvPoint> = (0..100)
            .map(|k| IvPoint::new(-5. + 0.1 * k as f64, 1e-3 * k as f64))
            .collect();
        raw.shuffle(&mut rand::thread_rng());
        let sweep = Sweep::prepare(raw);
        assert_eq!(sweep.len(), 100);
        for pair in sweep.windows(2) {
            assert!(pair[1].voltage - pair[0].voltage > VOLTAGE_TOLERANCE);
        }
    }

    #[test]
    fn prepare_drops_non_finite_samples() {
        let sweep = Sweep::prepare(vec![
            IvPoint::new(f64::NAN, 1.),
            IvPoint::new(0., f64::INFINITY),
            IvPoint::new(1., f64::NEG_INFINITY),
            IvPoint::new(2., 0.5),
            IvPoint::new(3., f64::NAN),
        ]);
        assert_eq!(sweep.len(), 1);
        assert_eq!(sweep[0], IvPoint::new(2., 0.5));
    }

    #[test]
    fn prepare_deduplicates_within_tolerance() {
        let sweep = Sweep::prepare(vec![
            IvPoint::new(0., 1.),
            IvPoint::new(5e-13, 2.),
            IvPoint::new(0., 3.),
            IvPoint::new(1., 4.),
            IvPoint::new(1. + 2e-12, 5.),
        ]);
        // first-seen-wins along sort order
        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep[0].current, 1.);
        assert_eq!(sweep[1].current, 4.);
        assert_eq!(sweep[2].current, 5.);
    }

    #[test]
    fn prepare_accepts_empty_input() {
        let sweep = Sweep::prepare(Vec::new());
        assert!(sweep.is_empty());
    }
}
