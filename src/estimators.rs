//! The four quick-look estimators
//!
//! Each estimator is a pure function over a prepared sweep (see
//! [`Sweep::prepare`](crate::sweep::Sweep::prepare)) and returns `None`
//! whenever its preconditions fail, so one indeterminate quantity never
//! poisons the others. Tie-breaks and fallbacks are ordered rules, fixtures
//! rely on their determinism.

use itertools::Itertools;

use crate::fit::linear_fit;
use crate::sweep::{IvPoint, MIN_SPAN, VOLTAGE_TOLERANCE};

/// Floating potential Vf \[V\]: the bias at which the probe draws zero net
/// current
///
/// Scans consecutive pairs in ascending voltage order; an exact zero wins
/// immediately, otherwise the first sign-change interval is linearly
/// interpolated. When the current never changes sign the voltage of the
/// sample with minimal |I| is returned; on ties the lowest voltage wins.
pub fn floating_potential(points: &[IvPoint]) -> Option<f64> {
    for (a, b) in points.iter().tuple_windows() {
        if a.current == 0. {
            return Some(a.voltage);
        }
        if b.current == 0. {
            return Some(b.voltage);
        }
        if (a.current < 0. && b.current > 0.) || (a.current > 0. && b.current < 0.) {
            let t = -a.current / (b.current - a.current);
            return Some(a.voltage + t * (b.voltage - a.voltage));
        }
    }
    points
        .iter()
        .min_by(|a, b| a.current.abs().total_cmp(&b.current.abs()))
        .map(|p| p.voltage)
}

/// Plasma potential Vp \[V\]: the knee of the I-V curve, taken as the
/// midpoint of the interval with maximum discrete dI/dV
///
/// Only strictly greater slopes displace the running maximum, so of tied
/// intervals the lowest-voltage one wins.
pub fn plasma_potential(points: &[IvPoint]) -> Option<f64> {
    if points.len() < 3 {
        return None;
    }
    let mut max_slope = f64::NEG_INFINITY;
    let mut vp = None;
    for (a, b) in points.iter().tuple_windows() {
        let dv = b.voltage - a.voltage;
        if dv.abs() < VOLTAGE_TOLERANCE {
            continue;
        }
        let slope = (b.current - a.current) / dv;
        if slope > max_slope {
            max_slope = slope;
            vp = Some(0.5 * (a.voltage + b.voltage));
        }
    }
    if max_slope.is_finite() {
        vp
    } else {
        None
    }
}

/// Electron temperature Te \[eV\] from the electron-retardation region
///
/// In that region I is proportional to exp(V/Te), so Te is the reciprocal
/// slope of a least-squares fit of ln(I) versus V. The fit window is the
/// span between Vf and Vp trimmed by 10% on each side, restricted to
/// samples with strictly positive current.
pub fn electron_temperature(points: &[IvPoint], vf: Option<f64>, vp: Option<f64>) -> Option<f64> {
    let (vf, vp) = (vf?, vp?);
    let (vmin, vmax) = (vf.min(vp), vf.max(vp));
    if vmax - vmin < MIN_SPAN {
        return None;
    }
    let trim = 0.10 * (vmax - vmin);
    let (low, high) = (vmin + trim, vmax - trim);

    let (x, y): (Vec<f64>, Vec<f64>) = points
        .iter()
        .filter(|p| p.voltage >= low && p.voltage <= high && p.current > 0.)
        .map(|p| (p.voltage, p.current.ln()))
        .unzip();
    if x.len() < 3 {
        return None;
    }

    let fit = linear_fit(&x, &y)?;
    if fit.slope.abs() < 1e-12 {
        // near-horizontal fit, the temperature would diverge
        return None;
    }
    let te = 1. / fit.slope;
    te.is_finite().then_some(te)
}

/// Electron saturation current Ie_sat \[A\]: mean current of the
/// high-voltage plateau beyond the plasma potential
///
/// The plateau is every sample with positive current past
/// `(Vp or minV + 0.7 span) + 0.2 span`; when fewer than 3 qualify the
/// fallback averages the `max(3, n/10)` highest-voltage positive-current
/// samples instead.
pub fn electron_saturation_current(points: &[IvPoint], vp: Option<f64>) -> Option<f64> {
    let min_v = points.first()?.voltage;
    let max_v = points.last()?.voltage;
    let span = (max_v - min_v).max(MIN_SPAN);

    let cutoff = vp.unwrap_or(min_v + 0.7 * span) + 0.2 * span;
    let tail: Vec<f64> = points
        .iter()
        .filter(|p| p.voltage >= cutoff && p.current > 0.)
        .map(|p| p.current)
        .collect();
    if tail.len() >= 3 {
        return Some(mean(&tail));
    }

    let take = 3.max(points.len() / 10);
    let alt: Vec<f64> = points
        .iter()
        .rev()
        .filter(|p| p.current > 0.)
        .take(take)
        .map(|p| p.current)
        .collect();
    (alt.len() >= 3).then(|| mean(&alt))
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
