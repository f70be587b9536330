/// Line fitted by ordinary least squares: `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Ordinary least-squares fit of a line to paired sequences
///
/// Returns `None` when fewer than 2 pairs are given, when the abscissae are
/// degenerate (`|n.Σx² - (Σx)²| < 1e-20`) or when either coefficient comes
/// out non-finite.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }
    let (mut sx, mut sy, mut sxx, mut sxy) = (0f64, 0f64, 0f64, 0f64);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sx += xi;
        sy += yi;
        sxx += xi * xi;
        sxy += xi * yi;
    }
    let n = n as f64;
    let denom = n * sxx - sx * sx;
    if denom.abs() < 1e-20 {
        return None;
    }
    let slope = (n * sxy - sx * sy) / denom;
    let intercept = (sy - slope * sx) / n;
    (slope.is_finite() && intercept.is_finite()).then_some(LinearFit { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_exact_line() {
        let x = [0., 1., 2., 3., 4.];
        let y: Vec<f64> = x.iter().map(|x| 2.5 * x - 1.25).collect();
        let fit = linear_fit(&x, &y).unwrap();
        assert!((fit.slope - 2.5).abs() < 1e-12);
        assert!((fit.intercept + 1.25).abs() < 1e-12);
    }

    #[test]
    fn refuses_single_pair() {
        assert!(linear_fit(&[1.], &[2.]).is_none());
        assert!(linear_fit(&[], &[]).is_none());
    }

    #[test]
    fn refuses_degenerate_abscissae() {
        // all x identical, vertical line
        assert!(linear_fit(&[3., 3., 3.], &[0., 1., 2.]).is_none());
    }
}
