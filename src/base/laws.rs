use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the step used by the central-difference derivative of scalar laws
pub const LAW_DERIV_STEP: f64 = 1e-6;

/// Defines a scalar function of one variable used as a hardening or damage law
///
/// The derivative is always computed numerically by central differences; thus,
/// laws may be swapped (closed-form or tabulated) without touching the solver.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum ScalarLaw {
    /// Always zero
    Zero,

    /// Linear function `f(x) = slope · x`
    Linear {
        /// Slope of the line
        slope: f64,
    },

    /// Logistic function `f(x) = β / (1 + exp(-α·x + shift))`
    Logistic {
        /// Steepness coefficient α
        alpha: f64,

        /// Upper bound β
        beta: f64,

        /// Shift of the inflection point (in units of α·x)
        shift: f64,
    },

    /// Piecewise-linear interpolation of tabulated values
    ///
    /// Values outside the range of `xx` are clamped to the first or last `yy`.
    Table {
        /// Abscissae (strictly increasing)
        xx: Vec<f64>,

        /// Ordinates
        yy: Vec<f64>,
    },

    /// Function defined in code (not serializable)
    #[serde(skip)]
    Function(fn(f64) -> f64),
}

impl ScalarLaw {
    /// Allocates a piecewise-linear table from the slopes of equally spaced segments
    ///
    /// The table starts at `(x_ini, 0)` and spans `slopes.len()` segments up to `x_fin`.
    pub fn table_from_slopes(x_ini: f64, x_fin: f64, slopes: &[f64]) -> Result<Self, StrError> {
        if slopes.is_empty() {
            return Err("at least one slope is required");
        }
        if x_fin <= x_ini {
            return Err("x_fin must be greater than x_ini");
        }
        let n = slopes.len();
        let dx = (x_fin - x_ini) / (n as f64);
        let mut xx = vec![x_ini; n + 1];
        let mut yy = vec![0.0; n + 1];
        for i in 0..n {
            xx[i + 1] = x_ini + ((i + 1) as f64) * dx;
            yy[i + 1] = yy[i] + slopes[i] * dx;
        }
        xx[n] = x_fin;
        Ok(ScalarLaw::Table { xx, yy })
    }

    /// Validates the parameters
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        match self {
            ScalarLaw::Logistic { alpha, beta, shift } => {
                if !alpha.is_finite() || !beta.is_finite() || !shift.is_finite() {
                    return Some("logistic law parameters must be finite".to_string());
                }
            }
            ScalarLaw::Table { xx, yy } => {
                if xx.len() < 2 {
                    return Some(format!("table must have at least 2 points; found {}", xx.len()));
                }
                if xx.len() != yy.len() {
                    return Some(format!(
                        "table xx and yy must have the same length; found {} and {}",
                        xx.len(),
                        yy.len()
                    ));
                }
                for i in 1..xx.len() {
                    if xx[i] <= xx[i - 1] {
                        return Some(format!("table xx must be strictly increasing; see xx[{}] = {:?}", i, xx[i]));
                    }
                }
            }
            _ => (),
        }
        None // all good
    }

    /// Evaluates the law at x
    pub fn value(&self, x: f64) -> f64 {
        match self {
            ScalarLaw::Zero => 0.0,
            ScalarLaw::Linear { slope } => slope * x,
            ScalarLaw::Logistic { alpha, beta, shift } => beta / (1.0 + f64::exp(-alpha * x + shift)),
            ScalarLaw::Table { xx, yy } => interpolate(xx, yy, x),
            ScalarLaw::Function(f) => f(x),
        }
    }

    /// Evaluates the derivative of the law at x by central differences
    pub fn derivative(&self, x: f64) -> f64 {
        let h = LAW_DERIV_STEP;
        (self.value(x + h) - self.value(x - h)) / (2.0 * h)
    }
}

/// Interpolates piecewise-linear data with clamping at both ends
fn interpolate(xx: &[f64], yy: &[f64], x: f64) -> f64 {
    let n = xx.len();
    if x <= xx[0] {
        return yy[0];
    }
    if x >= xx[n - 1] {
        return yy[n - 1];
    }
    // binary search for the segment xx[i] ≤ x < xx[i+1]
    let (mut lo, mut hi) = (0, n - 1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xx[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let s = (x - xx[lo]) / (xx[hi] - xx[lo]);
    yy[lo] + s * (yy[hi] - yy[lo])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ScalarLaw;
    use russell_lab::{approx_eq, array_approx_eq, deriv1_central5};

    #[test]
    fn table_from_slopes_captures_errors() {
        assert_eq!(
            ScalarLaw::table_from_slopes(0.0, 1.0, &[]).err(),
            Some("at least one slope is required")
        );
        assert_eq!(
            ScalarLaw::table_from_slopes(1.0, 1.0, &[1.0]).err(),
            Some("x_fin must be greater than x_ini")
        );
    }

    #[test]
    fn table_from_slopes_works() {
        let law = ScalarLaw::table_from_slopes(0.0, 2.0, &[1.0, -0.5, 2.0, 0.0]).unwrap();
        match &law {
            ScalarLaw::Table { xx, yy } => {
                array_approx_eq(xx, &[0.0, 0.5, 1.0, 1.5, 2.0], 1e-15);
                array_approx_eq(yy, &[0.0, 0.5, 0.25, 1.25, 1.25], 1e-15);
            }
            _ => panic!("table is expected"),
        }
        assert_eq!(law.validate(), None);
    }

    #[test]
    fn validate_works() {
        let law = ScalarLaw::Table {
            xx: vec![0.0],
            yy: vec![0.0],
        };
        assert_eq!(law.validate(), Some("table must have at least 2 points; found 1".to_string()));
        let law = ScalarLaw::Table {
            xx: vec![0.0, 1.0],
            yy: vec![0.0],
        };
        assert_eq!(
            law.validate(),
            Some("table xx and yy must have the same length; found 2 and 1".to_string())
        );
        let law = ScalarLaw::Table {
            xx: vec![0.0, 1.0, 1.0],
            yy: vec![0.0, 1.0, 2.0],
        };
        assert_eq!(
            law.validate(),
            Some("table xx must be strictly increasing; see xx[2] = 1.0".to_string())
        );
        let law = ScalarLaw::Logistic {
            alpha: f64::NAN,
            beta: 1.0,
            shift: 6.0,
        };
        assert_eq!(law.validate(), Some("logistic law parameters must be finite".to_string()));
    }

    #[test]
    fn value_works() {
        assert_eq!(ScalarLaw::Zero.value(123.0), 0.0);
        assert_eq!(ScalarLaw::Linear { slope: 2.0 }.value(3.0), 6.0);
        let logistic = ScalarLaw::Logistic {
            alpha: 1.0,
            beta: 1.0,
            shift: 6.0,
        };
        approx_eq(logistic.value(6.0), 0.5, 1e-15);
        approx_eq(logistic.value(0.0), 1.0 / (1.0 + f64::exp(6.0)), 1e-15);
        let table = ScalarLaw::Table {
            xx: vec![0.0, 1.0, 3.0],
            yy: vec![0.0, 2.0, 1.0],
        };
        assert_eq!(table.value(-1.0), 0.0);
        assert_eq!(table.value(0.5), 1.0);
        assert_eq!(table.value(2.0), 1.5);
        assert_eq!(table.value(3.0), 1.0);
        assert_eq!(table.value(5.0), 1.0);
        let function = ScalarLaw::Function(|x| x * x);
        assert_eq!(function.value(3.0), 9.0);
    }

    #[test]
    fn derivative_works() {
        let laws = [
            ScalarLaw::Linear { slope: 0.01 },
            ScalarLaw::Logistic {
                alpha: 1.0,
                beta: 1.0,
                shift: 6.0,
            },
            ScalarLaw::Function(|x| 0.01 * x * x - 0.01 * x),
        ];
        let mut args = 0;
        for law in &laws {
            for x in [0.1, 1.0, 5.5, 10.0] {
                let num = deriv1_central5(x, &mut args, |at_x, _| Ok(law.value(at_x))).unwrap();
                approx_eq(law.derivative(x), num, 1e-8);
            }
        }
        // inside a segment of a table
        let table = ScalarLaw::table_from_slopes(0.0, 5.0, &[-0.3, 0.3, 0.6, 1.5]).unwrap();
        approx_eq(table.derivative(0.5), -0.3, 1e-9);
        approx_eq(table.derivative(4.5), 1.5, 1e-9);
        // beyond the last point (clamped)
        approx_eq(table.derivative(6.0), 0.0, 1e-15);
    }
}
