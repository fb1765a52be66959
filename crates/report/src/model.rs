use ivp_core::OdeFunction;
use serde::Deserialize;

/// A scalar growth model with a known analytical solution.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    /// Exponential growth or decay: `dx/dt = rate * x`.
    Exponential { rate: f64 },

    /// Logistic growth: `dx/dt = rate * x * (1 - x / capacity)`.
    Logistic { rate: f64, capacity: f64 },
}

impl Model {
    /// Returns the analytical solution at `t` for `x(t0) = x0`.
    pub fn exact(&self, x0: f64, t0: f64, t: f64) -> f64 {
        let elapsed = t - t0;
        match *self {
            Self::Exponential { rate } => x0 * (rate * elapsed).exp(),
            Self::Logistic { rate, capacity } => {
                capacity / (1.0 + (capacity / x0 - 1.0) * (-rate * elapsed).exp())
            }
        }
    }

    /// Short name used in report headers.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exponential { .. } => "exponential",
            Self::Logistic { .. } => "logistic",
        }
    }
}

impl OdeFunction<f64> for Model {
    fn derivative(&self, x: &f64, _t: f64) -> f64 {
        match *self {
            Self::Exponential { rate } => rate * x,
            Self::Logistic { rate, capacity } => rate * x * (1.0 - x / capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exponential_exact_solution() {
        let model = Model::Exponential { rate: -0.5 };
        assert_relative_eq!(model.exact(4.0, 1.0, 3.0), 4.0 * (-1.0_f64).exp());
    }

    #[test]
    fn logistic_exact_solution_starts_at_initial_value() {
        let model = Model::Logistic {
            rate: 0.95,
            capacity: 100.0,
        };
        assert_relative_eq!(model.exact(1.0, 0.0, 0.0), 1.0);
        assert_relative_eq!(model.exact(1.0, 0.0, 50.0), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn logistic_derivative_vanishes_at_capacity() {
        let model = Model::Logistic {
            rate: 0.95,
            capacity: 100.0,
        };
        let x: f64 = 100.0;
        assert_eq!(model.derivative(&x, 0.0), 0.0);
    }

    #[test]
    fn logistic_exact_solution_satisfies_equation() {
        let model = Model::Logistic {
            rate: 0.7,
            capacity: 20.0,
        };
        let (t, dt) = (2.0, 1e-6);
        let slope = (model.exact(3.0, 0.0, t + dt) - model.exact(3.0, 0.0, t - dt)) / (2.0 * dt);
        let x = model.exact(3.0, 0.0, t);
        assert_relative_eq!(slope, model.derivative(&x, t), max_relative = 1e-6);
    }
}
