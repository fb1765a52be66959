/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the generic integrators advance a state via
/// `state + derivative * delta`, where the derivative is taken with respect to
/// `Delta`. While typically used for time integration, `Delta` can represent
/// any independent variable.
///
/// Implementations are provided for scalar (`f64`) and vector (`[f64; N]`,
/// `Vec<f64>`) states, which covers single equations and systems of
/// equations. Callers with richer state types implement the trait themselves.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + delta * derivative
    }
}

impl<const N: usize> StepIntegrable<f64> for [f64; N] {
    type Derivative = [f64; N];

    fn step(&self, derivative: [f64; N], delta: f64) -> Self {
        let mut next = *self;
        for (value, rate) in next.iter_mut().zip(derivative) {
            *value += delta * rate;
        }
        next
    }
}

/// Steps each component of a dynamically sized state.
///
/// The derivative must have the same length as the state; this is checked in
/// debug builds.
impl StepIntegrable<f64> for Vec<f64> {
    type Derivative = Vec<f64>;

    fn step(&self, derivative: Vec<f64>, delta: f64) -> Self {
        debug_assert_eq!(
            self.len(),
            derivative.len(),
            "derivative length must match state length"
        );
        self.iter()
            .zip(derivative)
            .map(|(value, rate)| value + delta * rate)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Newtype state with a distinct derivative type
    #[derive(Debug, PartialEq)]
    struct Position(f64);
    struct Velocity(f64);

    impl StepIntegrable<f64> for Position {
        type Derivative = Velocity;

        fn step(&self, derivative: Velocity, delta: f64) -> Self {
            Position(self.0 + derivative.0 * delta)
        }
    }

    #[test]
    fn step_newtype_state() {
        let next = Position(0.0).step(Velocity(2.0), 0.5);
        assert_eq!(next, Position(1.0));
    }

    #[test]
    fn step_scalar_state() {
        let x: f64 = 1.0;
        assert_eq!(x.step(-4.0, 0.25), 0.0);
    }

    #[test]
    fn step_array_state() {
        let state: [f64; 3] = [1.0, 2.0, 3.0];
        let next = state.step([0.1, 0.2, 0.3], 10.0);
        assert_eq!(next, [2.0, 4.0, 6.0]);
    }

    #[test]
    fn step_vec_state() {
        let state: Vec<f64> = vec![1.0, -1.0];
        let next = state.step(vec![0.5, 0.5], 2.0);
        assert_eq!(next, vec![2.0, 0.0]);
    }

    #[test]
    fn step_leaves_original_untouched() {
        let state: [f64; 2] = [5.0, 5.0];
        let _ = state.step([1.0, 1.0], 1.0);
        assert_eq!(state, [5.0, 5.0]);
    }
}
