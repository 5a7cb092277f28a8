/// Element-wise activation applied after every layer's affine transform.
///
/// Sigmoid is the only activation the engine trains with; its derivative is
/// taken from the cached activation rather than from the pre-activation, so
/// pre-activations never need to be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(x),
        }
    }

    /// Derivative expressed through the activation's own output `a = f(z)`.
    pub fn derivative_from_output(&self, a: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => a * (1.0 - a),
        }
    }
}

/// σ(x) = 1 / (1 + e^(−x))
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_of_zero_is_one_half() {
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_is_strictly_inside_unit_interval() {
        for step in -600..=600 {
            let x = step as f64 * 0.05;
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for &x in &[0.1, 1.0, 2.5, 7.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_from_output_matches_finite_difference() {
        let act = ActivationFunction::Sigmoid;
        let h = 1e-6;
        for &z in &[-3.0, -0.5, 0.0, 0.7, 2.0] {
            let numeric = (act.function(z + h) - act.function(z - h)) / (2.0 * h);
            let analytic = act.derivative_from_output(act.function(z));
            assert!((numeric - analytic).abs() < 1e-8, "z = {z}");
        }
        assert_eq!(act.derivative_from_output(0.5), 0.25);
    }
}
