use std::f64::consts::PI;

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + libm::exp(-z))
}

/// Log of the normal density with the given mean and variance.
pub fn gaussian_log_density(x: f64, mean: f64, variance: f64) -> f64 {
    let diff = x - mean;
    -0.5 * libm::log(2.0 * PI * variance) - diff * diff / (2.0 * variance)
}
