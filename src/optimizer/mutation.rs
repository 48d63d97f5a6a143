use crate::core_types::ParameterVector;
use fastrand::Rng;
use std::f64::consts::PI;

/// Standard normal sample via Box-Muller.
pub fn standard_normal(rng: &mut Rng) -> f64 {
    // 1 - f64() lies in (0, 1], keeping ln() finite.
    let u1 = 1.0 - rng.f64();
    let u2 = rng.f64();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Adds `N(mu, sigma)` noise to each weight independently with probability `indpb`.
pub fn gaussian(params: &mut ParameterVector, mu: f64, sigma: f64, indpb: f64, rng: &mut Rng) {
    let mut xs = params.to_array();
    for x in xs.iter_mut() {
        if rng.f64() < indpb {
            *x += mu + sigma * standard_normal(rng);
        }
    }
    *params = ParameterVector::from_array(xs);
}
