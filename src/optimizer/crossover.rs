use crate::core_types::ParameterVector;
use fastrand::Rng;

/// Blend crossover: each weight pair is mixed with its own random gamma drawn
/// from `[-alpha, 1 + alpha)`, so children may land outside the parents' span.
pub fn blend(a: &mut ParameterVector, b: &mut ParameterVector, alpha: f64, rng: &mut Rng) {
    let mut xa = a.to_array();
    let mut xb = b.to_array();

    for (x1, x2) in xa.iter_mut().zip(xb.iter_mut()) {
        let gamma = (1.0 + 2.0 * alpha) * rng.f64() - alpha;
        let (p1, p2) = (*x1, *x2);
        *x1 = (1.0 - gamma) * p1 + gamma * p2;
        *x2 = gamma * p1 + (1.0 - gamma) * p2;
    }

    *a = ParameterVector::from_array(xa);
    *b = ParameterVector::from_array(xb);
}
