use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Draw one label proportionally to its weight.
///
/// Weights need not sum to one. Returns `None` when the list is empty or no
/// weight is positive and finite.
pub(crate) fn weighted_choice<T: Copy, R: Rng + ?Sized>(
    weighted: &[(T, f32)],
    rng: &mut R,
) -> Option<T> {
    let dist = WeightedIndex::new(weighted.iter().map(|(_, w)| *w)).ok()?;
    Some(weighted[dist.sample(rng)].0)
}

/// Scale weights so they sum to one; `None` if the total is not positive.
pub(crate) fn normalize<T: Copy>(weighted: &[(T, f32)]) -> Option<Vec<(T, f32)>> {
    let total: f32 = weighted.iter().map(|(_, w)| *w).sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    Some(weighted.iter().map(|&(label, w)| (label, w / total)).collect())
}

/// Round to two decimal places.
pub(crate) fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
