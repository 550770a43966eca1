// Cosine similarity and profile averaging

use super::features::RecipeFeatures;

/// Cosine similarity between two feature vectors. Returns 0.0 when either
/// vector has zero norm.
pub fn cosine(a: &RecipeFeatures, b: &RecipeFeatures) -> f64 {
    let u = a.as_array();
    let v = b.as_array();

    let mut dot = 0.0;
    let mut norm_u = 0.0;
    let mut norm_v = 0.0;
    for i in 0..u.len() {
        dot += u[i] * v[i];
        norm_u += u[i] * u[i];
        norm_v += v[i] * v[i];
    }

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }
    dot / (norm_u.sqrt() * norm_v.sqrt())
}

/// Weighted average of feature vectors with a neutral fallback.
///
/// Both profile-construction paths (local view history and behavioral
/// reports) funnel through here so the zero-weight guard lives in one
/// place. Axes are clamped to 1.0.
pub fn weighted_profile<I>(samples: I) -> RecipeFeatures
where
    I: IntoIterator<Item = (RecipeFeatures, f64)>,
{
    let mut acc = [0.0; 5];
    let mut total = 0.0;

    for (features, weight) in samples {
        if weight <= 0.0 {
            continue;
        }
        let axes = features.as_array();
        for (slot, value) in acc.iter_mut().zip(axes) {
            *slot += value * weight;
        }
        total += weight;
    }

    if total == 0.0 {
        return RecipeFeatures::NEUTRAL;
    }
    RecipeFeatures::from_array(acc.map(|x| (x / total).min(1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_self_is_one() {
        let v = RecipeFeatures::from_array([0.9, 0.8, 0.1, 0.4, 0.9]);
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let u = RecipeFeatures::from_array([0.9, 0.3, 0.5, 0.8, 0.1]);
        let v = RecipeFeatures::from_array([0.1, 0.8, 0.9, 0.4, 0.9]);
        assert_eq!(cosine(&u, &v), cosine(&v, &u));
    }

    #[test]
    fn test_cosine_zero_vector_guard() {
        let zero = RecipeFeatures::from_array([0.0; 5]);
        let v = RecipeFeatures::NEUTRAL;
        assert_eq!(cosine(&zero, &v), 0.0);
        assert_eq!(cosine(&v, &zero), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
    }

    #[test]
    fn test_weighted_profile_neutral_fallback() {
        assert_eq!(weighted_profile(std::iter::empty()), RecipeFeatures::NEUTRAL);
        // zero weights carry no signal either
        let samples = vec![(RecipeFeatures::from_array([0.9; 5]), 0.0)];
        assert_eq!(weighted_profile(samples), RecipeFeatures::NEUTRAL);
    }

    #[test]
    fn test_weighted_profile_weighting() {
        let heavy = RecipeFeatures::from_array([0.9; 5]);
        let light = RecipeFeatures::from_array([0.1; 5]);
        let profile = weighted_profile(vec![(heavy, 3.0), (light, 1.0)]);
        // (0.9 * 3 + 0.1) / 4 = 0.7
        assert!((profile.vegetarian - 0.7).abs() < 1e-12);
    }
}
