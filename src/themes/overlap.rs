// Weighted Jaccard overlap between extracted themes and the user's
// preferred themes.
//
// The extracted side carries each alignment theme's extraction score,
// normalized to sum to 1; the preference side spreads uniform weight
// across the user's themes. For every theme in either set we take the
// minimum and maximum weight from both sides:
//
//   overlap = sum(min(weight_a, weight_b)) / sum(max(weight_a, weight_b))
//
// 0.0 means no shared themes, 1.0 means identical distributions. Themes
// that dominate the reviews matter more than marginal ones.

use std::collections::{HashMap, HashSet};

use crate::themes::extractor::ThemeScore;

/// Overlap between the ranked alignment themes and the user's preferred
/// theme set. Either side empty → 0.0.
pub fn theme_overlap<'a, I>(alignment: &[ThemeScore], preferred: I) -> f64
where
    I: IntoIterator<Item = &'a String>,
{
    let preferred: Vec<&String> = preferred.into_iter().collect();
    if alignment.is_empty() || preferred.is_empty() {
        return 0.0;
    }

    let total: f64 = alignment.iter().map(|t| t.score).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let weights_a: HashMap<String, f64> = alignment
        .iter()
        .map(|t| (t.theme.clone(), t.score / total))
        .collect();

    let per_theme = 1.0 / preferred.len() as f64;
    let weights_b: HashMap<String, f64> = preferred
        .into_iter()
        .map(|name| (name.clone(), per_theme))
        .collect();

    jaccard_from_weights(&weights_a, &weights_b)
}

/// Weighted Jaccard over raw weight maps. Separated from `theme_overlap`
/// so it can be used with ad-hoc weight maps.
pub fn jaccard_from_weights(
    weights_a: &HashMap<String, f64>,
    weights_b: &HashMap<String, f64>,
) -> f64 {
    let all_keys: HashSet<&String> = weights_a.keys().chain(weights_b.keys()).collect();
    if all_keys.is_empty() {
        return 0.0;
    }

    let mut min_sum = 0.0;
    let mut max_sum = 0.0;

    for key in all_keys {
        let a = weights_a.get(key).copied().unwrap_or(0.0);
        let b = weights_b.get(key).copied().unwrap_or(0.0);
        min_sum += a.min(b);
        max_sum += a.max(b);
    }

    if max_sum == 0.0 {
        0.0
    } else {
        min_sum / max_sum
    }
}
