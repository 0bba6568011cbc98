use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Similarity at or below this value is treated as "not crop-relevant".
pub const DEFAULT_RELEVANCE_FLOOR: f64 = 0.4;

fn word_pattern() -> &'static Regex {
    static WORDS: OnceLock<Regex> = OnceLock::new();
    WORDS.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Case-folded set of word tokens in `text`.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    word_pattern()
        .find_iter(text)
        .map(|token| token.as_str().to_lowercase())
        .collect()
}

/// Cosine similarity of the binary token-presence vectors of `a` and `b`.
///
/// Returns 0 when either text has no tokens.
pub fn similarity(a: &str, b: &str) -> f64 {
    token_cosine(&tokenize(a), &tokenize(b))
}

fn token_cosine(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f64 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    // With 0/1 components the dot product is the shared-token count and each magnitude is
    // the square root of the set size.
    let shared = left.intersection(right).count() as f64;
    let magnitude = (left.len() as f64).sqrt() * (right.len() as f64).sqrt();
    (shared / magnitude).clamp(0.0, 1.0)
}

/// Relevance of a farmer's crop to a scheme's descriptive text, using the default floor.
pub fn crop_relevance(farmer_crop: &str, scheme_text: &str) -> f64 {
    crop_relevance_with_floor(farmer_crop, scheme_text, DEFAULT_RELEVANCE_FLOOR)
}

pub fn crop_relevance_with_floor(farmer_crop: &str, scheme_text: &str, floor: f64) -> f64 {
    if farmer_crop.trim().is_empty() || scheme_text.trim().is_empty() {
        return 0.0;
    }

    let score = similarity(farmer_crop, scheme_text);
    if score > floor {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_case_folds_and_deduplicates() {
        let tokens = tokenize("Rice, RICE and wheat-straw!");
        let expected: BTreeSet<String> = ["rice", "and", "wheat", "straw"]
            .into_iter()
            .map(str::to_string)
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn tokenize_empty_input_yields_empty_set() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  -- ,, ").is_empty());
    }

    #[test]
    fn tokenize_keeps_underscores_and_digits_inside_words() {
        let tokens = tokenize("kharif_2024 paddy");
        assert!(tokens.contains("kharif_2024"));
        assert!(tokens.contains("paddy"));
    }

    #[test]
    fn similarity_of_empty_text_is_zero() {
        assert_eq!(similarity("", "anything"), 0.0);
        assert_eq!(similarity("anything", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn similarity_of_identical_token_sets_is_one() {
        let score = similarity("crop insurance", "Insurance CROP");
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_matches_binary_cosine() {
        // shared = 2, |a| = 2, |b| = 3
        let score = similarity("crop insurance", "Crop insurance scheme");
        let expected = 2.0 / (2.0_f64.sqrt() * 3.0_f64.sqrt());
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = "organic farming support";
        let b = "Organic and sustainable farming support";
        assert_eq!(similarity(a, b), similarity(b, a));
    }

    #[test]
    fn crop_relevance_applies_floor() {
        assert_eq!(crop_relevance("wheat", "unrelated insurance text"), 0.0);
        // one shared token out of 1 and 3: 1/sqrt(3) ~= 0.577, above the floor
        let relevance = crop_relevance("insurance", "Crop insurance scheme");
        assert!(relevance > DEFAULT_RELEVANCE_FLOOR);
        // 1/sqrt(2*4) ~= 0.354, at or below the floor
        assert_eq!(
            crop_relevance("paddy insurance", "Crop insurance scheme details"),
            0.0
        );
    }

    #[test]
    fn crop_relevance_of_blank_inputs_is_zero() {
        assert_eq!(crop_relevance("", "Crop insurance scheme"), 0.0);
        assert_eq!(crop_relevance("rice", "   "), 0.0);
    }

    #[test]
    fn custom_floor_is_respected() {
        let crop = "paddy insurance";
        let text = "Crop insurance scheme details";
        assert_eq!(crop_relevance_with_floor(crop, text, 0.3), similarity(crop, text));
    }
}
