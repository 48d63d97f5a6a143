use crate::consts::HASH_PRIME;
use crate::core_types::ParameterVector;

const VOWELS: &str = "AEIOUaeiou";

/// Buckets `word` into `[0, buckets)` using the weighted polynomial hash.
///
/// Each character's code point is scaled by the vowel multiplier when it is a
/// vowel and, independently, by the endings multiplier when it sits two or
/// three places from the end. The accumulator is reduced modulo `buckets` and
/// truncated after every character. Only the vowel and endings weights are read.
pub fn hash(word: &str, weights: &ParameterVector, buckets: usize) -> usize {
    debug_assert!(buckets > 0);
    let len = word.chars().count();
    let modulus = buckets as f64;
    let mut h: usize = 0;

    for (i, c) in word.chars().enumerate() {
        let mut value = c as u32 as f64;

        if VOWELS.contains(c) {
            value *= weights.vowel;
        }
        if i + 2 == len || i + 3 == len {
            value *= weights.endings;
        }

        // rem_euclid keeps negative weights inside the table; the outer `%`
        // folds the rounding case where a tiny negative lands exactly on `modulus`.
        let next = (h as f64 * HASH_PRIME + value).rem_euclid(modulus);
        h = (next as usize) % buckets;
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BUCKETS;
    use proptest::prelude::*;

    fn classic() -> ParameterVector {
        ParameterVector::default()
    }

    #[test]
    fn test_empty_word_is_bucket_zero() {
        assert_eq!(hash("", &classic(), BUCKETS), 0);
    }

    #[test]
    fn test_single_char_matches_hand_computation() {
        // 'A' = 65, vowel x2 = 130, 130 % 53 = 24
        assert_eq!(hash("A", &classic(), BUCKETS), 24);
        // 'B' = 66, 66 % 53 = 13
        assert_eq!(hash("B", &classic(), BUCKETS), 13);
    }

    #[test]
    fn test_multipliers_stack_on_same_char() {
        // "AB": 'A' is a vowel and at len-2, so 65 * 2 * 4 = 520 -> 520 % 53 = 43
        // then (43 * 31 + 66) % 53 = 1399 % 53 = 21
        assert_eq!(hash("AB", &classic(), BUCKETS), 21);
    }

    #[test]
    fn test_inert_weights_do_not_move_buckets() {
        let base = classic();
        let mut tweaked = base;
        tweaked.consonant = 97.3;
        tweaked.frequency = -12.0;
        for w in ["THE", "PRIDE", "PREJUDICE", "ELIZABETH", "A"] {
            assert_eq!(hash(w, &base, BUCKETS), hash(w, &tweaked, BUCKETS));
        }
    }

    #[test]
    fn test_fractional_weights_truncate_each_step() {
        let w = ParameterVector::new(1.5, 1.0, 1.0, 1.0);
        // 'A' = 65 * 1.5 = 97.5 -> 97.5 % 53 = 44.5 -> 44
        assert_eq!(hash("A", &w, BUCKETS), 44);
        // "AA": first 'A' at len-2: 97.5 -> 44; then 44 * 31 + 97.5 = 1461.5 % 53 = 30.5 -> 30
        assert_eq!(hash("AA", &w, BUCKETS), 30);
    }

    proptest! {
        #[test]
        fn prop_hash_in_range(
            word in "\\PC{0,24}",
            v in -1.0e6..1.0e6f64,
            e in -1.0e6..1.0e6f64,
        ) {
            let w = ParameterVector::new(v, e, 1.0, 1.0);
            prop_assert!(hash(&word, &w, BUCKETS) < BUCKETS);
        }
    }
}
