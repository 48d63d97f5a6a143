use hashtune::consts::BUCKETS;
use hashtune::core_types::ParameterVector;
use hashtune::wordset::normalize::normalize;
use hashtune::wordset::HashWordSet;
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_case_and_punctuation_variants_collapse() {
    let mut set = HashWordSet::new();
    for word in ["Cat.", "cat", "CAT!"] {
        set.add(word);
    }
    assert_eq!(set.len(), 1);
    assert!(set.contains("CAT"));

    let m = set.efficiency_factor();
    assert_eq!(m.size, 1);
    assert_eq!(m.max_length, 1);
    assert_eq!(m.min_length, 0);
}

#[rstest]
#[case("\"Hello,\"", "HELLO")]
#[case("(don't)", "DON'T")]
#[case("...", ".")]
#[case("", "")]
fn test_normalize_examples(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_hundred_distinct_words_average_one() {
    let mut set = HashWordSet::new();
    for i in 0..100 {
        set.add(&format!("word{}", i));
    }
    let m = set.efficiency_factor();
    assert_eq!(m.size, 100);
    // Integer division: 100 / 53.
    assert_eq!(m.avg_length, 1);
    assert_eq!(set.chain_lengths().len(), BUCKETS);
}

#[test]
fn test_empty_set_metrics() {
    let m = HashWordSet::new().efficiency_factor();
    assert_eq!(m.size, 0);
    assert_eq!(m.max_length, 0);
    assert_eq!(m.efficiency_factor, 0.0);
}

#[test]
fn test_report_format() {
    let mut set = HashWordSet::new();
    set.add("alpha");
    let text = set.to_string();
    let re = regex::Regex::new(
        r"size = 1\s+minLength = 0\s+avgLength = 0\s+maxLength = 1\s+efficiencyFactor = [0-9.]+",
    )
    .unwrap();
    assert!(re.is_match(&text), "unexpected report: {}", text);
}

proptest! {
    #[test]
    fn prop_adding_twice_is_idempotent(words in prop::collection::vec("[a-zA-Z]{1,8}[.,!]?", 0..60)) {
        let mut once = HashWordSet::new();
        let mut twice = HashWordSet::new();
        for w in &words {
            once.add(w);
            twice.add(w);
            twice.add(w);
        }
        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.chain_lengths(), twice.chain_lengths());
    }

    #[test]
    fn prop_chain_lengths_sum_to_size(
        words in prop::collection::vec("[a-z]{1,10}", 0..200),
        vowel in -5.0f64..5.0,
        endings in -5.0f64..5.0,
    ) {
        let mut set = HashWordSet::with_weights(ParameterVector::new(vowel, endings, 2.0, 2.0));
        for w in &words {
            set.add(w);
        }
        let lengths = set.chain_lengths();
        let m = set.efficiency_factor();
        prop_assert_eq!(lengths.iter().sum::<usize>(), set.len());
        prop_assert_eq!(m.avg_length, set.len() / BUCKETS);
        prop_assert!(m.min_length <= m.max_length);
        prop_assert!(m.efficiency_factor >= 0.0);
    }

    #[test]
    fn prop_every_added_word_is_found(words in prop::collection::vec("[A-Za-z']{1,12}", 1..80)) {
        let mut set = HashWordSet::new();
        for w in &words {
            set.add(w);
        }
        for w in &words {
            prop_assert!(set.contains(&normalize(w)));
        }
    }
}
