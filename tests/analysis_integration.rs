//! Classifier and recommender against generated input

use proptest::prelude::*;
use sortvis_rs::analysis::{
    classify, recommend, Classification, Classifier, ClassifierConfig, DataProfile,
    DisplacementMetric, Priority,
};
use sortvis_rs::generator::{ArrayGenerator, ArrayPattern};
use sortvis_rs::Algorithm;

#[test]
fn test_known_shapes() {
    assert_eq!(classify(&[9]).unwrap(), Classification::SingleElement);
    assert_eq!(classify(&[1, 2, 3, 4, 5]).unwrap(), Classification::Sorted);
    assert_eq!(classify(&[5, 4, 3, 2, 1]).unwrap(), Classification::ReverseSorted);
    assert!(classify(&[]).is_err());
}

#[test]
fn test_generated_patterns_classify_as_expected() {
    let mut generator = ArrayGenerator::new(11);
    for _ in 0..20 {
        let sorted = generator.generate(ArrayPattern::BestCase, 30);
        assert_eq!(classify(&sorted).unwrap(), Classification::Sorted);
    }

    // A constant array would count as sorted first
    let reversed = generator.generate(ArrayPattern::WorstCase, 30);
    assert!(matches!(
        classify(&reversed).unwrap(),
        Classification::ReverseSorted | Classification::Sorted
    ));
}

#[test]
fn test_duplicate_heavy_input_depends_on_metric() {
    // Sorted copy is [1 x 9, 2], so the 2 belongs at index 9
    let mut array = vec![1; 9];
    array.insert(0, 2);
    array.swap(0, 1);

    let stable = Classifier::default();
    let first = Classifier::new(ClassifierConfig {
        metric: DisplacementMetric::FirstOccurrence,
        ..Default::default()
    });

    // [1, 2, 1, 1, ...]: the 2 is eight places from home
    assert_eq!(stable.classify(&array).unwrap(), Classification::Random);
    assert!(first.max_displacement(&array) >= stable.max_displacement(&array));
}

#[test]
fn test_recommendation_names_an_engine_when_available() {
    let rec = recommend(8, DataProfile::Sorted, Priority::Time);
    assert_eq!(rec.algorithm, Some(Algorithm::Insertion));

    let rec = recommend(64, DataProfile::Sorted, Priority::Time);
    assert_eq!(rec.algorithm, None);
}

proptest! {
    #[test]
    fn test_classification_is_idempotent(values in prop::collection::vec(-20i64..20, 1..40)) {
        let first = classify(&values).unwrap();
        let second = classify(&values).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_input_is_never_random(mut values in prop::collection::vec(0i64..1000, 2..40)) {
        values.sort();
        prop_assert_eq!(classify(&values).unwrap(), Classification::Sorted);
    }
}
