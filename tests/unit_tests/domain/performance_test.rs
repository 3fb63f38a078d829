use interviewer::domain::{Performance, PerformanceThresholds};

#[test]
fn given_average_above_upper_bound_when_classifying_then_excellent() {
    assert_eq!(PerformanceThresholds::default().classify(0.41), Performance::Excellent);
}

#[test]
fn given_average_on_upper_bound_when_classifying_then_good() {
    assert_eq!(PerformanceThresholds::default().classify(0.4), Performance::Good);
}

#[test]
fn given_average_on_lower_bound_when_classifying_then_needs_improvement() {
    let thresholds = PerformanceThresholds::default();

    assert_eq!(thresholds.classify(0.0), Performance::NeedsImprovement);
    assert_eq!(thresholds.classify(-0.5), Performance::NeedsImprovement);
    assert_eq!(thresholds.classify(0.01), Performance::Good);
}

#[test]
fn given_performance_when_serialized_then_display_names_are_used() {
    assert_eq!(
        serde_json::to_string(&Performance::NeedsImprovement).unwrap(),
        "\"Needs Improvement\""
    );
    assert_eq!(Performance::Excellent.to_string(), "Excellent");
}
