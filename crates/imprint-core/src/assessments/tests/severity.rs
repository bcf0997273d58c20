use crate::assessments::scoring::{
    classify_percentage, classify_raw_mean, ClassificationError, Severity,
};

#[test]
fn percentage_bands_partition_the_domain() {
    for percentage in 0u8..=100 {
        let severity = classify_percentage(percentage).expect("in domain");
        let expected = match percentage {
            0..=24 => Severity::Low,
            25..=49 => Severity::Moderate,
            50..=74 => Severity::High,
            _ => Severity::Severe,
        };
        assert_eq!(severity, expected, "percentage {percentage}");
    }
}

#[test]
fn percentage_boundaries_are_inclusive_and_out_of_domain_rejected() {
    assert_eq!(classify_percentage(0).expect("in domain"), Severity::Low);
    assert_eq!(
        classify_percentage(100).expect("in domain"),
        Severity::Severe
    );

    match classify_percentage(101) {
        Err(ClassificationError::PercentageOutOfRange(101)) => {}
        other => panic!("expected out-of-range error, got {other:?}"),
    }
}

#[test]
fn raw_mean_bands_cover_their_scale() {
    assert_eq!(classify_raw_mean(1.0).expect("in domain"), Severity::Low);
    assert_eq!(classify_raw_mean(1.49).expect("in domain"), Severity::Low);
    assert_eq!(classify_raw_mean(1.5).expect("in domain"), Severity::Mild);
    assert_eq!(classify_raw_mean(2.49).expect("in domain"), Severity::Mild);
    assert_eq!(
        classify_raw_mean(2.5).expect("in domain"),
        Severity::Moderate
    );
    assert_eq!(
        classify_raw_mean(2.99).expect("in domain"),
        Severity::Moderate
    );
    assert_eq!(classify_raw_mean(3.0).expect("in domain"), Severity::High);
    assert_eq!(classify_raw_mean(4.0).expect("in domain"), Severity::High);
}

#[test]
fn raw_mean_rejects_values_off_the_scale() {
    assert!(classify_raw_mean(0.99).is_err());
    assert!(classify_raw_mean(4.01).is_err());
    assert!(classify_raw_mean(f64::NAN).is_err());
}

#[test]
fn severity_colors_follow_the_renderer_contract() {
    assert_eq!(Severity::Low.color_hex(), "#2e7d32");
    assert_eq!(Severity::Mild.color_hex(), Severity::Moderate.color_hex());
    assert_eq!(Severity::High.color_hex(), "#c62828");
    assert_eq!(Severity::Severe.color_hex(), "#7f0000");
}
