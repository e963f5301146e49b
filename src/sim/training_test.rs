use super::*;

// =============================================================================
// TrainingSpec validation
// =============================================================================

#[test]
fn default_spec_is_valid() {
    let spec = TrainingSpec::default();
    assert!(spec.validate().is_ok());
    assert_eq!(spec.epochs, 100);
    assert_eq!(spec.batch_size, 64);
    assert_eq!(spec.dataset, Dataset::CustomerServiceCalls);
}

#[test]
fn zero_epochs_rejected() {
    let spec = TrainingSpec { epochs: 0, ..TrainingSpec::default() };
    assert_eq!(spec.validate(), Err(SpecError::EpochsOutOfRange(0)));
}

#[test]
fn epochs_above_1000_rejected() {
    let spec = TrainingSpec { epochs: 1001, ..TrainingSpec::default() };
    assert_eq!(spec.validate(), Err(SpecError::EpochsOutOfRange(1001)));
}

#[test]
fn every_allowed_batch_size_accepted() {
    for batch_size in ALLOWED_BATCH_SIZES {
        let spec = TrainingSpec { batch_size, ..TrainingSpec::default() };
        assert!(spec.validate().is_ok());
    }
}

#[test]
fn odd_batch_size_rejected() {
    let spec = TrainingSpec { batch_size: 48, ..TrainingSpec::default() };
    assert_eq!(spec.validate(), Err(SpecError::UnsupportedBatchSize(48)));
}

#[test]
fn spec_deserializes_with_defaults() {
    let spec: TrainingSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec.epochs, 100);
    assert_eq!(spec.batch_size, 64);
}

#[test]
fn spec_rejects_unknown_dataset() {
    let result = serde_json::from_str::<TrainingSpec>(r#"{"dataset":"stock_tips"}"#);
    assert!(result.is_err());
}

// =============================================================================
// planned_epochs
// =============================================================================

#[test]
fn planned_epochs_truncates_at_cap() {
    let spec = TrainingSpec { epochs: 100, ..TrainingSpec::default() };
    assert_eq!(spec.planned_epochs(20), 20);
}

#[test]
fn planned_epochs_below_cap_untouched() {
    let spec = TrainingSpec { epochs: 5, ..TrainingSpec::default() };
    assert_eq!(spec.planned_epochs(20), 5);
}

#[test]
fn planned_epochs_exactly_at_cap() {
    let spec = TrainingSpec { epochs: 20, ..TrainingSpec::default() };
    assert_eq!(spec.planned_epochs(20), 20);
}

#[test]
fn planned_epochs_honors_larger_cap() {
    let spec = TrainingSpec { epochs: 50, ..TrainingSpec::default() };
    assert_eq!(spec.planned_epochs(40), 40);
}

// =============================================================================
// training_step curves
// =============================================================================

#[test]
fn progress_reaches_exactly_one_on_final_epoch() {
    let mut rng = rand::rng();
    let step = training_step(&mut rng, 20, 20);
    assert!((step.progress - 1.0).abs() < f64::EPSILON);
}

#[test]
fn accuracy_and_f1_stay_within_unit_interval() {
    let mut rng = rand::rng();
    for epoch in 1..=20 {
        for _ in 0..50 {
            let step = training_step(&mut rng, epoch, 20);
            assert!((0.0..=1.0).contains(&step.accuracy), "accuracy = {}", step.accuracy);
            assert!((0.0..=1.0).contains(&step.f1), "f1 = {}", step.f1);
        }
    }
}

#[test]
fn loss_decays_in_expectation() {
    let mut rng = rand::rng();
    let trials = 200;
    let mean_at = |rng: &mut rand::rngs::ThreadRng, epoch| {
        (0..trials).map(|_| training_step(rng, epoch, 20).loss).sum::<f64>() / f64::from(trials)
    };
    let early = mean_at(&mut rng, 1);
    let late = mean_at(&mut rng, 20);
    // 1.5*exp(-1/8) ~ 1.32 vs 1.5*exp(-20/8) ~ 0.12; noise is +/-0.1.
    assert!(early > late + 0.5, "early = {early}, late = {late}");
}

#[test]
fn five_epoch_run_final_accuracy_matches_formula() {
    // accuracy(5) = 0.6 + (5/20)*0.35 = 0.6875, jitter +/-0.02.
    let mut rng = rand::rng();
    let step = training_step(&mut rng, 5, 5);
    assert!((step.accuracy - 0.6875).abs() <= 0.02 + 1e-9);
    assert!((step.progress - 1.0).abs() < f64::EPSILON);
}

#[test]
fn display_deltas_within_bounds() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let step = training_step(&mut rng, 3, 10);
        assert!((0.5..=2.0).contains(&step.accuracy_delta_pct));
        assert!((-0.05..=-0.01).contains(&step.loss_delta));
        assert!((0.005..=0.02).contains(&step.f1_delta));
    }
}

#[test]
fn loss_can_only_dip_slightly_negative() {
    let mut rng = rand::rng();
    for _ in 0..500 {
        let step = training_step(&mut rng, 20, 20);
        assert!(step.loss >= -0.1);
    }
}
