use funapprox::config::Config;
use funapprox::error::ApproxError;
use funapprox::logging::{Callback, CallbackSignal, MetricRecord};
use funapprox::network::Network;
use funapprox::rng;
use funapprox::sample::Sample;
use funapprox::train;

fn two_samples() -> Vec<Sample> {
    vec![
        Sample { x: 0.0, y: 0.5 },
        Sample { x: 1.0, y: 0.8 },
    ]
}

#[test]
fn fixed_epochs_policy_runs_the_full_count() {
    let cfg = Config {
        max_epochs: 50,
        ..Config::default()
    };
    let mut rng = rng::rng_from_seed(5);
    let mut net = Network::new(&cfg, &mut rng);
    let report = train::train(&mut net, &two_samples(), &cfg, &mut [], None).unwrap();
    assert_eq!(report.epochs_run, 50);
    assert!(!report.converged);
}

#[test]
fn delta_early_stop_ends_before_the_epoch_cap() {
    let cfg = Config {
        max_epochs: 5_000,
        early_stop: true,
        ..Config::default()
    };
    let mut rng = rng::rng_from_seed(6);
    let mut net = Network::new(&cfg, &mut rng);
    let samples = vec![Sample { x: 0.3, y: 0.5 }];
    let report = train::train(&mut net, &samples, &cfg, &mut [], None).unwrap();
    assert!(report.converged);
    assert!(
        report.epochs_run < 5_000,
        "expected early stop, ran {} epochs",
        report.epochs_run
    );
}

#[test]
fn empty_samples_are_rejected_without_touching_parameters() {
    let cfg = Config::default();
    let mut rng = rng::rng_from_seed(7);
    let mut net = Network::new(&cfg, &mut rng);
    let w1 = net.w1.clone();
    let b1 = net.b1.clone();
    let w2 = net.w2.clone();
    let b2 = net.b2.clone();

    let err = train::train(&mut net, &[], &cfg, &mut [], None).unwrap_err();
    assert_eq!(err, ApproxError::EmptySamples);
    assert_eq!(net.w1, w1);
    assert_eq!(net.b1, b1);
    assert_eq!(net.w2, w2);
    assert_eq!(net.b2, b2);
}

#[test]
fn non_finite_cost_reports_divergence() {
    let cfg = Config::default();
    let mut rng = rng::rng_from_seed(8);
    let mut net = Network::new(&cfg, &mut rng);
    net.b2.set(0, 0, f32::NAN);

    let err = train::train(&mut net, &two_samples(), &cfg, &mut [], None).unwrap_err();
    assert!(
        matches!(err, ApproxError::Diverged { epoch: 0, .. }),
        "unexpected error: {err}"
    );
}

struct StopAfterFirstEpoch;

impl Callback for StopAfterFirstEpoch {
    fn on_epoch_end(&mut self, _metrics: &MetricRecord) -> CallbackSignal {
        CallbackSignal::Stop
    }
}

#[test]
fn callbacks_can_stop_training() {
    let cfg = Config::default();
    let mut rng = rng::rng_from_seed(9);
    let mut net = Network::new(&cfg, &mut rng);
    let mut callbacks: Vec<Box<dyn Callback>> = vec![Box::new(StopAfterFirstEpoch)];
    let report = train::train(&mut net, &two_samples(), &cfg, &mut callbacks, None).unwrap();
    assert_eq!(report.epochs_run, 1);
}

#[test]
fn training_moves_predictions_toward_the_samples() {
    let cfg = Config::default();
    let mut rng = rng::rng_from_seed(42);
    let mut net = Network::new(&cfg, &mut rng);
    let samples = two_samples();

    let untrained = [net.predict(0.0), net.predict(1.0)];
    train::train(&mut net, &samples, &cfg, &mut [], None).unwrap();
    let trained = [net.predict(0.0), net.predict(1.0)];

    for (i, sample) in samples.iter().enumerate() {
        assert!(trained[i] > 0.0 && trained[i] < 1.0);
        let d_trained = (trained[i] - sample.y).abs();
        let d_untrained = (untrained[i] - sample.y).abs();
        // Results depend on the seed, so accept either strict improvement or
        // a fit that is already tight.
        assert!(
            d_trained < d_untrained || d_trained < 1e-2,
            "sample {i}: {d_untrained} -> {d_trained}"
        );
    }
}
