use funapprox::config::Config;
use funapprox::error::ApproxError;
use funapprox::network::Network;
use funapprox::rng;
use funapprox::sweep;

fn test_net() -> Network {
    let cfg = Config::default();
    let mut rng = rng::rng_from_seed(10);
    Network::new(&cfg, &mut rng)
}

#[test]
fn sweep_emits_one_hundred_one_even_points() {
    let net = test_net();
    let points = sweep::sweep(&net, 0.0, 1.0, 100).unwrap();
    assert_eq!(points.len(), 101);
    assert_eq!(points[0].0, 0.0);
    assert!((points[100].0 - 1.0).abs() < 1e-5);

    let step = 1.0 / 100.0;
    for pair in points.windows(2) {
        let dx = pair[1].0 - pair[0].0;
        assert!(dx >= 0.0, "x values must be ascending");
        assert!((dx - step).abs() < 1e-5, "uneven spacing {dx}");
    }
}

#[test]
fn sweep_respects_the_step_count() {
    let net = test_net();
    let points = sweep::sweep(&net, -2.0, 2.0, 8).unwrap();
    assert_eq!(points.len(), 9);
    assert_eq!(points[0].0, -2.0);
    assert!((points[8].0 - 2.0).abs() < 1e-5);
}

#[test]
fn zero_step_count_is_clamped_to_one_interval() {
    let net = test_net();
    let points = sweep::sweep(&net, 0.0, 1.0, 0).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].0, 0.0);
    assert_eq!(points[1].0, 1.0);
    for (x, y) in &points {
        assert!(x.is_finite() && y.is_finite(), "non-finite point ({x}, {y})");
    }
}

#[test]
fn inverted_domain_is_rejected() {
    let net = test_net();
    let err = sweep::sweep(&net, 2.0, 1.0, 100).unwrap_err();
    assert_eq!(err, ApproxError::InvalidDomain { min: 2.0, max: 1.0 });
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(sweep::validate_domain(f32::NAN, 1.0).is_err());
    assert!(sweep::validate_domain(0.0, f32::INFINITY).is_err());
    assert!(sweep::validate_domain(0.0, 1.0).is_ok());
    assert!(sweep::validate_domain(1.0, 1.0).is_ok());
}

#[test]
fn render_writes_one_pair_per_line() {
    let points = vec![(0.0f32, 0.5f32), (0.5, 0.25), (1.0, 0.75)];
    let mut out = Vec::new();
    sweep::render(&points, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "0 0.5");
    assert_eq!(lines[1], "0.5 0.25");
}
