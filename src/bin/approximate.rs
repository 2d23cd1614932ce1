use std::io;

use indicatif::ProgressBar;

use funapprox::config::Config;
use funapprox::logging::{Callback, CallbackSignal, Logger, MetricRecord};
use funapprox::math;
use funapprox::network::Network;
use funapprox::rng;
use funapprox::sample;
use funapprox::sweep;
use funapprox::train;

#[path = "common.rs"]
mod common;

/// Drives the progress bar from the trainer's epoch hook.
struct Progress {
    bar: ProgressBar,
}

impl Callback for Progress {
    fn on_epoch_end(&mut self, metrics: &MetricRecord) -> CallbackSignal {
        self.bar.inc(1);
        self.bar
            .set_message(format!("epoch {} cost {:.6}", metrics.epoch, metrics.cost));
        CallbackSignal::Continue
    }
}

fn main() {
    let args = common::init_logging();
    let opts = match common::parse_cli(args.into_iter().skip(1)) {
        Ok(o) => o,
        Err(msg) => common::fail(&msg),
    };
    if opts.positional.len() != 3 {
        common::fail("invalid number of parameters.");
    }

    let samples_path = &opts.positional[0];
    let domain_min = common::parse_float(&opts.positional[1], "min domain");
    let domain_max = common::parse_float(&opts.positional[2], "max domain");

    let mut cfg = match opts.config.as_deref() {
        Some(path) => match Config::from_path(path) {
            Some(cfg) => cfg,
            None => common::fail(&format!("missing or invalid config file {path}.")),
        },
        None => Config::default(),
    };
    if opts.early_stop {
        cfg.early_stop = true;
    }

    if let Err(e) = sweep::validate_domain(domain_min, domain_max) {
        common::fail(&e.to_string());
    }
    let samples = match sample::read_samples(samples_path) {
        Ok(s) => s,
        Err(e) => common::fail(&e.to_string()),
    };

    let mut rng = match opts.seed {
        Some(seed) => rng::rng_from_seed(seed),
        None => rng::rng_from_env(),
    };
    let mut net = Network::new(&cfg, &mut rng);

    let mut logger = opts
        .log_dir
        .map(|dir| Logger::new(Some(dir), opts.experiment.clone()))
        .transpose()
        .unwrap_or_else(|e| {
            log::warn!("metrics logger disabled: {e}");
            None
        });

    math::reset_matrix_ops();
    let bar = ProgressBar::new(cfg.max_epochs as u64);
    let mut callbacks: Vec<Box<dyn Callback>> = vec![Box::new(Progress { bar: bar.clone() })];

    let report = match train::train(&mut net, &samples, &cfg, &mut callbacks, logger.as_mut()) {
        Ok(r) => r,
        Err(e) => common::fail(&e.to_string()),
    };
    bar.finish_with_message(format!(
        "done after {} epochs, final cost {:.6}",
        report.epochs_run, report.final_cost
    ));
    log::info!("total matrix ops: {}", math::matrix_ops_count());

    let points = match sweep::sweep(&net, domain_min, domain_max, cfg.sweep_steps) {
        Ok(p) => p,
        Err(e) => common::fail(&e.to_string()),
    };
    if let Err(e) = sweep::render(&points, &mut io::stdout().lock()) {
        common::fail(&format!("failed to write sweep: {e}"));
    }
}
