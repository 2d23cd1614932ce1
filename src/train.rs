use crate::config::Config;
use crate::error::ApproxError;
use crate::logging::{Callback, CallbackSignal, Logger, MetricRecord};
use crate::network::Network;
use crate::sample::Sample;

/// Controls when the epoch loop ends.
///
/// `FixedEpochs` is the default: every run goes the full epoch count and the
/// per-epoch cost change is tracked for logging only. `DeltaEarlyStop` turns
/// that tracked change into an actual convergence check and must be opted
/// into explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvergencePolicy {
    /// Always run all `max_epochs` epochs.
    FixedEpochs,
    /// Stop once the largest per-sample cost change within an epoch falls
    /// below `delta`.
    DeltaEarlyStop { delta: f32 },
}

impl ConvergencePolicy {
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.early_stop {
            ConvergencePolicy::DeltaEarlyStop { delta: cfg.delta }
        } else {
            ConvergencePolicy::FixedEpochs
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    /// Number of epochs actually run.
    pub epochs_run: usize,
    /// Cost of the last sample of the last epoch.
    pub final_cost: f32,
    /// Whether the early-stop policy triggered.
    pub converged: bool,
}

/// Train `net` on the full sample set, one gradient step per sample, in
/// file order, with no shuffling between epochs.
///
/// Emits a [`MetricRecord`] per sample and per epoch to `logger` and the
/// callback chain; any callback returning [`CallbackSignal::Stop`] ends
/// training. A non-finite cost aborts with [`ApproxError::Diverged`].
pub fn train(
    net: &mut Network,
    samples: &[Sample],
    cfg: &Config,
    callbacks: &mut [Box<dyn Callback>],
    mut logger: Option<&mut Logger>,
) -> Result<TrainReport, ApproxError> {
    if samples.is_empty() {
        return Err(ApproxError::EmptySamples);
    }
    let policy = ConvergencePolicy::from_config(cfg);

    for cb in callbacks.iter_mut() {
        cb.on_train_begin();
    }

    let mut prev_costs: Vec<f32> = Vec::new();
    let mut step = 0usize;
    let mut last_cost = 0.0f32;
    let mut epochs_run = 0usize;
    let mut converged = false;

    'epochs: for epoch in 0..cfg.max_epochs {
        let mut max_change = 0.0f32;
        for (num, sample) in samples.iter().enumerate() {
            let (_pred, cost) = net.train_step(sample.x, sample.y);
            if !cost.is_finite() {
                return Err(ApproxError::Diverged { epoch, cost });
            }
            if let Some(&prev) = prev_costs.get(num) {
                max_change = max_change.max((cost - prev).abs());
            } else {
                prev_costs.push(0.0);
                max_change = f32::INFINITY;
            }
            prev_costs[num] = cost;
            last_cost = cost;

            let record = MetricRecord {
                epoch,
                step,
                cost,
                kind: "sample",
            };
            if let Some(l) = logger.as_mut() {
                l.log(&record);
            }
            for cb in callbacks.iter_mut() {
                if let CallbackSignal::Stop = cb.on_sample_end(&record) {
                    epochs_run = epoch + 1;
                    break 'epochs;
                }
            }
            step += 1;
        }
        epochs_run = epoch + 1;

        let record = MetricRecord {
            epoch,
            step,
            cost: last_cost,
            kind: "epoch",
        };
        if let Some(l) = logger.as_mut() {
            l.log(&record);
        }
        log::debug!("epoch {epoch} cost {last_cost:.6} max change {max_change:.6}");
        for cb in callbacks.iter_mut() {
            if let CallbackSignal::Stop = cb.on_epoch_end(&record) {
                break 'epochs;
            }
        }

        if let ConvergencePolicy::DeltaEarlyStop { delta } = policy {
            if max_change < delta {
                converged = true;
                break;
            }
        }
    }

    for cb in callbacks.iter_mut() {
        cb.on_train_end();
    }

    log::info!("trained {epochs_run} epochs, final cost {last_cost:.6}");
    Ok(TrainReport {
        epochs_run,
        final_cost: last_cost,
        converged,
    })
}
