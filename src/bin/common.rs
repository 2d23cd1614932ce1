use std::env;
use std::process;

/// Options shared by the command-line binaries.
///
/// Flags may appear anywhere; everything else is collected as positional
/// arguments in order.
#[derive(Debug)]
pub struct CliOpts {
    /// Path to a TOML or JSON config file (`--config`).
    pub config: Option<String>,
    /// Opt into the delta-based early-stop policy (`--early-stop`).
    pub early_stop: bool,
    /// Directory for the metrics logger (`--log-dir`).
    pub log_dir: Option<String>,
    /// Experiment name under the log directory (`--experiment`).
    pub experiment: Option<String>,
    /// Explicit RNG seed (`--seed`); otherwise the `SEED` env var applies.
    pub seed: Option<u64>,
    /// Remaining positional arguments in order.
    pub positional: Vec<String>,
}

/// Parse common CLI arguments. A flag with a missing or malformed value is
/// an error, not a silent default.
pub fn parse_cli<I>(mut args: I) -> Result<CliOpts, String>
where
    I: Iterator<Item = String>,
{
    let mut opts = CliOpts {
        config: None,
        early_stop: false,
        log_dir: None,
        experiment: None,
        seed: None,
        positional: Vec::new(),
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => opts.config = args.next(),
            "--early-stop" => opts.early_stop = true,
            "--log-dir" => opts.log_dir = args.next(),
            "--experiment" => opts.experiment = args.next(),
            "--seed" => {
                let seed = args
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| {
                        "improper type for command line argument '--seed'.".to_string()
                    })?;
                opts.seed = Some(seed);
            }
            _ => opts.positional.push(arg),
        }
    }
    Ok(opts)
}

/// Initialize the log facade and return the process arguments.
pub fn init_logging() -> Vec<String> {
    env_logger::init();
    env::args().collect()
}

/// Print `error: <msg>` and exit non-zero. Downstream plotting scripts key
/// off this exact prefix.
pub fn fail(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Parse a positional argument as `f32`, failing with the argument's name.
pub fn parse_float(value: &str, name: &str) -> f32 {
    match value.parse() {
        Ok(v) => v,
        Err(_) => fail(&format!(
            "improper type for command line argument '{name}'."
        )),
    }
}

/// Parse a positional argument as `usize`, failing with the argument's name.
pub fn parse_count(value: &str, name: &str) -> usize {
    match value.parse() {
        Ok(v) => v,
        Err(_) => fail(&format!(
            "improper type for command line argument '{name}'."
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn flags_and_positionals_separate() {
        let opts = parse_cli(args(&[
            "samples.txt",
            "--early-stop",
            "0",
            "--seed",
            "42",
            "1",
        ]))
        .unwrap();
        assert!(opts.early_stop);
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.positional, vec!["samples.txt", "0", "1"]);
    }

    #[test]
    fn seed_without_a_value_is_an_error() {
        assert!(parse_cli(args(&["--seed"])).is_err());
    }

    #[test]
    fn seed_with_a_malformed_value_is_an_error() {
        let err = parse_cli(args(&["--seed", "lots"])).unwrap_err();
        assert_eq!(err, "improper type for command line argument '--seed'.");
    }
}
