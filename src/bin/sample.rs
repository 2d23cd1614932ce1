use std::io::{self, Write};

use funapprox::rng;
use funapprox::sample;

#[path = "common.rs"]
mod common;

fn main() {
    let args = common::init_logging();
    let opts = match common::parse_cli(args.into_iter().skip(1)) {
        Ok(o) => o,
        Err(msg) => common::fail(&msg),
    };
    if opts.positional.len() != 4 {
        common::fail("invalid number of parameters.");
    }

    let target = match sample::builtin(&opts.positional[0]) {
        Ok(t) => t,
        Err(e) => common::fail(&e.to_string()),
    };
    let domain_min = common::parse_float(&opts.positional[1], "min domain");
    let domain_max = common::parse_float(&opts.positional[2], "max domain");
    let count = common::parse_count(&opts.positional[3], "number of samples");

    let mut rng = match opts.seed {
        Some(seed) => rng::rng_from_seed(seed),
        None => rng::rng_from_env(),
    };
    let samples = match sample::draw(target.as_ref(), domain_min, domain_max, count, &mut rng) {
        Ok(s) => s,
        Err(e) => common::fail(&e.to_string()),
    };

    let mut out = io::stdout().lock();
    for s in &samples {
        if let Err(e) = writeln!(out, "{} {}", s.x, s.y) {
            common::fail(&format!("failed to write samples: {e}"));
        }
    }
}
