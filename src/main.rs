// src/main.rs

use std::env;
use std::process;

use env_logger::Env;
use log::error;

use shor::algorithms::factor;
use shor::config::ShorConfig;
use shor::core::random_source::RandomSource;

fn main() {
    let config = ShorConfig::load().unwrap_or_else(|_| ShorConfig::default());

    // Initialize the logger
    let env = Env::default()
        .filter_or("SHOR_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("SHOR_LOG_STYLE", "always");

    env_logger::Builder::from_env(env).init();

    let n = match env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                error!("invalid target '{}': expected an unsigned integer", arg);
                process::exit(1);
            }
        },
        None => 15,
    };

    let mut rng = match config.seed {
        Some(seed) => RandomSource::from_seed(seed),
        None => RandomSource::new(),
    };

    match factor(n, &mut rng, config.max_attempts) {
        Ok(pair) => println!("{} {}", pair.p, pair.q),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
