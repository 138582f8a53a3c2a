//! Run the standard script.
//!
//! Usage: `purity [config.json]`. Exits non-zero on the first failed check.
//! Set `RUST_LOG=debug` to see the fixed-point probe outcomes.

use std::path::Path;
use std::process::ExitCode;

use purity::{Script, ScriptConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => match ScriptConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!("{err}");
                return ExitCode::from(2);
            }
        },
        None => ScriptConfig::default(),
    };

    match Script::standard().run(&config) {
        Ok(report) => {
            match report.to_json() {
                Ok(json) => println!("{json}"),
                Err(err) => tracing::warn!("{err}"),
            }
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
