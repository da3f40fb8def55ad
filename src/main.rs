#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use line_ratio::{args::Args, config::Config};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match try_main(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: Args) -> anyhow::Result<()> {
    let config = Config::from_args(args)?;
    log::debug!("resolved config: {config:?}");

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    line_ratio::run(&config, &mut console)?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
