//! nuructl - learn languages through culture, conversation and play

use anyhow::Result;
use clap::Parser;
use nuru_common::config::NuruConfig;
use nuructl::cli::Cli;
use nuructl::context::Context;
use nuructl::errors::{exit_code_for, EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use nuructl::notify::Notifier;
use nuructl::{dispatch, logging};
use std::io::{self, Write};

fn run(cli: Cli) -> Result<()> {
    let mut config = NuruConfig::load()?;
    if let Some(mode) = &cli.color {
        config.set_color_mode(mode)?;
    }
    let path = NuruConfig::config_path()?;
    let mut ctx = Context::from_config(config, path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = dispatch(&mut ctx, cli.command, &mut out);
    out.flush()?;
    result
}

// Plain main: the blocking HTTP client must not run inside a runtime, and
// minigames start their own for the countdown.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            let notifier = Notifier::new(console::colors_enabled_stderr());
            let mut err = io::stderr();
            if notifier.error(&mut err, &format!("{:#}", e)).is_err() {
                std::process::exit(EXIT_GENERAL_ERROR);
            }
            exit_code_for(&e)
        }
    };
    std::process::exit(code);
}
