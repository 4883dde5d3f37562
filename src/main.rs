//! `verifyview` - Noisy four-digit verification image generator.
//!
//! SPDX-License-Identifier: AGPL-3.0-only
//!
//! Loads configuration, sets up logging, lays out a verification view,
//! optionally resets it a few times and writes the final image to disk.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use verifyview::{Config, HostView};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking);

    if config.log_format.eq_ignore_ascii_case("pretty") {
        subscriber.init();
    } else {
        subscriber.json().init();
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Failed to render verification image");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> verifyview::Result<()> {
    let mut host = HostView::from_config(config)?;
    info!(
        width = ?config.width,
        height = ?config.height,
        seed = ?config.seed,
        code = %host.view().text(),
        "View initialized"
    );

    for _ in 0..config.reset_count {
        let code = host.on_reset_clicked();
        info!(code = %code, "Code reset");
    }

    let data = host.view().encode(config.output_format.image_format())?;
    std::fs::write(&config.output_path, &data)?;

    info!(
        path = %config.output_path.display(),
        bytes = data.len(),
        code = %host.view().text(),
        "Verification image written"
    );
    Ok(())
}
