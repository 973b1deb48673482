// SPDX-FileCopyrightText: 2026 sf6mon contributors
//
// SPDX-License-Identifier: BSD-2-Clause

use clap::Parser;
use tracing::{debug, error};

mod logging;
mod render;

use sf6_payload::decode_hex;

/// Example payload from the firmware docs, used when no argument is given.
const DEFAULT_PAYLOAD: &str = "09FA157C0B72157C002A";

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - ", env!("CARGO_PKG_DESCRIPTION"));

type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Parser)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION
)]
struct Cli {
    /// Hex-encoded 10-byte payload; whitespace and a leading 0x are accepted
    #[arg(value_name = "PAYLOAD", default_value = DEFAULT_PAYLOAD)]
    payload: String,
    /// Emit only the JSON document
    #[arg(long = "json")]
    json: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "log-level")]
    log_level: Option<String>,
}

fn run(cli: &Cli) -> DynResult<()> {
    debug!("decoding payload {:?}", cli.payload);

    let reading = decode_hex(&cli.payload)?;
    let json = serde_json::to_string_pretty(&reading)?;

    if cli.json {
        println!("{json}");
    } else {
        print!("{}", render::render_text(&reading));
        println!();
        println!("JSON format (for APIs):");
        println!("{json}");
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    if let Err(err) = run(&cli) {
        error!("{err}");
        std::process::exit(1);
    }
}
