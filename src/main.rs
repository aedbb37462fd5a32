//! Siemens star CLI
//!
//! Usage:
//!   sstar [N]
//!
//! Writes a Siemens star with N spokes (default 20, minimum 2) to
//! `sstar.ps` in the current directory.
//!
//! Set `RUST_LOG=sstar=debug` to see the derived geometry on stderr.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sstar::{write_star, PostScriptConfig, SpokeCount, StarError};

#[derive(Parser)]
#[command(name = "sstar")]
#[command(about = "Draw a Siemens Star target with n spokes")]
struct Cli {
    /// Desired number of star spokes, minimum: 2
    #[arg(default_value_t = SpokeCount::DEFAULT.get() as i64, allow_negative_numbers = true)]
    n: i64,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sstar=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli, &PostScriptConfig::default()) {
        Ok(message) => {
            println!("{}", message);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Write the star and return the confirmation line
fn run(cli: &Cli, config: &PostScriptConfig) -> Result<String, StarError> {
    let path = write_star(cli.n, config)?;
    Ok(format!("Wrote {}", path.display()))
}
