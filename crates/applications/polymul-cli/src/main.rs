//! `polymul` binary

use anyhow::Result;
use clap::Parser;
use polymul_cli::{run, Cli};
use polymul_core::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    init_tracing(&settings.logging)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &settings, &mut out)
}
