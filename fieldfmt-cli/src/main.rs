use anyhow::Result;
use clap::Parser;

use fieldfmt::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    cli::run(args)
}
