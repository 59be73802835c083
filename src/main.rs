use anyhow::Result;
use buildstamp::{cli::Cli, init_tracing, stamp};
use clap::Parser;

fn main() -> Result<()> {
    init_tracing();

    let _cli = Cli::parse();
    stamp::run()
}
