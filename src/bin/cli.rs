// src/bin/cli.rs
use clap::Parser;
use smm_ranking::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    smm_ranking::log::init(args.log_level());

    cli::run(args)?;
    Ok(())
}
