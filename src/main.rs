use anyhow::Result;
use clap::Parser;
use productivity_suite::cli::Cli;
use productivity_suite::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    cli.run()
}
