use std::io;

use anyhow::Result;
use clap::Parser;

use roster::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    roster::logging::init(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    roster::run(cli, stdin.lock(), &mut stdout.lock())
}
