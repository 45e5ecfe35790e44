mod cli;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::logger::init(cli.verbose);

    if let Err(err) = cli::run(cli) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
