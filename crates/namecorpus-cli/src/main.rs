use clap::Parser;
use namecorpus_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; the run itself does not depend on it.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("namecorpus: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("namecorpus error: {:#}", err);
        std::process::exit(1);
    }
}
