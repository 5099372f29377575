use clap::Parser;
use phototools::app::{handle_fatal_error, init_logging, AppConfig};
use phototools::cli::{execute_command, Cli};
use phototools::config::ConfigLoader;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let config = match ConfigLoader::new().load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), verbose),
    };

    init_logging(&AppConfig::new(verbose, &config));

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, verbose);
    }
}
