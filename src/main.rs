use std::path::Path;
use std::process::ExitCode;
use subnet_domain_map::config::{Config, LOG4RS_YML};
use subnet_domain_map::dns::SystemResolver;
use subnet_domain_map::error::EXIT_OK;
use subnet_domain_map::logging::init_logging;
use subnet_domain_map::output::{print_error, print_success};

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = init_logging(Path::new(LOG4RS_YML)) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    let config = Config::default();
    match subnet_domain_map::run(&config, &SystemResolver) {
        Ok(_) => {
            print_success(config.output_path.display());
            ExitCode::from(EXIT_OK as u8)
        }
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
