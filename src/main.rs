use clap::Parser;
use ipv4_subnet_explorer::config::{Cli, Config};
use ipv4_subnet_explorer::models::reference;
use ipv4_subnet_explorer::output::{print_host_page, print_subnet_page, print_summary};
use ipv4_subnet_explorer::{Ipv4, Report};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::load(Cli::parse())?;
    init_logging(&config.log_config)?;
    log::info!("#Start main()");

    reference::initialize();
    if !config.color {
        colored::control::set_override(false);
    }

    let ip = Ipv4::parse(&config.address, config.mask.as_deref()).map_err(|e| {
        log::warn!("Rejected input '{}': {e}", config.address);
        e
    })?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&Report::new(&ip))?);
        return Ok(());
    }

    print_summary(&ip, config.color);
    if let Some(target) = config.subnet_prefix {
        println!();
        print_subnet_page(&ip, target, config.page, config.page_size)?;
    }
    if config.hosts {
        println!();
        print_host_page(&ip, config.page, config.page_size)?;
    }

    Ok(())
}

/// Load log4rs from `path`, or fall back to warnings on stderr.
fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    match log4rs::init_file(path, Default::default()) {
        Ok(()) => Ok(()),
        Err(e) => {
            let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
            let fallback = log4rs::config::Config::builder()
                .appender(Appender::builder().build("stderr", Box::new(stderr)))
                .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
            log4rs::init_config(fallback)?;
            log::warn!("Could not load {}: {e}", path.display());
            Ok(())
        }
    }
}
