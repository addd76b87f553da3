use clap::Parser;
use ipmerge::config::Config;
use ipmerge::logging::init_logging;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config, config.verbose)?;
    //
    log::info!("#Start main()");

    let summary = ipmerge::run(&config)?;
    log::info!(
        "#End main() {} -> {} block(s)",
        summary.original,
        summary.merged
    );

    Ok(())
}
