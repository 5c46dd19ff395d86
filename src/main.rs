use clap::Parser;
use roster::core::codec::Encoding;
use roster::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roster", about = "Collect names into a roster, then show the submitted list")]
struct Args {
    /// Payload encoding for the results screen
    #[arg(short, long, value_enum)]
    encoding: Option<Encoding>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        config::RosterConfig::default()
    });
    let resolved = config::resolve(&file_config, args.encoding);

    log::info!("Roster starting up with encoding: {:?}", resolved.encoding);

    roster::tui::run(resolved)
}
