//! Workshop Scanner CLI
//!
//! Prints the wallpapers found under a Steam directory as a JSON array.

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use workshop_scanner::ScanConfig;

/// Scan the Wallpaper Engine workshop directory and output wallpaper data as JSON
#[derive(Parser)]
#[command(name = "scan_wallpapers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Steam installation directory (the one containing `steamapps`)
    steam_directory: PathBuf,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the JSON array
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    let config = ScanConfig::new(cli.steam_directory);
    let report = match workshop_scanner::scan_workshop(&config) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Failed to scan {}: {}", config.workshop_dir().display(), e);
            return ExitCode::from(1);
        }
    };

    match serde_json::to_string(&report.records) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize wallpapers: {}", e);
            ExitCode::from(1)
        }
    }
}
