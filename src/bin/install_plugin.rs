//! Installs the wallpaper-engine plasma plugin for the current user.

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use workshop_scanner::{install_plugin, InstallConfig, InstallError};

/// Copy the wallpaper-engine plugin into ~/.local/share/plasma/wallpapers
#[derive(Parser)]
#[command(name = "install_plugin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Plugin directory to install [default: ./wallpaper-engine]
    #[arg(long)]
    source: Option<PathBuf>,

    /// Install location [default: ~/.local/share/plasma/wallpapers/wallpaper-engine]
    #[arg(long)]
    dest: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(dest) => {
            println!("Installed plugin to: {}", dest.display());
            println!(
                "Now open Desktop Settings → Wallpaper → Wallpaper Type and select 'Wallpaper Engine'."
            );
            println!(
                "If it does not appear, try restarting plasmashell: 'kquitapp6 plasmashell && kstart6 plasmashell'"
            );
            ExitCode::SUCCESS
        }
        Err(e @ InstallError::SourceNotFound(_)) => {
            println!("{}", e);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<PathBuf, InstallError> {
    let dest = match cli.dest {
        Some(dest) => dest,
        None => {
            let home = dirs_next::home_dir().ok_or(InstallError::NoHomeDir)?;
            InstallConfig::default_dest(&home)
        }
    };
    let source = cli.source.unwrap_or_else(InstallConfig::default_source);

    let config = InstallConfig::new(source, dest);
    let report = install_plugin(&config)?;
    log::info!("Copied {} files", report.files);
    Ok(config.dest)
}
