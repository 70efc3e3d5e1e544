//! Entry point for the `trans-key-sync` command.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use trans_key_sync::config::{
    ConfigManager,
    SyncSettings,
};
use trans_key_sync::dictionary::WriteMode;
use trans_key_sync::{
    SyncError,
    SyncReport,
};
use tracing_subscriber::EnvFilter;

/// Collects `trans` keys from a source tree and adds the missing ones to every
/// dictionary under `langs/`.
#[derive(Debug, Parser)]
#[command(name = "trans-key-sync", version, about)]
struct Cli {
    /// Root of the source tree
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report the keys that would be added without writing any dictionary
    #[arg(long)]
    dry_run: bool,

    /// Skip source files that are not valid UTF-8 instead of failing
    #[arg(long)]
    skip_undecodable: bool,
}

fn main() -> ExitCode {
    // 成功時は何も出力しない
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match sync(&cli) {
        Ok(report) => {
            if report.mode == WriteMode::DryRun {
                print_dry_run(&report);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn sync(cli: &Cli) -> Result<SyncReport, SyncError> {
    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(&cli.root)?;

    if cli.skip_undecodable {
        let settings =
            SyncSettings { skip_undecodable: true, ..config_manager.get_settings().clone() };
        config_manager.update_settings(settings)?;
    }

    let mode = if cli.dry_run { WriteMode::DryRun } else { WriteMode::Write };
    trans_key_sync::run(&cli.root, config_manager.get_settings(), mode)
}

#[allow(clippy::print_stdout)]
fn print_dry_run(report: &SyncReport) {
    println!(
        "{} keys found in {} files",
        report.scan.keys.len(),
        report.scan.scanned_files
    );
    for path in &report.scan.skipped_files {
        println!("skipped {}", path.display());
    }
    for dictionary in &report.dictionaries {
        println!("{} (+{})", dictionary.path.display(), dictionary.added.len());
        for key in &dictionary.added {
            println!("  {key}");
        }
    }
}
