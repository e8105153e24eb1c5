use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use updatekit::checker::{UpdateChecker, UpdateDecision};
use updatekit::env::{default_app_dir, default_cache_dir};
use updatekit::providers::{AlwaysOnline, FixedVersion};
use updatekit::storage::FilePrefStore;

#[derive(Parser, Debug)]
#[command(
    name = "updatekit",
    author,
    version,
    about = "Evaluates update-check responses against the local package cache"
)]
struct Cli {
    /// JSON update-check response to evaluate.
    #[arg(long, conflicts_with = "ignore")]
    response: Option<PathBuf>,

    /// Version name of the currently installed application.
    #[arg(long, default_value = "")]
    installed_version: String,

    /// Override the package cache root advertised in the response.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Record a version as dismissed and exit.
    #[arg(long)]
    ignore: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let checker = UpdateChecker::new(
        AlwaysOnline,
        FixedVersion(cli.installed_version.clone()),
        FilePrefStore::new(default_app_dir()),
    );

    if let Some(version) = cli.ignore {
        return match checker.ignore(&version) {
            Ok(()) => {
                println!("version {version} will no longer be offered");
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("failed to record dismissed version: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let Some(response_path) = cli.response else {
        error!("nothing to do: pass --response <file> or --ignore <version>");
        return ExitCode::FAILURE;
    };

    let raw = match fs::read_to_string(&response_path) {
        Ok(raw) => raw,
        Err(err) => {
            error!("unable to read {}: {err}", response_path.display());
            return ExitCode::FAILURE;
        }
    };

    let Some(mut descriptor) = updatekit::parse_update_response(&raw) else {
        println!("could not determine: response was not understood");
        return ExitCode::FAILURE;
    };
    if let Some(cache_dir) = cli.cache_dir {
        descriptor.cache_root_dir = cache_dir.display().to_string();
    } else if descriptor.cache_root_dir.is_empty() {
        descriptor.cache_root_dir = default_cache_dir().display().to_string();
    }

    match checker.evaluate(&descriptor) {
        UpdateDecision::Offline => println!("no usable network; check skipped"),
        UpdateDecision::Ignored { version } => {
            println!("version {version} was dismissed earlier");
        }
        UpdateDecision::UpToDate => println!("already up to date"),
        UpdateDecision::ReadyToInstall { artifact, .. } => {
            println!("update cached and verified: {}", artifact.display());
        }
        UpdateDecision::DownloadRequired { descriptor } => {
            println!(
                "update {} must be downloaded from {}",
                descriptor.version_name, descriptor.download_url
            );
        }
    }
    ExitCode::SUCCESS
}
