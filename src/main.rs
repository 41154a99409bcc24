//! main.rs
//! Entry point for filebox

use filebox::config::Config;
use filebox::core::{SortOrder, browse_dir, compare_version, srt_to_vtt};
use filebox::ui::render_listing;
use filebox::utils::cli::{self, CliAction, handle_args};

use tracing_subscriber::EnvFilter;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Log filter used when FILEBOX_LOG is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging() {
    let filter = EnvFilter::try_from_env("FILEBOX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list(path: Option<String>, order: Option<SortOrder>) -> std::io::Result<()> {
    let config = Config::load();
    let dir = path.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let mut entries = browse_dir(&dir)?;
    config.formatter(order).filter_entries(&mut entries);

    for line in render_listing(&entries, config.display()) {
        println!("{}", line.trim_end());
    }
    Ok(())
}

fn convert_subtitle(file: &Path) -> std::io::Result<()> {
    let input = std::fs::read_to_string(file)?;
    print!("{}", srt_to_vtt(&input));
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let result = match handle_args() {
        CliAction::List { path, order } => list(path, order),
        CliAction::SrtToVtt(file) => convert_subtitle(Path::new(&file)),
        CliAction::CompareVersions(a, b) => match compare_version(&a, &b) {
            Ok(ordering) => {
                println!("{}", ordering as i8);
                Ok(())
            }
            Err(e) => {
                eprintln!("[filebox] Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        CliAction::Init { minimal } => {
            let path = Config::default_path();
            Config::generate_default(&path, minimal).map(|()| {
                println!(
                    "{} default config generated at {:?}",
                    if minimal { "Minimal" } else { "Full" },
                    path
                );
            })
        }
        CliAction::Help => {
            cli::print_help();
            Ok(())
        }
        CliAction::ConfigHelp => {
            cli::print_config_help();
            Ok(())
        }
        CliAction::Version => {
            cli::print_version();
            Ok(())
        }
        CliAction::Invalid(msg) => {
            eprintln!("[filebox] Error: {}", msg);
            eprintln!("Try --help for available options");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[filebox] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
