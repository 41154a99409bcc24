//! Command-line argument parsing and help for filebox.
//!
//! When invoked with no args (fbx), filebox lists the current directory.

use crate::core::{SortKey, SortOrder};

/// What the binary should do, decided from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List {
        path: Option<String>,
        order: Option<SortOrder>,
    },
    SrtToVtt(String),
    CompareVersions(String, String),
    Init { minimal: bool },
    Help,
    ConfigHelp,
    Version,
    Invalid(String),
}

/// Parses the process arguments.
pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Parses the arguments following the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> CliAction {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    match args.as_slice() {
        [] => CliAction::List {
            path: None,
            order: None,
        },
        ["--version" | "-v"] => CliAction::Version,
        ["-h" | "--help"] => CliAction::Help,
        ["--config-help"] => CliAction::ConfigHelp,
        ["--init"] => CliAction::Init { minimal: true },
        ["--init-full"] => CliAction::Init { minimal: false },
        ["--srt2vtt", file] => CliAction::SrtToVtt(file.to_string()),
        ["--vercmp", a, b] => CliAction::CompareVersions(a.to_string(), b.to_string()),
        ["--sort", spec, rest @ ..] if rest.len() <= 1 => match parse_sort(spec) {
            Some(order) => list_action(rest.first().copied(), Some(order)),
            None => CliAction::Invalid(format!("Invalid sort order: {}", spec)),
        },
        [arg] => list_action(Some(*arg), None),
        [arg, ..] if arg.starts_with('-') => {
            CliAction::Invalid(format!("Wrong arguments for option: {}", arg))
        }
        _ => CliAction::Invalid("filebox accepts only one path at a time.".to_string()),
    }
}

fn list_action(path: Option<&str>, order: Option<SortOrder>) -> CliAction {
    match path {
        Some(arg) if arg.starts_with('-') => {
            CliAction::Invalid(format!("Unknown argument: {}", arg))
        }
        Some(arg) if arg.trim().is_empty() => CliAction::Invalid("Empty path".to_string()),
        path => CliAction::List {
            path: path.map(str::to_string),
            order,
        },
    }
}

/// Parses "KEY" or "KEY:asc" / "KEY:desc".
pub fn parse_sort(spec: &str) -> Option<SortOrder> {
    let (key, direction) = match spec.split_once(':') {
        Some((key, direction)) => (key, direction),
        None => (spec, "asc"),
    };
    let asc = match direction.to_ascii_lowercase().as_str() {
        "asc" => true,
        "desc" => false,
        _ => return None,
    };
    Some(SortOrder::new(SortKey::from(key), asc))
}

pub fn print_version() {
    println!("filebox {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"filebox - file listing, classification and subtitle tools

USAGE:
  fbx [PATH]
  fbx [OPTION]

PATH:
  Directory to list (defaults to current directory)

OPTIONS:
      --sort KEY[:DIR] [PATH] List sorted by name, size or type (DIR is asc or desc)
      --srt2vtt FILE          Convert a SubRip subtitle file to WebVTT on stdout
      --vercmp A B            Compare two versions, prints -1, 0 or 1
      --init                  Generate a minimal default configuration
      --init-full             Generate the full configuration with all options
      --config-help           Display all the configuration options
  -h, --help                  Print help information
  -v, --version               Display the current installed version of filebox

ENVIRONMENT:
  FILEBOX_CONFIG              Override the default config path
  FILEBOX_LOG                 Log filter, e.g. "debug" (default: warn)
"#
    );
}

pub fn print_config_help() {
    println!(
        r##"
filebox - Configuration Guide (filebox.toml)

=========================
 General Settings
=========================
[general]
  dirs_first                 List directories before files [default: true]
  show_hidden                Show hidden files (dotfiles) [default: false]

=========================
 Sort Order
=========================
[sort]
  key                        "name", "size" or "type" [default: "name"]
                             Any other key keeps the directory order
  asc                        Ascending order [default: true]

=========================
 Display Settings
=========================
[display]
  width                      Listing width in columns (31..=400) [default: 80]
  timestamps                 Show the modification time column [default: true]
"##
    );
}
