mod commands;
mod config;
mod entry;
mod error;
mod formatter;
mod lister;
mod output;
mod sorter;

use commands::args::Args;
use commands::file_utils::list_directory;
use config::Config;
use error::{DirlsError, Result};

const LOG_ENV_VAR: &str = "DIRLS_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV_VAR, "warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = Args::get_matches();
    let (config, config_error) = load_config()?;
    let args = Args::from_matches(&matches, &config);
    list_directory(&args, &config, config_error)
}

fn print_error(error: &DirlsError) {
    use colored::Colorize;

    let error_type = match error {
        DirlsError::Io(_) => "IO Error",
        DirlsError::Parse(_) => "Parse Error",
        DirlsError::Config(_) => "Config Error",
        DirlsError::DirectoryAccess { .. } => "Directory Error",
        DirlsError::Output { .. } => "Output Error",
    };

    eprintln!();
    eprintln!("{} {}", "✗".bright_red(), error_type.bright_red().bold());
    eprintln!();

    // Print the error message with proper indentation for multiline messages
    let message = error.to_string();
    for line in message.lines() {
        eprintln!("  {}", line);
    }
    eprintln!();
}

fn load_config() -> Result<(Config, Option<DirlsError>)> {
    let (layers, config_error) = config::load_config_layers(None)?;
    if let Some(profile) = &layers.profile_path {
        log::debug!("using profile {}", profile.display());
    }
    Ok((layers.effective, config_error))
}
