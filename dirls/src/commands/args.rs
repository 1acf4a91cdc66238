use crate::config::{Config, DefaultFormat, PermissionFormat};
use clap::{App, Arg, ArgAction, ArgMatches};
use std::path::PathBuf;

pub struct Args {
    pub directory: String,
    pub long_format: bool,
    pub human_readable: bool,
    pub sort_reverse: bool,
    pub output: Option<PathBuf>,
}

impl Args {
    fn build_cli() -> App<'static> {
        App::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            // -h belongs to --human-readable, so help is long-only
            .disable_help_flag(true)
            .arg(
                Arg::with_name("help")
                    .long("help")
                    .action(ArgAction::Help)
                    .help("Print help information"),
            )
            .arg(
                Arg::with_name("directory")
                    .help("The directory to list")
                    .index(1)
                    .default_value("."),
            )
            .arg(
                Arg::with_name("long")
                    .short('l')
                    .long("long")
                    .help("Use long listing format (permissions, modified time, size)"),
            )
            .arg(
                Arg::with_name("human-readable")
                    .short('h')
                    .long("human-readable")
                    .help("Show permissions as rwx letters instead of 1/0 digits (with -l)"),
            )
            .arg(
                Arg::with_name("reverse")
                    .short('r')
                    .long("reverse")
                    .help("Sort names in descending order"),
            )
            .arg(
                Arg::with_name("output")
                    .short('o')
                    .long("output")
                    .takes_value(true)
                    .value_name("PATH")
                    .help("Write the listing to PATH instead of standard output"),
            )
    }

    /// Parses the process arguments. Malformed input, `--help` and
    /// `--version` make clap print and exit before any config is read.
    pub fn get_matches() -> ArgMatches {
        Self::build_cli().get_matches()
    }

    #[cfg(test)]
    pub fn try_parse_from<I, T>(itr: I, config: &Config) -> crate::error::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::build_cli()
            .try_get_matches_from(itr)
            .map_err(|err| crate::error::DirlsError::Parse(err.to_string()))?;
        Ok(Self::from_matches(&matches, config))
    }

    pub fn from_matches(matches: &ArgMatches, config: &Config) -> Self {
        Args {
            directory: matches.value_of("directory").unwrap_or(".").to_string(),
            long_format: matches.is_present("long")
                || config.default_format == DefaultFormat::Long,
            human_readable: matches.is_present("human-readable")
                || config.permission_format == PermissionFormat::Symbolic,
            sort_reverse: matches.is_present("reverse") || config.sort_reverse,
            output: matches.value_of("output").map(PathBuf::from),
        }
    }
}
