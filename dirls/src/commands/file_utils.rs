use crate::commands::args::Args;
use crate::config::Config;
use crate::error::{DirlsError, Result};
use crate::lister::{self, BasicLister, ListingOptions};
use crate::output::OutputTarget;
use colored::*;
use std::path::Path;

pub fn listing_options(args: &Args, config: &Config) -> ListingOptions {
    ListingOptions {
        long_format: args.long_format,
        human_readable_permissions: args.human_readable,
        reverse_order: args.sort_reverse,
        output_target: args.output.clone(),
        time_zone: config.time_zone,
        unreadable_directory: config.unreadable_directory,
    }
}

/// Lists `args.directory` and writes the result. The output target is only
/// opened once the listing succeeded, so a failed run leaves no file behind.
pub fn list_directory(args: &Args, config: &Config, config_error: Option<DirlsError>) -> Result<()> {
    if let Some(error) = config_error {
        log::warn!("{} using default config: {}", "⚠".yellow(), error);
    }

    let options = listing_options(args, config);
    log::debug!("listing {} with {:?}", args.directory, options);

    let lines = lister::list(Path::new(&args.directory), &options, &BasicLister)?;
    OutputTarget::from_option(options.output_target.as_ref()).write_lines(&lines)
}
