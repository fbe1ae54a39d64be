// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log filter used when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "iced_gallery=info,warn";

const HELP: &str = "\
Usage: iced_gallery [OPTIONS] [DIRECTORY]

Shows the media files of DIRECTORY (or the sources configured in
settings.toml) as a gallery with a lightbox viewer.

Options:
  --lang <LOCALE>       UI language, e.g. en-US or fr
  --config-dir <PATH>   Directory holding settings.toml
  --open <INDEX>        Open the gallery item at INDEX on startup
  -h, --help            Print this help

Logging is controlled with RUST_LOG (default: iced_gallery=info,warn).
";

fn parse_flags(raw: Vec<OsString>) -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_vec(raw);
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let open_index = args.opt_value_from_str("--open")?;
    let directory = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    Ok(Some(Flags {
        lang,
        config_dir,
        directory,
        open_index,
    }))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags(std::env::args_os().skip(1).collect()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("iced_gallery: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
