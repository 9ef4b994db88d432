//! Shared plumbing for the vecadd executables.
//!
//! Every binary starts the same way: initialize logging, then read its
//! arguments. The programs reproduce their reference output when run with
//! no arguments, and arguments that fail to parse are ignored rather than
//! rejected.

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use log::warn;

/// Initialize `env_logger` on stderr.
///
/// The default filter is `warn`, so stdout carries only program output.
/// Set `RUST_LOG=debug` to see feature detection and kernel selection.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parse `A` from the process arguments.
///
/// See [`parse_lenient_from`].
#[must_use]
pub fn parse_lenient<A: Parser>() -> A {
    parse_lenient_from(std::env::args_os())
}

/// Parse `A` from `args`, falling back to the defaults on bad input.
///
/// `--help` and `--version` print and exit as usual when `A` declares them;
/// a command built with `disable_help_flag`/`disable_version_flag` treats
/// them as unknown arguments instead. Any other parse error is logged at warn
/// level and `A` is parsed again from the program name alone, which yields
/// the declared defaults.
#[must_use]
pub fn parse_lenient_from<A, I, T>(args: I) -> A
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match A::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let reason = err.to_string();
                warn!(
                    "ignoring arguments: {}",
                    reason.lines().next().unwrap_or_default()
                );
                A::parse_from(args.into_iter().take(1))
            }
        },
    }
}
