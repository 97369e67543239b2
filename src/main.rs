//! ngtw CLI - Tailwind CSS helper for Angular projects
//!
//! Usage: ngtw <COMMAND>
//!
//! Commands:
//!   build      Build the output stylesheet once
//!   watch      Rebuild on change
//!   configure  Write ng-tailwind.toml
//!   scripts    Add ngtw entries to package.json
//!   purge      Purge unused selectors from the output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{Cli, ColorWhen};
use ui::context::UiContext;

const LOG_ENV: &str = "NGTW_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.color);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    if let Err(err) = commands::dispatch(cli.command, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, color: Option<ColorWhen>) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    // A second init (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(log_ansi(color, ui::terminal::stderr_supports_color()))
        .with_target(false)
        .try_init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn log_ansi(color: Option<ColorWhen>, stderr_color: bool) -> bool {
    match color {
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Auto) | None => stderr_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }

    #[test]
    fn log_styling_follows_color_flag_then_stderr() {
        assert!(!log_ansi(Some(ColorWhen::Never), true));
        assert!(log_ansi(Some(ColorWhen::Always), false));
        assert!(!log_ansi(None, false));
        assert!(log_ansi(Some(ColorWhen::Auto), true));
    }
}
