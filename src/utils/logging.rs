//! Logging utilities for the application
//!
//! Configures a `tracing_subscriber` registry for the resolver binary. The filter is taken
//! from `RUST_LOG` when set, otherwise from the default directive passed by the caller.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default filter directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Setup logging for the application with the default `info` directive
pub fn setup_logging() -> bool {
	setup_logging_with_default(DEFAULT_LOG_DIRECTIVE)
}

/// Setup logging, falling back to `default_directive` if `RUST_LOG` is absent or invalid.
///
/// Returns `false` when a global subscriber was already installed (e.g. by a test harness).
pub fn setup_logging_with_default(default_directive: &str) -> bool {
	let filter = env_filter(default_directive);

	// Logs go to stderr so that stdout only carries the resolution result
	let subscriber = tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(std::io::stderr)
			.event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(false)
					.compact(),
			)
			.fmt_fields(fmt::format::PrettyFields::new()),
	);

	subscriber.try_init().is_ok()
}

/// Builds the filter from `RUST_LOG`, or from `default_directive` when unset or invalid
fn env_filter(default_directive: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}
