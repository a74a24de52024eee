//! Spotify Playlist Filler CLI Library
//!
//! This library turns a plain-text list of `Artist - Album` entries into a
//! populated Spotify playlist. It authorizes against the Spotify Web API with
//! an OAuth 2.0 PKCE flow, resolves each entry to a catalog album through
//! fuzzy search, and appends the album's tracks to a freshly created playlist
//! in original order.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Command-line command implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Override table and miss report handling
//! - `resolver` - Fuzzy album resolution against the search API
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client functions
//! - `types` - Data structures and type definitions
//! - `utils` - Text normalization, entry parsing, and PKCE helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod resolver;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it can
/// flow through async contexts unchanged.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable errors: the process terminates with exit code 1
/// immediately after the message is printed.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// For recoverable issues the user should notice; execution continues.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
