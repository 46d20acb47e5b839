//! Structured logging to a rotating file.
//!
//! Plugin stdout belongs to the rendered pane, so diagnostics go to a plain
//! text log in the plugin data directory instead:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → /data/userdeck.log
//! ```
//!
//! # Features
//!
//! - **Level filter**: `trace_level` config option, default `"info"`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
