//! ori-cli library
//!
//! Wiring of the account backends behind the `ori` binary, exported for the
//! integration tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod session_file;


pub use app::App;
pub use cli::Cli;
pub use commands::{Commands, SignUpArgs};
pub use error::{CliError, Result as CliResult};
pub use session_file::SessionFile;
