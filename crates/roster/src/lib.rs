//! Roster - a terminal front-end for [`roster_seeker`].
//!
//! Loads a record set and postal code table (bundled samples or files named
//! on the command line or in a YAML config), then either prints one query's
//! results (`list`), the region selectors (`regions`), or runs an
//! interactive session (`browse`) where each input line changes the query.
//!
//! Text output goes through MiniJinja templates; `--output json|yaml`
//! serializes the same views instead.

pub mod app;
pub mod browse;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod events;
pub mod logging;
pub mod output;
pub mod render;

pub use app::run;
pub use cli::{Cli, Commands, ListArgs};
pub use error::{Result, RosterError};
pub use output::OutputMode;
