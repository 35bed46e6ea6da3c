//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use roster_seeker::QueryEvent;

use crate::error::Result;
use crate::events;
use crate::output::OutputMode;

/// Search, filter and sort a personnel directory.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about)]
pub struct Cli {
    /// YAML config file.
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Records file (JSON). Overrides the config.
    #[arg(long, global = true)]
    pub records: Option<PathBuf>,

    /// Postal code table (CSV). Overrides the config.
    #[arg(long, global = true)]
    pub postal_codes: Option<PathBuf>,

    /// Output mode. Overrides the config.
    #[arg(long, short = 'o', global = true, value_enum)]
    pub output: Option<OutputMode>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the records matching a query.
    List(ListArgs),
    /// Print the regions present in the dataset.
    Regions,
    /// Browse interactively, one command per line.
    Browse,
}

/// Query flags for `list`.
#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Search text (case-sensitive).
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort key: alphabeticalByLastName (name) or maxYearsExperience (experience).
    #[arg(long)]
    pub sort: Option<String>,

    /// Flip a category selector. May be repeated.
    #[arg(long = "toggle-category", value_name = "CATEGORY")]
    pub toggle_categories: Vec<String>,

    /// Flip a region selector. May be repeated.
    #[arg(long = "toggle-region", value_name = "CODE")]
    pub toggle_regions: Vec<String>,
}

impl ListArgs {
    /// The events these flags describe, in application order.
    pub fn events(&self) -> Result<Vec<QueryEvent>> {
        let mut queued = Vec::new();
        if let Some(term) = &self.search {
            queued.push(QueryEvent::TextTermChanged(term.clone()));
        }
        if let Some(sort) = &self.sort {
            queued.push(events::sort_by(sort)?);
        }
        for name in &self.toggle_categories {
            queued.push(events::toggle_category(name)?);
        }
        for code in &self.toggle_regions {
            queued.push(events::toggle_region(code)?);
        }
        Ok(queued)
    }
}
