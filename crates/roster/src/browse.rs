//! Interactive browsing session.
//!
//! Each line of input is one [`BrowseCommand`]. Commands that change the
//! query produce a new [`QueryState`] snapshot and re-render the results.

use std::io::{BufRead, Write};
use std::str::FromStr;

use roster_seeker::{QueryEngine, QueryEvent, QueryState, Record, RegionLookup};

use crate::error::{Result, RosterError};
use crate::events;
use crate::render::{RegionsView, Renderer, ResultsView};

const HELP: &str = "\
Commands:
  search [TERM]     set the search text (no term clears it)
  sort KEY          alphabeticalByLastName | maxYearsExperience
  toggle CATEGORY   lower | middle | upper
  region CODE       toggle a region
  show              show the current results
  regions           list regions and their selection
  help              show this help
  quit              leave
";

/// One line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// A change to the query.
    Update(QueryEvent),
    Show,
    Regions,
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = RosterError;

    /// Only the separator after the command word is dropped from the search
    /// text; other arguments are trimmed.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = raw.trim();

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(BrowseCommand::Update(QueryEvent::TextTermChanged(
                raw.to_string(),
            ))),
            "sort" => events::sort_by(rest).map(BrowseCommand::Update),
            "toggle" | "t" => events::toggle_category(rest).map(BrowseCommand::Update),
            "region" | "r" => events::toggle_region(rest).map(BrowseCommand::Update),
            "show" | "" => Ok(BrowseCommand::Show),
            "regions" => Ok(BrowseCommand::Regions),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
            other => Err(RosterError::Command(format!(
                "unknown command '{other}' (try 'help')"
            ))),
        }
    }
}

/// A browsing session over one record set.
pub struct Session<'a, L> {
    engine: &'a QueryEngine<L>,
    records: &'a [Record],
    renderer: &'a Renderer,
    state: QueryState,
    prompt: bool,
}

impl<'a, L: RegionLookup> Session<'a, L> {
    pub fn new(
        engine: &'a QueryEngine<L>,
        records: &'a [Record],
        renderer: &'a Renderer,
        state: QueryState,
    ) -> Self {
        Session {
            engine,
            records,
            renderer,
            state,
            prompt: renderer.mode().is_styled(),
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Runs one command and returns its output, or `None` for quit.
    ///
    /// The state is only replaced when the event applies cleanly.
    pub fn execute(&mut self, command: BrowseCommand) -> Result<Option<String>> {
        match command {
            BrowseCommand::Update(event) => {
                self.state = self.state.apply(&event)?;
                self.results().map(Some)
            }
            BrowseCommand::Show => self.results().map(Some),
            BrowseCommand::Regions => self.regions().map(Some),
            BrowseCommand::Help => Ok(Some(HELP.to_string())),
            BrowseCommand::Quit => Ok(None),
        }
    }

    fn results(&self) -> Result<String> {
        let evaluation = self.engine.evaluate(self.records, &self.state);
        let view = ResultsView::new(
            self.records.len(),
            &evaluation,
            &self.state,
            self.engine.lookup(),
        );
        self.renderer.render_results(&view)
    }

    fn regions(&self) -> Result<String> {
        let view = RegionsView::new(&self.state, &self.engine.region_counts(self.records));
        self.renderer.render_regions(&view)
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Bad commands are reported on `out` and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        out.write_all(self.results()?.as_bytes())?;

        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
            }
            out.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let outcome = line?.parse::<BrowseCommand>().and_then(|c| self.execute(c));
            match outcome {
                Ok(Some(output)) => out.write_all(output.as_bytes())?,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "rejected browse command");
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        tracing::debug!("browse session ended");
        Ok(())
    }
}
