//! Command execution.
//!
//! Merges the config file with command-line flags, loads the dataset and
//! runs the selected command against it.

use std::io::{BufRead, Write};

use anyhow::Context;
use roster_seeker::{PostalDirectory, QueryEngine, QueryState, Record};

use crate::browse::Session;
use crate::cli::{Cli, Commands, ListArgs};
use crate::config::RosterConfig;
use crate::dataset::Dataset;
use crate::render::{RegionsView, Renderer, ResultsView};

/// Runs `cli`, reading browse input from `input` and writing to `out`.
pub fn run<R: BufRead, W: Write>(cli: Cli, input: R, out: &mut W) -> anyhow::Result<()> {
    let config = RosterConfig::load(cli.config.as_deref()).context("loading config")?;

    let records_path = cli.records.or(config.records);
    let postal_codes_path = cli.postal_codes.or(config.postal_codes);
    let Dataset { records, directory } =
        Dataset::load(records_path.as_deref(), postal_codes_path.as_deref())
            .context("loading dataset")?;

    let renderer = Renderer::new(cli.output.unwrap_or(config.output))?;
    let engine = QueryEngine::new(directory);
    let initial = engine
        .initial_state(&records)
        .with_sort_key(config.sort);

    match cli.command {
        Commands::List(args) => list(&engine, &records, &renderer, initial, &args, out),
        Commands::Regions => {
            let view = RegionsView::new(&initial, &engine.region_counts(&records));
            out.write_all(renderer.render_regions(&view)?.as_bytes())?;
            Ok(())
        }
        Commands::Browse => {
            Session::new(&engine, &records, &renderer, initial).run(input, out)?;
            Ok(())
        }
    }
}

fn list<W: Write>(
    engine: &QueryEngine<PostalDirectory>,
    records: &[Record],
    renderer: &Renderer,
    initial: QueryState,
    args: &ListArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut state = initial;
    for event in args.events()? {
        state = state.apply(&event)?;
    }

    let evaluation = engine.evaluate(records, &state);
    let view = ResultsView::new(records.len(), &evaluation, &state, engine.lookup());
    out.write_all(renderer.render_results(&view)?.as_bytes())?;
    Ok(())
}
