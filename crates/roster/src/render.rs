//! Rendering of evaluation results.
//!
//! Results are first converted to serializable views ([`ResultsView`],
//! [`RegionsView`]). Text modes feed the views through MiniJinja templates;
//! structured modes serialize them directly.

use std::collections::{BTreeMap, HashMap};

use console::Style;
use minijinja::{Environment, Value};
use roster_seeker::{collate, Category, Evaluation, QueryState, Record, RegionLookup};
use serde::Serialize;

use crate::error::{Result, RosterError};
use crate::output::OutputMode;

const RESULTS_TEMPLATE: &str = include_str!("templates/results.jinja");
const REGIONS_TEMPLATE: &str = include_str!("templates/regions.jinja");

/// One record, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    /// Labels of every category key on the record.
    pub categories: Vec<String>,
    /// Topics, most experienced first.
    pub topics: Vec<TopicView>,
    pub max_experience: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicView {
    pub label: String,
    pub experience_years: u32,
}

impl CardView {
    /// Builds the card for `record`, resolving its location through `lookup`.
    pub fn new<L: RegionLookup>(record: &Record, lookup: &L) -> Self {
        let (city, region) = lookup
            .locate(&record.postal_code)
            .map(|loc| (loc.city.clone(), loc.region.clone()))
            .unwrap_or_default();

        CardView {
            name: record.full_name(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            city,
            region,
            postal_code: record.postal_code.clone(),
            categories: record.category_names().map(category_label).collect(),
            topics: record
                .topics_by_experience()
                .into_iter()
                .map(|t| TopicView {
                    label: t.label.clone(),
                    experience_years: t.experience_years,
                })
                .collect(),
            max_experience: record.max_experience(),
        }
    }
}

/// Title-cases a category key, using the known label where there is one.
fn category_label(key: &str) -> String {
    match key.parse::<Category>() {
        Ok(category) => category.label().to_string(),
        Err(_) => {
            let mut chars = key.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// An evaluated query, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub total: usize,
    pub visible: usize,
    pub sort: String,
    pub search: String,
    /// Set when evaluation reported a configuration error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub cards: Vec<CardView>,
}

impl ResultsView {
    pub fn new<L: RegionLookup>(
        total: usize,
        evaluation: &Evaluation<'_>,
        state: &QueryState,
        lookup: &L,
    ) -> Self {
        ResultsView {
            total,
            visible: evaluation.len(),
            sort: state.sort_key().label().to_string(),
            search: state.text_term().to_string(),
            warning: evaluation.error().map(|e| format!("warning: {e}")),
            cards: evaluation
                .iter()
                .map(|record| CardView::new(record, lookup))
                .collect(),
        }
    }
}

/// One region selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionView {
    pub code: String,
    pub selected: bool,
    pub count: usize,
}

/// The region selectors, in collation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionsView {
    pub regions: Vec<RegionView>,
}

impl RegionsView {
    pub fn new(state: &QueryState, counts: &BTreeMap<String, usize>) -> Self {
        let mut regions: Vec<RegionView> = state
            .region_selection()
            .iter()
            .map(|(code, selected)| RegionView {
                code: code.clone(),
                selected: *selected,
                count: counts.get(code).copied().unwrap_or(0),
            })
            .collect();
        regions.sort_by(|a, b| collate::compare(&a.code, &b.code));
        RegionsView { regions }
    }
}

/// Named styles applied by the `style` template filter.
fn theme() -> HashMap<&'static str, Style> {
    HashMap::from([
        ("header", Style::new().bold().cyan()),
        ("title", Style::new().bold()),
        ("label", Style::new().yellow()),
        ("warning", Style::new().red().bold()),
    ])
}

/// Renders views in a fixed output mode.
pub struct Renderer {
    env: Environment<'static>,
    mode: OutputMode,
}

impl Renderer {
    /// Creates a renderer. `Auto` is resolved once, here.
    pub fn new(mode: OutputMode) -> Result<Self> {
        let mode = mode.resolve_auto();
        let styled = mode.is_styled();
        let theme = theme();

        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            match theme.get(name.as_str()) {
                Some(style) if styled => style
                    .clone()
                    .force_styling(true)
                    .apply_to(text)
                    .to_string(),
                _ => text,
            }
        });
        env.add_template("results", RESULTS_TEMPLATE)?;
        env.add_template("regions", REGIONS_TEMPLATE)?;

        Ok(Renderer { env, mode })
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn render_results(&self, view: &ResultsView) -> Result<String> {
        self.render("results", view)
    }

    pub fn render_regions(&self, view: &RegionsView) -> Result<String> {
        self.render("regions", view)
    }

    fn render<T: Serialize>(&self, template: &str, view: &T) -> Result<String> {
        match self.mode {
            OutputMode::Json => serde_json::to_string_pretty(view)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(|e| RosterError::Serialize(e.to_string())),
            OutputMode::Yaml => {
                serde_yaml::to_string(view).map_err(|e| RosterError::Serialize(e.to_string()))
            }
            _ => {
                let mut output = self
                    .env
                    .get_template(template)?
                    .render(Value::from_serialize(view))?;
                if !output.ends_with('\n') {
                    output.push('\n');
                }
                Ok(output)
            }
        }
    }
}
