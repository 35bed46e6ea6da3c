//! Turning user input into query events.

use roster_seeker::{Category, QueryEvent, SortKey};

use crate::error::{Result, RosterError};

/// Builds a category toggle from its name.
///
/// Follower categories have no selector of their own and are rejected.
pub fn toggle_category(name: &str) -> Result<QueryEvent> {
    let category: Category = name.trim().to_lowercase().parse()?;
    if category.is_follower() {
        return Err(RosterError::Command(format!(
            "'{category}' follows another category and cannot be toggled directly"
        )));
    }
    Ok(QueryEvent::CategoryToggled(category))
}

/// Builds a region toggle. Codes are matched as given.
pub fn toggle_region(code: &str) -> Result<QueryEvent> {
    let code = code.trim();
    if code.is_empty() {
        return Err(RosterError::Command("region code is required".into()));
    }
    Ok(QueryEvent::RegionToggled(code.to_string()))
}

/// Builds a sort change. Unrecognized keys pass through and are reported at
/// evaluation time.
pub fn sort_by(key: &str) -> Result<QueryEvent> {
    let key = key.trim();
    if key.is_empty() {
        return Err(RosterError::Command(format!(
            "sort key is required (one of: {})",
            SortKey::SUPPORTED
                .iter()
                .map(SortKey::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    Ok(QueryEvent::SortKeyChanged(SortKey::from(key)))
}
