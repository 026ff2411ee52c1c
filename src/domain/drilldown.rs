use std::collections::HashMap;

use crate::domain::aggregate::CompanyGroup;
use crate::domain::entities::record::Record;

pub const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrilldownState {
    pub expanded: bool,
    /// 1-based.
    pub page: usize,
}

impl Default for DrilldownState {
    fn default() -> Self {
        Self {
            expanded: false,
            page: 1,
        }
    }
}

/// Per-company expand flag and page cursor.
///
/// Keys that were never touched read as a fresh, collapsed state on page 1.
/// Collapsing keeps the page so re-expanding resumes where the user left.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrilldownController {
    states: HashMap<String, DrilldownState>,
}

impl DrilldownController {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self, key: &str) -> DrilldownState {
        self.states.get(key).copied().unwrap_or_default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.state(key).expanded
    }

    pub fn current_page(&self, key: &str) -> usize {
        self.state(key).page
    }

    /// Returns the new `expanded` value.
    pub fn toggle(&mut self, key: &str) -> bool {
        let state = self.states.entry(key.to_string()).or_default();
        state.expanded = !state.expanded;
        state.expanded
    }

    pub fn page<'a>(&self, key: &str, group: &'a CompanyGroup) -> &'a [Record] {
        page_window(&group.records, self.current_page(key))
    }

    /// Stores `new_page` clamped to `1..=total_pages(group)` and returns it.
    pub fn set_page(&mut self, key: &str, group: &CompanyGroup, new_page: usize) -> usize {
        let clamped = new_page.clamp(1, total_pages(group));
        self.states.entry(key.to_string()).or_default().page = clamped;
        clamped
    }

    pub fn next_page(&mut self, key: &str, group: &CompanyGroup) -> usize {
        let current = self.current_page(key);
        self.set_page(key, group, current.saturating_add(1))
    }

    pub fn previous_page(&mut self, key: &str, group: &CompanyGroup) -> usize {
        let current = self.current_page(key);
        self.set_page(key, group, current.saturating_sub(1))
    }
}

/// Always at least 1, even for an empty group.
pub fn total_pages(group: &CompanyGroup) -> usize {
    group.records.len().div_ceil(PAGE_SIZE).max(1)
}

/// Slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` clipped to `records`; empty when out of range.
pub fn page_window(records: &[Record], page: usize) -> &[Record] {
    let Some(start) = page.checked_sub(1).map(|p| p.saturating_mul(PAGE_SIZE)) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(records.len());
    &records[start..end]
}
