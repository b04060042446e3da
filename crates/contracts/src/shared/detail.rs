//! Record detail view: lookup state, tabs and related lists

use serde::{Deserialize, Serialize};

use crate::domain::common::Record;
use crate::shared::badge::Badge;

/// Result of resolving a record by identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    /// Lookup in progress
    Loading,
    Loaded(T),
    /// No record with this identifier
    NotFound(String),
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        DetailState::Loading
    }
}

impl<T> DetailState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            DetailState::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Build from a lookup result
    pub fn from_lookup(id: &str, found: Option<T>) -> Self {
        match found {
            Some(record) => DetailState::Loaded(record),
            None => DetailState::NotFound(id.to_string()),
        }
    }
}

impl<T: Record> DetailState<T> {
    /// Header text: the record title, or a placeholder
    pub fn heading(&self) -> String {
        match self {
            DetailState::Loading => "Loading…".to_string(),
            DetailState::Loaded(record) => record.title().to_string(),
            DetailState::NotFound(id) => format!("{} not found: {}", T::element_name(), id),
        }
    }
}

pub fn find_by_id<'a, T: Record>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

/// Resolve `id` against an in-memory collection. Never panics for unknown ids.
pub fn resolve<T: Record>(items: &[T], id: &str) -> DetailState<T> {
    DetailState::from_lookup(id, find_by_id(items, id).cloned())
}

/// Static description of one detail tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub key: &'static str,
    pub label: &'static str,
}

impl TabSpec {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Which tab of a detail view is active. Pure UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    tabs: &'static [TabSpec],
    active: &'static str,
}

impl TabState {
    pub fn new(tabs: &'static [TabSpec]) -> Self {
        Self {
            tabs,
            active: tabs.first().map(|t| t.key).unwrap_or(""),
        }
    }

    pub fn tabs(&self) -> &'static [TabSpec] {
        self.tabs
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active == key
    }

    /// Switch to `key`. Unknown keys are ignored; returns whether the tab changed.
    pub fn select(&mut self, key: &str) -> bool {
        match self.tabs.iter().find(|t| t.key == key) {
            Some(tab) if tab.key != self.active => {
                self.active = tab.key;
                true
            }
            _ => false,
        }
    }
}

/// One row of a related list shown inside a detail tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedRow {
    pub id: String,
    /// Navigation key of the related record's collection, e.g. "a003_products"
    pub collection: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Badge,
}

impl RelatedRow {
    pub fn from_record<R: Record>(record: &R, subtitle: Option<String>) -> Self {
        Self {
            id: record.id().to_string(),
            collection: R::full_name(),
            title: record.title().to_string(),
            subtitle,
            badge: record.status_badge(),
        }
    }
}

/// Related records grouped under the tab that shows them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedList {
    pub tab: String,
    pub rows: Vec<RelatedRow>,
}

/// Detail endpoint payload: the record plus lists for its related tabs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDetail<T> {
    pub record: T,
    #[serde(default)]
    pub related: Vec<RelatedList>,
}

impl<T> RecordDetail<T> {
    pub fn new(record: T) -> Self {
        Self {
            record,
            related: Vec::new(),
        }
    }

    pub fn with_related(mut self, tab: &str, rows: Vec<RelatedRow>) -> Self {
        self.related.push(RelatedList {
            tab: tab.to_string(),
            rows,
        });
        self
    }

    /// Rows for `tab`, empty when the tab has no related list
    pub fn related_for(&self, tab: &str) -> &[RelatedRow] {
        self.related
            .iter()
            .find(|r| r.tab == tab)
            .map(|r| r.rows.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_category::aggregate::{Category, CategoryStatus};
    use crate::domain::common::utc_date;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            parent_id: None,
            description: String::new(),
            products_count: 0,
            status: CategoryStatus::Active,
            created_at: utc_date(2024, 1, 1),
        }
    }

    #[test]
    fn test_resolve_present_id() {
        let items = vec![category("CAT-001", "Electronics"), category("CAT-002", "Books")];
        let state = resolve(&items, "CAT-002");
        assert_eq!(state.record().map(|c| c.name.as_str()), Some("Books"));
        assert_eq!(state.heading(), "Books");
    }

    #[test]
    fn test_resolve_absent_id_is_not_found() {
        let items = vec![category("CAT-001", "Electronics")];
        let state = resolve(&items, "CAT-404");
        assert_eq!(state, DetailState::NotFound("CAT-404".to_string()));
        assert!(state.record().is_none());
        assert!(state.heading().contains("CAT-404"));
    }

    #[test]
    fn test_default_state_is_loading() {
        let state: DetailState<Category> = DetailState::default();
        assert!(state.is_loading());
        assert_eq!(state.heading(), "Loading…");
    }

    #[test]
    fn test_tab_switching() {
        static TABS: [TabSpec; 3] = [
            TabSpec::new("overview", "Overview"),
            TabSpec::new("products", "Products"),
            TabSpec::new("subcategories", "Subcategories"),
        ];
        let mut state = TabState::new(&TABS);
        assert_eq!(state.active(), "overview");
        assert!(state.select("products"));
        assert!(state.is_active("products"));
        assert!(!state.select("products"));
        assert!(!state.select("missing"));
        assert_eq!(state.active(), "products");
    }

    #[test]
    fn test_related_lookup() {
        let child = category("CAT-010", "Phones");
        let detail = RecordDetail::new(category("CAT-001", "Electronics"))
            .with_related("subcategories", vec![RelatedRow::from_record(&child, None)]);
        assert_eq!(detail.related_for("subcategories").len(), 1);
        assert_eq!(detail.related_for("subcategories")[0].collection, "a004_categories");
        assert!(detail.related_for("products").is_empty());
    }
}
