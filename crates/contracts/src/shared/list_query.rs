//! Filter state and pagination for record lists
//!
//! The same functions back the REST list endpoint and the client-side list view,
//! so both always agree on which rows are visible.

use serde::{Deserialize, Serialize};

use crate::domain::common::Record;

/// Page sizes offered by the list view
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Status filter value that disables status filtering
pub const STATUS_ALL: &str = "all";

/// Search text + status filter + pagination cursor of one list view.
///
/// Pages are 1-based. Changing the search text, the status filter or the page size
/// moves the cursor back to page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub status: String,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: STATUS_ALL.to_string(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListQuery {
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search != search {
            self.search = search;
            self.page = 1;
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        let mut status = status.into();
        if status.trim().is_empty() {
            status = STATUS_ALL.to_string();
        }
        if self.status != status {
            self.status = status;
            self.page = 1;
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if self.page_size != page_size {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    /// Move to `page`, clamped to `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    /// Reset search and status filter.
    pub fn clear_filters(&mut self) {
        self.set_search(String::new());
        self.set_status(STATUS_ALL);
    }

    /// Page size actually used for slicing (0 means default)
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || !is_all(&self.status)
    }
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of records after filtering
    pub total: usize,
    /// Current page (1-based, clamped)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based index of the first row on this page, 0 for an empty page
    pub fn first_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn last_row(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_row() + self.items.len() - 1
        }
    }
}

fn is_all(status: &str) -> bool {
    let status = status.trim();
    status.is_empty() || status.eq_ignore_ascii_case(STATUS_ALL)
}

/// `max(1, ceil(len / page_size))`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    len.div_ceil(page_size).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Case-insensitive substring match against the record's search fields.
/// An empty (or whitespace) search term matches everything.
pub fn matches_search<T: Record>(record: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact status key match, `"all"` bypasses the check.
pub fn matches_status<T: Record>(record: &T, status: &str) -> bool {
    is_all(status) || record.status_key() == status.trim()
}

/// Records satisfying both the search and the status predicate, in original order.
pub fn filter_records<T: Record>(items: &[T], search: &str, status: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_search(*item, search) && matches_status(*item, status))
        .cloned()
        .collect()
}

/// Slice `[(page-1)*page_size, page*page_size)` of `items`, page clamped first.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let total = items.len();
    let total_pages = total_pages(total, page_size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        items: items[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages,
    }
}

/// Filter + paginate in one step.
pub fn list_page<T: Record>(items: &[T], query: &ListQuery) -> Page<T> {
    let filtered = filter_records(items, &query.search, &query.status);
    paginate(&filtered, query.page, query.effective_page_size())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::aggregate::{Order, OrderStatus};
    use crate::domain::a005_payment::aggregate::PaymentMethod;
    use crate::domain::common::utc_date;
    use proptest::prelude::*;

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_name: customer.to_string(),
            customer_email: format!("{}@example.com", customer.to_lowercase()),
            items: Vec::new(),
            total: 10.0,
            payment_method: PaymentMethod::Card,
            shipping_address: "1 Main St".to_string(),
            status,
            created_at: utc_date(2024, 1, 1),
        }
    }

    fn five_orders() -> Vec<Order> {
        vec![
            order("ORD-1", "Alice", OrderStatus::Completed),
            order("ORD-2", "Bob", OrderStatus::Pending),
            order("ORD-3", "Carol", OrderStatus::Processing),
            order("ORD-4", "Dave", OrderStatus::Shipped),
            order("ORD-5", "Erin", OrderStatus::Cancelled),
        ]
    }

    #[test]
    fn test_status_filter_selects_exact_match() {
        let orders = five_orders();
        let filtered = filter_records(&orders, "", "completed");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].status, OrderStatus::Completed);

        assert_eq!(filter_records(&orders, "", STATUS_ALL).len(), 5);
        assert_eq!(filter_records(&orders, "", "ALL").len(), 5);
        assert!(filter_records(&orders, "", "unknown").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_and_combined() {
        let orders = five_orders();
        assert_eq!(filter_records(&orders, "  aLiCe ", STATUS_ALL).len(), 1);
        // email field is searched too
        assert_eq!(filter_records(&orders, "bob@example", STATUS_ALL).len(), 1);
        // both predicates must hold
        assert!(filter_records(&orders, "alice", "pending").is_empty());
        assert_eq!(filter_records(&orders, "ord-", "shipped").len(), 1);
    }

    #[test]
    fn test_page_size_two_over_five() {
        let orders = five_orders();
        let page = paginate(&orders, 3, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "ORD-5");
        assert_eq!((page.first_row(), page.last_row()), (5, 5));
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let orders = five_orders();
        let query = ListQuery {
            search: "zzz-no-match".to_string(),
            ..ListQuery::default()
        };
        let page = list_page(&orders, &query);
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.first_row(), 0);
    }

    #[test]
    fn test_page_is_clamped() {
        let orders = five_orders();
        assert_eq!(paginate(&orders, 99, 2).page, 3);
        assert_eq!(paginate(&orders, 0, 2).page, 1);

        let mut query = ListQuery::default();
        query.set_page(7, 3);
        assert_eq!(query.page, 3);
        query.set_page(0, 3);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut query = ListQuery::default();

        query.page = 4;
        query.set_search("alice");
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_status("pending");
        assert_eq!(query.page, 1);

        query.page = 4;
        query.set_page_size(20);
        assert_eq!(query.page, 1);

        // setting the same value is not a change
        query.page = 4;
        query.set_search("alice");
        query.set_status("pending");
        query.set_page_size(20);
        assert_eq!(query.page, 4);

        query.clear_filters();
        assert_eq!(query.page, 1);
        assert!(!query.is_filtered());
    }

    #[test]
    fn test_blank_status_means_all() {
        let mut query = ListQuery::default();
        query.set_status("pending");
        query.set_status("");
        assert_eq!(query.status, STATUS_ALL);
    }

    #[test]
    fn test_zero_page_size_uses_default() {
        let query = ListQuery {
            page_size: 0,
            ..ListQuery::default()
        };
        assert_eq!(query.effective_page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(total_pages(25, 0), 3);
    }

    fn status_strategy() -> impl Strategy<Value = OrderStatus> {
        prop_oneof![
            Just(OrderStatus::Pending),
            Just(OrderStatus::Processing),
            Just(OrderStatus::Shipped),
            Just(OrderStatus::Completed),
            Just(OrderStatus::Cancelled),
        ]
    }

    proptest! {
        /// Property: filtering twice with the same predicate changes nothing
        #[test]
        fn prop_filter_is_idempotent(
            rows in proptest::collection::vec(("[a-z]{1,8}", status_strategy()), 0..30),
            search in "[a-z]{0,3}",
            status in prop_oneof![Just("all".to_string()), Just("pending".to_string()), Just("completed".to_string())],
        ) {
            let orders: Vec<Order> = rows
                .iter()
                .enumerate()
                .map(|(i, (name, st))| order(&format!("ORD-{}", i), name, *st))
                .collect();

            let once = filter_records(&orders, &search, &status);
            let twice = filter_records(&once, &search, &status);
            let once_ids: Vec<&str> = once.iter().map(|o| o.id.as_str()).collect();
            let twice_ids: Vec<&str> = twice.iter().map(|o| o.id.as_str()).collect();
            prop_assert_eq!(once_ids, twice_ids);
        }

        /// Property: total_pages = max(1, ceil(len / size)), page always in range
        #[test]
        fn prop_pagination_invariants(len in 0usize..200, size in 1usize..60, page in 0usize..50) {
            let items: Vec<usize> = (0..len).collect();
            let result = paginate(&items, page, size);
            let expected = std::cmp::max(1, (len + size - 1) / size);
            prop_assert_eq!(result.total_pages, expected);
            prop_assert!(result.page >= 1 && result.page <= result.total_pages);
            prop_assert!(result.items.len() <= size);
            prop_assert_eq!(result.total, len);
        }
    }
}
