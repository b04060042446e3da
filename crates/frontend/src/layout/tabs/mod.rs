//! Tab management module
//!
//! Содержит:
//! - `nav_key` - разбор ключа навигации (список / детальная карточка / дашборд)
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг tab.key → View (единственный источник правды)
//! - `tab_labels` - заголовки табов

pub mod nav_key;
pub mod page;
pub mod registry;
pub mod tab_labels;

pub use nav_key::{detail_key, parse_nav_key, NavTarget, OVERVIEW_KEY};
pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
