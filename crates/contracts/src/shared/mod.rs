pub mod badge;
pub mod detail;
pub mod indicators;
pub mod list_query;
pub mod mutation;
pub mod validation;
