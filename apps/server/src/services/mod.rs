//! Application services coordinating stores, gateways, and response shapes.

pub mod history;
pub mod search;

pub use history::HistoryService;
pub use search::SearchService;
