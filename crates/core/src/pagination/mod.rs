//! Pagination module - skip/take windowing over queryable collections.

mod paginator;

pub use paginator::{PagedResult, Paginator};
