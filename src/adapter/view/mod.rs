//! View Implementations
//!
//! Application層の `UserView` の実装

pub mod console_view;
