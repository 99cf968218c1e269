//! Adapter Layer
//!
//! 外部システム（ファイルシステム, コンソール）との統合

pub mod config;
pub mod repositories;
pub mod view;
