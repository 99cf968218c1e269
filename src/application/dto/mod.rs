//! # Data Transfer Objects
//!
//! - **command**: 入力行をパースしたコマンド

pub mod command;
