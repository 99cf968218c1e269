//! # Domain Services
//!
//! エンティティ単体に収まらないビジネスルール

pub mod birthday_reminder;
