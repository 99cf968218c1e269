//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Record**: 1人分の連絡先
//! - **AddressBook**: 連絡先のコレクション
//!
//! ## バリューオブジェクト
//!
//! - **ContactName** / **PhoneNumber** / **BirthdayDate**

pub mod address_book;
pub mod birthday;
pub mod contact_name;
pub mod phone_number;
pub mod record;

pub use address_book::AddressBook;
pub use birthday::BirthdayDate;
pub use contact_name::ContactName;
pub use phone_number::PhoneNumber;
pub use record::Record;
