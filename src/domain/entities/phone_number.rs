//! # PhoneNumber Value Object
//!
//! 電話番号のバリューオブジェクト

use std::fmt;

use crate::domain::errors::{ContactError, ContactResult};

/// 電話番号の桁数
pub const PHONE_LENGTH: usize = 10;

/// 電話番号
///
/// 10桁の数字のみで構成される文字列
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// 新しい電話番号を作成
    ///
    /// # Errors
    ///
    /// 10桁の数字でない場合に `ContactError::InvalidPhone` を返す
    pub fn new(raw: impl Into<String>) -> ContactResult<Self> {
        let raw = raw.into();

        if raw.len() != PHONE_LENGTH || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(ContactError::InvalidPhone(raw));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
