//! # ContactName Value Object
//!
//! 連絡先名。アドレス帳のキーとして使う（正規化なし）

use std::fmt;

use crate::domain::errors::{ContactError, ContactResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// # Errors
    ///
    /// 空文字列の場合に `ContactError::EmptyName` を返す
    pub fn new(raw: impl Into<String>) -> ContactResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ContactError::EmptyName);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
