//! # Domain Errors
//!
//! ドメイン層で発生するエラーの定義
//!
//! すべてのエラーは検出した時点で返され、ドメイン層では握りつぶさない。
//! ユーザー向けメッセージへの変換は Application 層のコマンド実行で行う。

use thiserror::Error;

/// エラーの種別
///
/// `ContactError` の各バリアントはこの3種類のいずれかに分類される
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 電話番号・誕生日・名前の形式が不正
    Validation,
    /// 対象の電話番号または連絡先が存在しない
    NotFound,
    /// 誕生日の日付計算に失敗（2月29日問題）
    Date,
}

/// 連絡先ドメインのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("The number must be 10 digits long")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday(String),

    #[error("Contact name cannot be empty")]
    EmptyName,

    #[error("'{0}' not found")]
    PhoneNotFound(String),

    #[error("Contact not found.")]
    ContactNotFound(String),

    #[error("{day:02}.{month:02} does not exist in {year}")]
    InvalidDate { day: u32, month: u32, year: i32 },
}

impl ContactError {
    /// エラーの種別を返す
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPhone(_) | Self::InvalidBirthday(_) | Self::EmptyName => {
                ErrorKind::Validation
            }
            Self::PhoneNotFound(_) | Self::ContactNotFound(_) => ErrorKind::NotFound,
            Self::InvalidDate { .. } => ErrorKind::Date,
        }
    }
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;
