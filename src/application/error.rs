//! Command errors.
//!
//! コマンド実行時のエラー。ドメインエラーに入力不足などの CLI 固有のエラーを加える

use thiserror::Error;

use crate::domain::errors::{ContactError, ErrorKind};

/// `birthdays` コマンドが失敗したときにユーザーへ表示するメッセージ
pub const FETCH_BIRTHDAYS_FAILED: &str = "Error in fetching birthdays";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// 引数が足りない
    #[error("Give me {usage} please.")]
    MissingArguments { usage: &'static str },

    /// `birthdays` の日数が整数でない
    #[error("Invalid number of days: {0}")]
    InvalidWindow(String),
}

impl CommandError {
    /// ユーザー向けのメッセージに変換
    ///
    /// 日付計算の失敗は詳細を出さず、共通のメッセージにまとめる
    pub fn user_message(&self) -> String {
        match self {
            Self::Contact(err) if err.kind() == ErrorKind::Date => {
                FETCH_BIRTHDAYS_FAILED.to_string()
            }
            Self::InvalidWindow(_) => FETCH_BIRTHDAYS_FAILED.to_string(),
            other => other.to_string(),
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = CommandError::from(ContactError::InvalidPhone("1".to_string()));
        assert_eq!(err.user_message(), "The number must be 10 digits long");
    }

    #[test]
    fn test_not_found_messages() {
        let err = CommandError::from(ContactError::ContactNotFound("bob".to_string()));
        assert_eq!(err.user_message(), "Contact not found.");

        let err = CommandError::from(ContactError::PhoneNotFound("1111111111".to_string()));
        assert_eq!(err.user_message(), "'1111111111' not found");
    }

    #[test]
    fn test_date_errors_are_generic() {
        let err = CommandError::from(ContactError::InvalidDate {
            day: 29,
            month: 2,
            year: 2025,
        });
        assert_eq!(err.user_message(), FETCH_BIRTHDAYS_FAILED);

        let err = CommandError::InvalidWindow("soon".to_string());
        assert_eq!(err.user_message(), FETCH_BIRTHDAYS_FAILED);
    }

    #[test]
    fn test_missing_arguments() {
        let err = CommandError::MissingArguments {
            usage: "name and phone",
        };
        assert_eq!(err.user_message(), "Give me name and phone please.");
    }
}
