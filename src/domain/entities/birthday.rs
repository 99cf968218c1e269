//! # BirthdayDate Value Object
//!
//! 誕生日のバリューオブジェクト（`DD.MM.YYYY` 形式）

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::domain::errors::{ContactError, ContactResult};

/// 誕生日の入出力フォーマット
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// 誕生日
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// `DD.MM.YYYY` 形式の文字列から誕生日を作成
    ///
    /// # Errors
    ///
    /// パースに失敗した場合に `ContactError::InvalidBirthday` を返す
    pub fn parse(raw: &str) -> ContactResult<Self> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ContactError::InvalidBirthday(raw.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let birthday = BirthdayDate::parse("15.06.1990").unwrap();
        assert_eq!(birthday.day(), 15);
        assert_eq!(birthday.month(), 6);
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["01.01.2000", "29.02.1996", "31.12.1985", "09.09.1909"] {
            assert_eq!(BirthdayDate::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert!(BirthdayDate::parse("").is_err());
        assert!(BirthdayDate::parse("1990-06-15").is_err());
        assert!(BirthdayDate::parse("32.01.1990").is_err());
        assert!(BirthdayDate::parse("29.02.2023").is_err());
        assert!(BirthdayDate::parse("15.13.1990").is_err());
    }

    #[test]
    fn test_parse_error_kind() {
        let err = BirthdayDate::parse("tomorrow").unwrap_err();
        assert_eq!(err, ContactError::InvalidBirthday("tomorrow".to_string()));
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }
}
