//! # Birthday Reminder Service
//!
//! 直近の誕生日（お祝い日）を計算するドメインサービス

use chrono::{Datelike, Days, NaiveDate, TimeDelta, Weekday};
use std::fmt;

use crate::domain::entities::birthday::{BirthdayDate, BIRTHDAY_FORMAT};
use crate::domain::entities::record::Record;
use crate::domain::errors::{ContactError, ContactResult};

/// デフォルトのお知らせ期間（日数）
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// 直近の誕生日
///
/// `date` は週末の場合に翌月曜日へ繰り下げた後のお祝い日
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, birthday: {}",
            self.name,
            self.date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// 誕生日リマインダーサービス
pub struct BirthdayReminderService;

impl BirthdayReminderService {
    /// レコード群から期間内の誕生日を抽出する
    ///
    /// # Arguments
    ///
    /// * `records` - 対象のレコード（この順序で結果を返す）
    /// * `window_days` - `today` から何日後までを対象にするか（負の値は常に空）
    /// * `today` - 基準日
    ///
    /// # Errors
    ///
    /// 2月29日の誕生日が平年に当たった場合に `ContactError::InvalidDate` を返す
    pub fn upcoming<'a>(
        records: impl IntoIterator<Item = &'a Record>,
        window_days: i64,
        today: NaiveDate,
    ) -> ContactResult<Vec<UpcomingBirthday>> {
        let mut result = Vec::new();

        for record in records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            if let Some(date) = Self::next_observance(birthday, window_days, today)? {
                result.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                });
            }
        }

        Ok(result)
    }

    /// 1件の誕生日について、期間内であればお祝い日を返す
    ///
    /// 今年の誕生日が過ぎていれば来年に繰り越し、`[today, today + window_days]`
    /// に入る場合のみ対象とする。土曜日は+2日、日曜日は+1日して月曜日にする。
    /// 繰り下げ後の日付が期間外になっても除外しない。
    pub fn next_observance(
        birthday: &BirthdayDate,
        window_days: i64,
        today: NaiveDate,
    ) -> ContactResult<Option<NaiveDate>> {
        let mut this_year = Self::on_year(birthday, today.year())?;
        if this_year < today {
            this_year = Self::on_year(birthday, today.year() + 1)?;
        }

        if this_year < today || this_year > Self::window_end(today, window_days) {
            return Ok(None);
        }

        Self::roll_to_weekday(this_year).map(Some)
    }

    fn on_year(birthday: &BirthdayDate, year: i32) -> ContactResult<NaiveDate> {
        NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).ok_or(
            ContactError::InvalidDate {
                day: birthday.day(),
                month: birthday.month(),
                year,
            },
        )
    }

    fn window_end(today: NaiveDate, window_days: i64) -> NaiveDate {
        TimeDelta::try_days(window_days)
            .and_then(|delta| today.checked_add_signed(delta))
            .unwrap_or(if window_days < 0 {
                NaiveDate::MIN
            } else {
                NaiveDate::MAX
            })
    }

    fn roll_to_weekday(date: NaiveDate) -> ContactResult<NaiveDate> {
        let shift = match date.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => return Ok(date),
        };

        date.checked_add_days(Days::new(shift))
            .ok_or(ContactError::InvalidDate {
                day: date.day(),
                month: date.month(),
                year: date.year(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_birthday(name: &str, birthday: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_saturday_rolls_to_monday() {
        // 2024-06-15 は土曜日
        let records = vec![record_with_birthday("anna", "15.06.1990")];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 6, 10)).unwrap();

        assert_eq!(
            result,
            vec![UpcomingBirthday {
                name: "anna".to_string(),
                date: ymd(2024, 6, 17),
            }]
        );
        assert_eq!(
            result[0].to_string(),
            "Contact name: anna, birthday: 17.06.2024"
        );
    }

    #[test]
    fn test_sunday_rolls_to_monday() {
        let records = vec![record_with_birthday("anna", "16.06.1990")];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 6, 10)).unwrap();

        assert_eq!(result[0].date, ymd(2024, 6, 17));
    }

    #[test]
    fn test_weekday_is_not_moved() {
        let records = vec![record_with_birthday("anna", "12.06.1990")];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 6, 10)).unwrap();

        assert_eq!(result[0].date, ymd(2024, 6, 12));
    }

    #[test]
    fn test_roll_forward_may_leave_window() {
        // 期間の終端が土曜日でも月曜日に繰り下げたまま返す
        let records = vec![record_with_birthday("anna", "15.06.1990")];

        let result = BirthdayReminderService::upcoming(&records, 5, ymd(2024, 6, 10)).unwrap();

        assert_eq!(result[0].date, ymd(2024, 6, 17));
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year_and_is_excluded() {
        let records = vec![record_with_birthday("bob", "01.01.1990")];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 6, 10)).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_year_wraparound() {
        // 2025-01-02 は木曜日
        let records = vec![record_with_birthday("bob", "02.01.2000")];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 12, 28)).unwrap();

        assert_eq!(result[0].date, ymd(2025, 1, 2));
    }

    #[test]
    fn test_today_is_included() {
        let records = vec![record_with_birthday("bob", "10.06.1990")];

        let result = BirthdayReminderService::upcoming(&records, 0, ymd(2024, 6, 10)).unwrap();

        assert_eq!(result[0].date, ymd(2024, 6, 10));
    }

    #[test]
    fn test_negative_window_is_always_empty() {
        let records = vec![
            record_with_birthday("a", "10.06.1990"),
            record_with_birthday("b", "11.06.1990"),
        ];

        let result = BirthdayReminderService::upcoming(&records, -1, ymd(2024, 6, 10)).unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_huge_window_does_not_overflow() {
        let records = vec![record_with_birthday("a", "11.06.1990")];

        let result =
            BirthdayReminderService::upcoming(&records, i64::MAX, ymd(2024, 6, 10)).unwrap();
        assert_eq!(result.len(), 1);

        let result =
            BirthdayReminderService::upcoming(&records, i64::MIN, ymd(2024, 6, 10)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_records_without_birthday_are_skipped() {
        let records = vec![
            Record::new("nobody").unwrap(),
            record_with_birthday("c", "11.06.1990"),
        ];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 6, 10)).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "c");
    }

    #[test]
    fn test_feb_29_in_common_year_fails() {
        let records = vec![record_with_birthday("leap", "29.02.2000")];

        let err = BirthdayReminderService::upcoming(&records, 7, ymd(2025, 6, 10)).unwrap_err();

        assert_eq!(
            err,
            ContactError::InvalidDate {
                day: 29,
                month: 2,
                year: 2025
            }
        );
    }

    #[test]
    fn test_feb_29_passed_in_leap_year_fails_next_year() {
        let records = vec![record_with_birthday("leap", "29.02.2000")];

        let err = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 3, 1)).unwrap_err();

        assert_eq!(
            err,
            ContactError::InvalidDate {
                day: 29,
                month: 2,
                year: 2025
            }
        );
    }

    #[test]
    fn test_feb_29_in_leap_year() {
        // 2024-02-29 は木曜日
        let records = vec![record_with_birthday("leap", "29.02.2000")];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 2, 25)).unwrap();

        assert_eq!(result[0].date, ymd(2024, 2, 29));
    }

    #[test]
    fn test_results_follow_input_order() {
        let records = vec![
            record_with_birthday("zed", "14.06.1990"),
            record_with_birthday("amy", "11.06.1990"),
        ];

        let result = BirthdayReminderService::upcoming(&records, 7, ymd(2024, 6, 10)).unwrap();

        let names: Vec<_> = result.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["zed", "amy"]);
    }
}
