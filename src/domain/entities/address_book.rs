//! # AddressBook Aggregate
//!
//! 連絡先名をキーとしたレコードのコレクション

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::record::Record;
use crate::domain::errors::{ContactError, ContactResult};
use crate::domain::services::birthday_reminder::{BirthdayReminderService, UpcomingBirthday};

/// アドレス帳
///
/// キーは常に `record.name()` と一致する。反復順は挿入順。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// レコードを追加する
    ///
    /// 同名のレコードがある場合は上書きする（位置は元のまま）
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// 名前に一致するレコードを削除する
    ///
    /// # Errors
    ///
    /// 該当するレコードがない場合に `ContactError::ContactNotFound` を返す
    pub fn delete(&mut self, name: &str) -> ContactResult<()> {
        self.records
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))
    }

    /// 挿入順ですべてのレコードを返す
    pub fn all_records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 期間内の誕生日を挿入順で返す
    ///
    /// # Errors
    ///
    /// 2月29日の誕生日が平年に当たった場合に `ContactError::InvalidDate` を返す
    pub fn upcoming_birthdays(
        &self,
        window_days: i64,
        today: NaiveDate,
    ) -> ContactResult<Vec<UpcomingBirthday>> {
        BirthdayReminderService::upcoming(self.all_records(), window_days, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(book: &AddressBook) -> Vec<&str> {
        book.all_records().map(|r| r.name().as_str()).collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("john").unwrap());

        assert!(book.find("john").is_some());
        assert!(book.find("John").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites_same_name() {
        let mut book = AddressBook::new();
        let mut first = Record::new("john").unwrap();
        first.add_phone("1111111111").unwrap();
        book.add_record(first);
        book.add_record(Record::new("jane").unwrap());

        book.add_record(Record::new("john").unwrap());

        assert_eq!(book.len(), 2);
        assert!(book.find("john").unwrap().phones().is_empty());
        assert_eq!(names(&book), vec!["john", "jane"]);
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("john").unwrap());

        book.find_mut("john")
            .unwrap()
            .add_phone("1234567890")
            .unwrap();

        assert_eq!(book.find("john").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let mut book = AddressBook::new();
        for name in ["a", "b", "c"] {
            book.add_record(Record::new(name).unwrap());
        }

        book.delete("b").unwrap();

        assert_eq!(names(&book), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_missing() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("a").unwrap());

        let err = book.delete("zzz").unwrap_err();

        assert_eq!(err, ContactError::ContactNotFound("zzz".to_string()));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_all_records_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["zoe", "adam", "mike"] {
            book.add_record(Record::new(name).unwrap());
        }

        assert_eq!(names(&book), vec!["zoe", "adam", "mike"]);
    }

    #[test]
    fn test_upcoming_birthdays() {
        let mut book = AddressBook::new();
        let mut anna = Record::new("anna").unwrap();
        anna.add_birthday("15.06.1990").unwrap();
        let mut bob = Record::new("bob").unwrap();
        bob.add_birthday("01.01.1990").unwrap();
        book.add_record(anna);
        book.add_record(bob);
        book.add_record(Record::new("carl").unwrap());

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let result = book.upcoming_birthdays(7, today).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(
            result[0].to_string(),
            "Contact name: anna, birthday: 17.06.2024"
        );
    }
}
