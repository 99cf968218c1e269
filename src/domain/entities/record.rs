//! # Record Entity
//!
//! 1人分の連絡先（名前・電話番号リスト・誕生日）

use std::fmt;

use super::birthday::BirthdayDate;
use super::contact_name::ContactName;
use super::phone_number::PhoneNumber;
use crate::domain::errors::{ContactError, ContactResult};

/// 連絡先レコード
///
/// 名前は作成後に変更できない。電話番号は挿入順を保持し、重複も許可する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// 名前だけを持つ新しいレコードを作成
    ///
    /// # Errors
    ///
    /// 名前が空の場合にエラーを返す
    pub fn new(name: impl Into<String>) -> ContactResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// 電話番号を末尾に追加
    ///
    /// # Errors
    ///
    /// 10桁の数字でない場合に `ContactError::InvalidPhone` を返す
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// 一致する最初の電話番号を削除
    ///
    /// # Errors
    ///
    /// 一致する番号がない場合に `ContactError::PhoneNotFound` を返す
    pub fn remove_phone(&mut self, raw: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| ContactError::PhoneNotFound(raw.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// 電話番号を置き換える
    ///
    /// 古い番号を削除してから新しい番号を末尾に追加する。
    /// 新しい番号が不正な場合、古い番号は削除されたままになる。
    ///
    /// # Errors
    ///
    /// - 古い番号がない場合は `ContactError::PhoneNotFound`
    /// - 新しい番号が不正な場合は `ContactError::InvalidPhone`
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> ContactResult<()> {
        if self.find_phone(old_raw).is_none() {
            return Err(ContactError::PhoneNotFound(old_raw.to_string()));
        }
        self.remove_phone(old_raw)?;
        self.add_phone(new_raw)
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// すべての電話番号を削除
    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    /// 誕生日を設定（既存の値は上書き）
    ///
    /// # Errors
    ///
    /// `DD.MM.YYYY` 形式でない場合に `ContactError::InvalidBirthday` を返す
    pub fn add_birthday(&mut self, raw: &str) -> ContactResult<()> {
        self.birthday = Some(BirthdayDate::parse(raw)?);
        Ok(())
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
