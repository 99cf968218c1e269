//! # Execute Command Use Case
//!
//! 入力行1行分のコマンドを実行し、結果を `UserView` に表示する

use chrono::NaiveDate;
use log::debug;

use crate::application::dto::command::Command;
use crate::application::error::CommandResult;
use crate::application::view::UserView;
use crate::domain::entities::address_book::AddressBook;
use crate::domain::entities::record::Record;
use crate::domain::errors::ContactError;
use crate::domain::services::birthday_reminder::DEFAULT_WINDOW_DAYS;

/// セッション終了時のメッセージ
pub const GOODBYE_MESSAGE: &str = "Good bye!";

/// コマンド実行後にセッションを続けるかどうか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// コマンド実行ユースケース
///
/// すべてのエラーはここでユーザー向けメッセージに変換され、呼び出し側には返さない
pub struct ExecuteCommandUseCase {
    default_window_days: i64,
}

impl ExecuteCommandUseCase {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `default_window_days` - `birthdays` に日数が指定されなかった場合の期間
    pub fn new(default_window_days: i64) -> Self {
        Self {
            default_window_days,
        }
    }

    /// 入力行を実行する
    ///
    /// # Arguments
    ///
    /// * `line` - ユーザーの入力行
    /// * `book` - 操作対象のアドレス帳
    /// * `view` - 結果の表示先
    /// * `today` - 誕生日計算の基準日
    ///
    /// # Returns
    ///
    /// `close` / `exit` の場合は `Flow::Exit`、それ以外は `Flow::Continue`
    pub fn execute(
        &self,
        line: &str,
        book: &mut AddressBook,
        view: &dyn UserView,
        today: NaiveDate,
    ) -> Flow {
        let Some(parsed) = Command::parse(line) else {
            return Flow::Continue;
        };

        let command = match parsed {
            Ok(command) => command,
            Err(err) => {
                view.show(&err.user_message());
                return Flow::Continue;
            }
        };
        debug!("Executing command: {:?}", command);

        let flow = if command == Command::Exit {
            Flow::Exit
        } else {
            Flow::Continue
        };

        if let Err(err) = self.handle(command, book, view, today) {
            debug!("Command failed: {:?}", err);
            view.show(&err.user_message());
        }

        flow
    }

    fn handle(
        &self,
        command: Command,
        book: &mut AddressBook,
        view: &dyn UserView,
        today: NaiveDate,
    ) -> CommandResult<()> {
        match command {
            Command::Hello => view.show("How can I help you?"),
            Command::Add { name, phone } => {
                let message = if book.find(&name).is_some() {
                    "Contact updated."
                } else {
                    // 電話番号の検証より先に登録する
                    book.add_record(Record::new(name.as_str())?);
                    "Contact added."
                };
                find_record(book, &name)?.add_phone(&phone)?;
                view.show(message);
            }
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                let record = find_record(book, &name)?;
                match old_phone {
                    Some(old_phone) => record.edit_phone(&old_phone, &new_phone)?,
                    None => {
                        record.clear_phones();
                        record.add_phone(&new_phone)?;
                    }
                }
                view.show("Contact changed.");
            }
            Command::RemovePhone { name, phone } => {
                find_record(book, &name)?.remove_phone(&phone)?;
                view.show("Phone removed.");
            }
            Command::Delete { name } => {
                book.delete(&name)?;
                view.show("Contact deleted.");
            }
            Command::ShowPhone { name } => {
                let record = book
                    .find(&name)
                    .ok_or(ContactError::ContactNotFound(name))?;
                view.show(&record.describe());
            }
            Command::All => {
                if book.is_empty() {
                    view.show("No contacts saved.");
                }
                for record in book.all_records() {
                    view.show(&record.describe());
                }
            }
            Command::AddBirthday { name, birthday } => {
                find_record(book, &name)?.add_birthday(&birthday)?;
                view.show("Birthday added.");
            }
            Command::ShowBirthday { name } => {
                let record = book
                    .find(&name)
                    .ok_or_else(|| ContactError::ContactNotFound(name.clone()))?;
                let birthday = record
                    .birthday()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "not set".to_string());
                view.show(&format!("Contact name: {}, birthday: {}", name, birthday));
            }
            Command::Birthdays { window_days } => {
                let window_days = window_days.unwrap_or(self.default_window_days);
                let upcoming = book.upcoming_birthdays(window_days, today)?;
                if upcoming.is_empty() {
                    view.show("No birthdays next week");
                } else {
                    let lines = upcoming
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>();
                    view.show(&lines.join("\n"));
                }
            }
            Command::Exit => view.show(GOODBYE_MESSAGE),
            Command::Unknown(_) => view.show("Invalid command."),
        }

        Ok(())
    }
}

impl Default for ExecuteCommandUseCase {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

fn find_record<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| ContactError::ContactNotFound(name.to_string()).into())
}
