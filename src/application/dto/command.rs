//! # Command DTO
//!
//! 入力行をパースしたコマンド

use crate::application::error::{CommandError, CommandResult};

/// ユーザーコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    /// `old_phone` がない場合はすべての番号を `new_phone` で置き換える
    Change {
        name: String,
        old_phone: Option<String>,
        new_phone: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    ShowPhone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays {
        window_days: Option<i64>,
    },
    Exit,
    Unknown(String),
}

/// 入力行を小文字化して空白で分割する
///
/// 空行の場合は `None`
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>();
    if tokens.is_empty() {
        return None;
    }
    let command = tokens.remove(0);
    Some((command, tokens))
}

impl Command {
    /// 入力行をコマンドに変換する
    ///
    /// # Returns
    ///
    /// 空行の場合は `None`
    ///
    /// # Errors
    ///
    /// 必須の引数が足りない場合、`birthdays` の日数が整数でない場合にエラーを返す
    pub fn parse(line: &str) -> Option<CommandResult<Self>> {
        let (command, args) = parse_input(line)?;
        Some(Self::from_parts(&command, args))
    }

    fn from_parts(command: &str, args: Vec<String>) -> CommandResult<Self> {
        let mut args = args.into_iter();

        let command = match command {
            "hello" => Self::Hello,
            "add" => {
                let (name, phone) = take_two(&mut args, "name and phone")?;
                Self::Add { name, phone }
            }
            "change" => {
                let (name, first) = take_two(&mut args, "name and new phone")?;
                match args.next() {
                    Some(new_phone) => Self::Change {
                        name,
                        old_phone: Some(first),
                        new_phone,
                    },
                    None => Self::Change {
                        name,
                        old_phone: None,
                        new_phone: first,
                    },
                }
            }
            "remove-phone" => {
                let (name, phone) = take_two(&mut args, "name and phone")?;
                Self::RemovePhone { name, phone }
            }
            "delete" => Self::Delete {
                name: take_one(&mut args, "name")?,
            },
            "phone" => Self::ShowPhone {
                name: take_one(&mut args, "name")?,
            },
            "all" => Self::All,
            "add-birthday" => {
                let (name, birthday) = take_two(&mut args, "name and birthday")?;
                Self::AddBirthday { name, birthday }
            }
            "show-birthday" => Self::ShowBirthday {
                name: take_one(&mut args, "name")?,
            },
            "birthdays" => {
                let window_days = args
                    .next()
                    .map(|raw| raw.parse::<i64>().map_err(|_| CommandError::InvalidWindow(raw)))
                    .transpose()?;
                Self::Birthdays { window_days }
            }
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

fn take_one(
    args: &mut impl Iterator<Item = String>,
    usage: &'static str,
) -> CommandResult<String> {
    args.next().ok_or(CommandError::MissingArguments { usage })
}

fn take_two(
    args: &mut impl Iterator<Item = String>,
    usage: &'static str,
) -> CommandResult<(String, String)> {
    let first = take_one(args, usage)?;
    let second = take_one(args, usage)?;
    Ok((first, second))
}
