//! JSON Book Repository Implementation
//!
//! BookRepositoryのJSON実装（アドレス帳をJSONファイルで永続化）

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::address_book::AddressBook;
use crate::domain::entities::record::Record;
use crate::domain::repositories::book_repository::BookRepository;

/// 現在の保存フォーマットのバージョン
pub const FORMAT_VERSION: u32 = 1;

/// JSONファイルベースのアドレス帳リポジトリ
pub struct JsonBookRepository;

/// アドレス帳（JSON永続化用の内部表現）
#[derive(Debug, Deserialize, Serialize)]
struct AddressBookJson {
    version: u32,
    /// 挿入順
    contacts: Vec<RecordJson>,
}

#[derive(Debug, Deserialize, Serialize)]
struct RecordJson {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    birthday: Option<String>,
}

impl JsonBookRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    fn expand(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).as_ref())
    }

    fn temp_path(path: &Path) -> PathBuf {
        path.with_extension("tmp")
    }

    /// ファイルからアドレス帳を読み込む（同期処理）
    fn load_sync(path: &str) -> Result<AddressBookJson> {
        let path = Self::expand(path);

        if !path.exists() {
            info!(
                "No existing address book at {}, starting empty",
                path.display()
            );
            return Ok(AddressBookJson {
                version: FORMAT_VERSION,
                contacts: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path).context("Failed to read address book file")?;

        let book: AddressBookJson =
            serde_json::from_str(&content).context("Failed to parse address book JSON")?;

        if book.version != FORMAT_VERSION {
            bail!(
                "Unsupported address book format version {} (expected {})",
                book.version,
                FORMAT_VERSION
            );
        }

        info!("Loaded address book: {} contacts", book.contacts.len());

        Ok(book)
    }

    /// ファイルにアドレス帳を保存する（同期処理）
    fn save_sync(path: &str, book: &AddressBookJson) -> Result<()> {
        let path = Self::expand(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create address book directory")?;
        }

        let json = serde_json::to_string_pretty(book).context("Failed to serialize address book")?;

        // 一時ファイルに書いてから置き換える（書き込み途中で壊れたファイルを残さない）
        let tmp_path = Self::temp_path(&path);
        fs::write(&tmp_path, json).context("Failed to write temporary address book file")?;
        fs::rename(&tmp_path, &path).context("Failed to replace address book file")?;

        info!(
            "Saved address book: {} contacts to {}",
            book.contacts.len(),
            path.display()
        );

        Ok(())
    }

    /// JSON形式からDomain形式に変換
    ///
    /// 各フィールドはドメインの検証を通す
    fn to_domain_book(json_book: AddressBookJson) -> Result<AddressBook> {
        let mut book = AddressBook::new();

        for contact in json_book.contacts {
            let mut record = Record::new(contact.name.as_str())
                .with_context(|| format!("Invalid contact name: {:?}", contact.name))?;
            for phone in &contact.phones {
                record
                    .add_phone(phone)
                    .with_context(|| format!("Invalid phone for {}: {}", contact.name, phone))?;
            }
            if let Some(birthday) = &contact.birthday {
                record.add_birthday(birthday).with_context(|| {
                    format!("Invalid birthday for {}: {}", contact.name, birthday)
                })?;
            }
            book.add_record(record);
        }

        Ok(book)
    }

    /// Domain形式からJSON形式に変換
    fn from_domain_book(book: &AddressBook) -> AddressBookJson {
        AddressBookJson {
            version: FORMAT_VERSION,
            contacts: book
                .all_records()
                .map(|record| RecordJson {
                    name: record.name().to_string(),
                    phones: record.phones().iter().map(ToString::to_string).collect(),
                    birthday: record.birthday().map(ToString::to_string),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn load(&self, path: &str) -> Result<AddressBook> {
        let path = path.to_string();
        let json_book = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Self::to_domain_book(json_book)
    }

    async fn save(&self, path: &str, book: &AddressBook) -> Result<()> {
        let path = path.to_string();
        let json_book = Self::from_domain_book(book);
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &json_book))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }
}

impl Default for JsonBookRepository {
    fn default() -> Self {
        Self::new()
    }
}
