//! # Book Repository Trait
//!
//! アドレス帳の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::address_book::AddressBook;

/// アドレス帳リポジトリ
///
/// アドレス帳全体の読み込みと保存を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// アドレス帳を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 保存先ファイルのパス
    ///
    /// # Returns
    ///
    /// 保存済みのアドレス帳。ファイルが存在しない場合は空のアドレス帳
    ///
    /// # Errors
    ///
    /// ファイルの読み込みや内容の解釈に失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> Result<AddressBook>;

    /// アドレス帳を保存する
    ///
    /// # Arguments
    ///
    /// * `path` - 保存先ファイルのパス
    /// * `book` - 保存するアドレス帳
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, book: &AddressBook) -> Result<()>;
}
