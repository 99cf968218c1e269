//! # Load Book Use Case
//!
//! アドレス帳読み込みユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::domain::entities::address_book::AddressBook;
use crate::domain::repositories::book_repository::BookRepository;

/// アドレス帳読み込みユースケース
///
/// 保存済みのアドレス帳を読み込む。未保存の場合は空のアドレス帳になる
pub struct LoadBookUseCase<R: BookRepository> {
    book_repository: Arc<R>,
}

impl<R: BookRepository> LoadBookUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `book_repository` - アドレス帳リポジトリ
    pub fn new(book_repository: Arc<R>) -> Self {
        Self { book_repository }
    }

    /// アドレス帳を読み込む
    ///
    /// # Arguments
    ///
    /// * `book_path` - 保存先ファイルのパス
    ///
    /// # Errors
    ///
    /// 保存済みファイルが壊れている場合などにエラーを返す
    pub async fn execute(&self, book_path: &str) -> Result<AddressBook> {
        self.book_repository.load(book_path).await
    }
}
