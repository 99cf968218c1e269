//! # Save Book Use Case
//!
//! アドレス帳保存ユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::domain::entities::address_book::AddressBook;
use crate::domain::repositories::book_repository::BookRepository;

/// アドレス帳保存ユースケース
pub struct SaveBookUseCase<R: BookRepository> {
    book_repository: Arc<R>,
}

impl<R: BookRepository> SaveBookUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `book_repository` - アドレス帳リポジトリ
    pub fn new(book_repository: Arc<R>) -> Self {
        Self { book_repository }
    }

    /// アドレス帳を保存する
    ///
    /// # Arguments
    ///
    /// * `book_path` - 保存先ファイルのパス
    /// * `book` - 保存するアドレス帳
    ///
    /// # Errors
    ///
    /// 書き込みに失敗した場合にエラーを返す
    pub async fn execute(&self, book_path: &str, book: &AddressBook) -> Result<()> {
        self.book_repository.save(book_path, book).await
    }
}
