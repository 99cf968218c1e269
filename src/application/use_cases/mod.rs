//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **LoadBookUseCase**: アドレス帳の読み込み
//! - **ExecuteCommandUseCase**: 入力コマンドの実行と結果表示
//! - **SaveBookUseCase**: アドレス帳の保存

pub mod execute_command;
pub mod load_book;
pub mod save_book;
