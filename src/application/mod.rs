//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層のエンティティとサービスを組み合わせてビジネスフローを実現
//! - Repository trait と `UserView` に依存（実装には依存しない）
//! - エラーをユーザー向けメッセージに変換する境界
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **error**: コマンドエラー
//! - **use_cases**: ユースケース
//! - **view**: 表示先の抽象化

pub mod dto;
pub mod error;
pub mod use_cases;
pub mod view;
