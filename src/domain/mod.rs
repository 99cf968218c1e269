//! # Domain Layer
//!
//! 連絡先管理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - I/O を一切行わない（ファイル・コンソール・ログ出力なし）
//! - 「今日」の日付は呼び出し側から受け取る
//! - エラーは `ContactError` として返すだけで、表示は上位層が担当
//!
//! ## 構成要素
//!
//! - **entities**: エンティティとバリューオブジェクト（Record, AddressBookなど）
//! - **errors**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（誕生日リマインダー）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
