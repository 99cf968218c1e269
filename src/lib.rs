//! # Assistant Bot
//!
//! 連絡先（名前・電話番号・誕生日）を管理し、直近の誕生日を知らせる対話型CLI
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 連絡先・アドレス帳・誕生日計算（I/Oなし）
//! - **Application層**: コマンド実行、読み込み・保存のユースケース
//! - **Adapter層**: JSONファイル永続化、コンソール出力、設定ファイル
//! - **Driver層**: CLI引数、対話セッション、依存性注入

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
