//! # User View Port
//!
//! コマンド結果の表示先を抽象化

#[cfg(test)]
use mockall::automock;

/// メッセージの表示先
///
/// 本番ではコンソール、テストでは出力を収集する実装に差し替える
#[cfg_attr(test, automock)]
pub trait UserView {
    /// メッセージを1件表示する
    fn show(&self, message: &str);
}
