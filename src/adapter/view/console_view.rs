//! Console View Implementation
//!
//! 標準出力にメッセージを表示する `UserView`

use crate::application::view::UserView;

/// コンソール出力
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl UserView for ConsoleView {
    fn show(&self, message: &str) {
        println!("{}", message);
    }
}
