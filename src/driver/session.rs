//! Session Orchestration
//!
//! 対話セッション全体のオーケストレーション

use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_book_repository::JsonBookRepository;
use crate::application::use_cases::execute_command::{
    ExecuteCommandUseCase, Flow, GOODBYE_MESSAGE,
};
use crate::application::use_cases::load_book::LoadBookUseCase;
use crate::application::use_cases::save_book::SaveBookUseCase;
use crate::application::view::UserView;
use crate::domain::entities::address_book::AddressBook;

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
/// 読み取れない入力行（UTF-8 でない等）に対するメッセージ
pub const INVALID_INPUT_MESSAGE: &str = "Invalid command.";

/// Assistant Session
pub struct AssistantSession {
    config: Config,
    load_use_case: LoadBookUseCase<JsonBookRepository>,
    save_use_case: SaveBookUseCase<JsonBookRepository>,
    execute_use_case: ExecuteCommandUseCase,
    fixed_today: Option<NaiveDate>,
}

impl AssistantSession {
    /// Create a new session with dependency injection
    pub fn new(config: Config) -> Self {
        let book_repo = Arc::new(JsonBookRepository::new());

        let load_use_case = LoadBookUseCase::new(book_repo.clone());
        let save_use_case = SaveBookUseCase::new(book_repo);
        let execute_use_case = ExecuteCommandUseCase::new(config.birthday_window_days);

        Self {
            config,
            load_use_case,
            save_use_case,
            execute_use_case,
            fixed_today: None,
        }
    }

    /// 誕生日計算の基準日を固定する（未指定ならローカル日付）
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.fixed_today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.fixed_today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Run the read-eval loop until `close` / `exit` or end of input
    ///
    /// アドレス帳は開始時に読み込み、終了時に保存する
    pub async fn run<I, W>(&self, input: I, prompt_out: W, view: &dyn UserView) -> Result<()>
    where
        I: BufRead,
        W: Write,
    {
        let mut book = self.load_use_case.execute(&self.config.book_path).await?;
        info!("Session started with {} contacts", book.len());

        view.show(WELCOME_MESSAGE);
        self.interact(input, prompt_out, view, &mut book);

        self.save_use_case
            .execute(&self.config.book_path, &book)
            .await?;
        info!("Session closed with {} contacts", book.len());

        Ok(())
    }

    /// 入力が尽きるか終了コマンドまでコマンドを処理する
    ///
    /// 入力の読み込みはブロッキングで行うため、ループ中はランタイムのスレッドを占有する
    /// （セッションはプロセス内で唯一のタスク）。読み書きのエラーでループを抜けても
    /// 呼び出し側の保存は必ず実行される
    pub fn interact<I, W>(
        &self,
        input: I,
        mut prompt_out: W,
        view: &dyn UserView,
        book: &mut AddressBook,
    ) where
        I: BufRead,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            if let Err(e) = write!(prompt_out, "{}", PROMPT).and_then(|_| prompt_out.flush()) {
                warn!("Failed to write prompt, closing session: {}", e);
                break;
            }

            let line = match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("Skipping unreadable input line: {}", e);
                    view.show(INVALID_INPUT_MESSAGE);
                    continue;
                }
                Some(Err(e)) => {
                    warn!("Failed to read command line, closing session: {}", e);
                    break;
                }
                None => {
                    info!("End of input, closing session");
                    view.show(GOODBYE_MESSAGE);
                    break;
                }
            };

            let flow = self
                .execute_use_case
                .execute(&line, book, view, self.today());
            if flow == Flow::Exit {
                break;
            }
        }
    }
}
