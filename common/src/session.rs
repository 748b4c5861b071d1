//! 画面状態（選択画像・プレビュー・解析状態）
//!
//! 解析状態は1つの列挙値で持ち、結果とエラーが同時に存在しないことを型で保証する。
//! 非同期処理（プレビュー読込・解析）は開始時の [`Ticket`] を持ち回り、
//! その間に選択し直しやリセットがあれば結果を破棄する。

use crate::client::{AnalysisClient, ChatTransport};
use crate::error::{Result, VALIDATION_MESSAGE};
use crate::types::ImageSource;

/// 解析状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

impl OperationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationState::Idle => "idle",
            OperationState::Loading => "loading",
            OperationState::Succeeded(_) => "succeeded",
            OperationState::Failed(_) => "failed",
        }
    }
}

/// 結果欄に表示するパネル（常にどれか1つ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel<'a> {
    Loading,
    Error(&'a str),
    Success(&'a str),
    Placeholder { has_file: bool },
}

/// 非同期処理の開始時点の選択を表す世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
struct Selection<S> {
    file: S,
    preview: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Session<S> {
    selection: Option<Selection<S>>,
    state: OperationState,
    generation: u64,
}

impl<S> Default for Session<S> {
    fn default() -> Self {
        Self {
            selection: None,
            state: OperationState::Idle,
            generation: 0,
        }
    }
}

impl<S: ImageSource> Session<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// ファイルを選択する
    ///
    /// 以前の結果・エラーは消え、実行中の解析があればその結果は破棄される。
    /// 戻り値はプレビュー計算用のチケット。
    pub fn select_file(&mut self, file: S) -> Ticket {
        self.generation += 1;
        self.selection = Some(Selection { file, preview: None });
        self.state = OperationState::Idle;
        Ticket(self.generation)
    }

    /// プレビューを設定（古いチケットなら無視）
    pub fn set_preview(&mut self, ticket: Ticket, data_uri: String) -> bool {
        if !self.is_current(ticket) {
            log::debug!("Discarding stale preview");
            return false;
        }
        match self.selection.as_mut() {
            Some(selection) => {
                selection.preview = Some(data_uri);
                true
            }
            None => false,
        }
    }

    /// 解析を開始する
    ///
    /// 画像未選択ならエラー状態にしてNone。解析中なら何もせずNone。
    pub fn begin_analyze(&mut self) -> Option<Ticket> {
        if self.is_loading() {
            log::debug!("Analysis already in flight");
            return None;
        }
        if self.selection.is_none() {
            self.state = OperationState::Failed(VALIDATION_MESSAGE.to_string());
            return None;
        }
        self.state = OperationState::Loading;
        Some(Ticket(self.generation))
    }

    /// 解析結果を反映する（古いチケットなら破棄）
    pub fn finish_analyze(&mut self, ticket: Ticket, outcome: Result<String>) -> bool {
        if !self.is_current(ticket) || !self.is_loading() {
            log::debug!("Discarding stale analysis result");
            return false;
        }
        self.state = match outcome {
            Ok(text) => OperationState::Succeeded(text),
            Err(e) => OperationState::Failed(e.user_message().to_string()),
        };
        true
    }

    /// 開始から反映までをまとめて実行
    pub async fn analyze<T: ChatTransport>(&mut self, client: &AnalysisClient<T>) -> bool {
        let Some(ticket) = self.begin_analyze() else {
            return false;
        };
        let outcome = match self.selection.as_ref() {
            Some(selection) => client.analyze_image(&selection.file).await,
            None => return false,
        };
        self.finish_analyze(ticket, outcome)
    }

    /// すべてを初期状態に戻す
    pub fn reset(&mut self) {
        self.generation += 1;
        self.selection = None;
        self.state = OperationState::Idle;
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn selected(&self) -> Option<&S> {
        self.selection.as_ref().map(|s| &s.file)
    }

    pub fn preview(&self) -> Option<&str> {
        self.selection.as_ref().and_then(|s| s.preview.as_deref())
    }

    pub fn result(&self) -> Option<&str> {
        match &self.state {
            OperationState::Succeeded(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            OperationState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, OperationState::Loading)
    }

    pub fn can_analyze(&self) -> bool {
        self.selection.is_some() && !self.is_loading()
    }

    pub fn can_reset(&self) -> bool {
        self.selection.is_some()
    }

    pub fn panel(&self) -> Panel<'_> {
        match &self.state {
            OperationState::Loading => Panel::Loading,
            OperationState::Failed(message) => Panel::Error(message.as_str()),
            OperationState::Succeeded(text) => Panel::Success(text.as_str()),
            OperationState::Idle => Panel::Placeholder {
                has_file: self.selection.is_some(),
            },
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
