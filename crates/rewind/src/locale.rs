//! User-facing text, per language.

use rewind_tictactoe::{GameStatus, MoveDescription, MoveListEntry, SortOrder};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Language for labels, status and the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    English,
    /// Korean.
    Korean,
}

impl Locale {
    /// Window title.
    pub fn title(self) -> &'static str {
        match self {
            Locale::English => "Rewind Tic-Tac-Toe",
            Locale::Korean => "되감기 틱택토",
        }
    }

    /// Title of the move-list pane.
    pub fn moves_title(self) -> &'static str {
        match self {
            Locale::English => "Moves",
            Locale::Korean => "기록",
        }
    }

    /// Title of the status pane.
    pub fn status_title(self) -> &'static str {
        match self {
            Locale::English => "Status",
            Locale::Korean => "상태",
        }
    }

    /// Key help shown in the footer.
    pub fn help(self) -> &'static str {
        match self {
            Locale::English => {
                "Click or 1-9: play | Arrows+Enter: play at cursor | Tab: move list | S: sort | Q: quit"
            }
            Locale::Korean => {
                "클릭 또는 1-9: 두기 | 방향키+Enter: 커서에 두기 | Tab: 기록 | S: 정렬 | Q: 종료"
            }
        }
    }

    /// Status line for the displayed position.
    #[instrument]
    pub fn status(self, status: &GameStatus) -> String {
        match (self, status) {
            (Locale::English, _) => status.to_string(),
            (Locale::Korean, GameStatus::InProgress { to_move }) => {
                format!("다음 플레이어: {}", to_move)
            }
            (Locale::Korean, GameStatus::Won(line)) => format!("승자: {}", line.player),
            (Locale::Korean, GameStatus::Draw) => "무승부".to_string(),
        }
    }

    /// Text of one move-list entry.
    ///
    /// The current move reads as a position indicator instead of a link.
    /// The game start keeps its link text even when current.
    #[instrument]
    pub fn move_entry(self, entry: &MoveListEntry) -> String {
        match (self, *entry.description(), *entry.is_current()) {
            (Locale::English, MoveDescription::Move { number, position }, true) => format!(
                "You are at move #{} ({}, {})",
                number,
                position.row(),
                position.col()
            ),
            (Locale::English, description, _) => description.to_string(),
            (Locale::Korean, MoveDescription::GameStart, _) => "게임 시작으로 이동".to_string(),
            (Locale::Korean, MoveDescription::Move { number, position }, true) => format!(
                "당신은 {}번째 순서({}, {})에 있습니다.",
                number,
                position.row(),
                position.col()
            ),
            (Locale::Korean, MoveDescription::Move { number, position }, false) => format!(
                "{}번째 순서로 이동 ({}, {})",
                number,
                position.row(),
                position.col()
            ),
        }
    }

    /// Label of the sort toggle: the order a press switches to.
    pub fn toggle_label(self, order: SortOrder) -> &'static str {
        match (self, order) {
            (Locale::English, SortOrder::Ascending) => "⬇ Sort descending",
            (Locale::English, SortOrder::Descending) => "⬆ Sort ascending",
            (Locale::Korean, SortOrder::Ascending) => "⬇ 내림차순 정렬",
            (Locale::Korean, SortOrder::Descending) => "⬆ 오름차순 정렬",
        }
    }
}
