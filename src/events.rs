use druid::Selector;

/// 行クリック時の修飾キー
#[derive(Clone, Debug)]
pub struct RowClick {
    pub name: String,
    pub ctrl: bool,
    pub shift: bool,
}

// 一覧・入力欄からルートのコントローラへ送るコマンド
pub const ROW_CLICKED: Selector<RowClick> = Selector::new("row_clicked");
pub const ROW_DRAGGED: Selector<String> = Selector::new("row_dragged");
pub const LIST_BACKGROUND_CLICKED: Selector<()> = Selector::new("list_background_clicked");
pub const TEXT_FOCUS_CHANGED: Selector<bool> = Selector::new("text_focus_changed");
pub const PREVIEW_REQUEST: Selector<()> = Selector::new("preview_request");
