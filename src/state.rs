use batch_renamer::session::{PreviewRow, Session};
use batch_renamer::{CaseMode, TransformParams};
use druid::im::Vector;
use druid::{Data, Lens};
use std::cell::RefCell;
use std::rc::Rc;

/// 一覧の 1 行
#[derive(Clone, Data, Lens)]
pub struct FileRow {
    pub name: String,
    pub preview: String,
    pub modified: String,
    pub selected: bool,
    // ハイライト用の情報
    pub replace_from: String,
}

/// ラジオボタン用の大文字小文字変換
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CaseChoice(pub CaseMode);

impl Data for CaseChoice {
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}

/// アプリ全体の状態
#[derive(Clone, Data, Lens)]
pub struct AppState {
    pub folder_label: String,
    pub rows: Vector<FileRow>,
    pub name_header: String,
    pub modified_header: String,
    pub replace_from: String,
    pub replace_to: String,
    pub case_mode: CaseChoice,
    pub prefix: String,
    pub suffix: String,
    pub status_message: String,
    /// 一覧・選択・リネームの実体。表示は `sync` で rows に反映する
    #[data(ignore)]
    #[lens(ignore)]
    pub session: Rc<RefCell<Session>>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let mut state = Self {
            folder_label: String::new(),
            rows: Vector::new(),
            name_header: String::new(),
            modified_header: String::new(),
            replace_from: String::new(),
            replace_to: String::new(),
            case_mode: CaseChoice(CaseMode::None),
            prefix: String::new(),
            suffix: String::new(),
            status_message: "Ready".to_string(),
            session: Rc::new(RefCell::new(session)),
        };
        state.sync();
        state
    }

    /// 入力欄の内容
    pub fn params(&self) -> TransformParams {
        TransformParams {
            replace_from: self.replace_from.clone(),
            replace_to: self.replace_to.clone(),
            case_mode: self.case_mode.0,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }

    /// セッションの内容を表示用の状態に書き写す
    pub fn sync(&mut self) {
        let params = self.params();
        let mut session = self.session.borrow_mut();
        session.set_params(params);
        self.folder_label = session.folder_label();
        let files = session.files();
        self.name_header = files.header_title(batch_renamer::selection::SortColumn::Name);
        self.modified_header = files.header_title(batch_renamer::selection::SortColumn::Modified);
        self.rows = session
            .rows()
            .into_iter()
            .map(|row: PreviewRow| FileRow {
                name: row.name,
                preview: row.preview,
                modified: row.modified,
                selected: row.selected,
                replace_from: self.replace_from.clone(),
            })
            .collect();
    }
}
