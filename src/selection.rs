use crate::listing::FileEntry;
use std::cmp::Ordering;
use std::collections::HashSet;

/// 並べ替え可能な列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Modified,
}

impl SortColumn {
    pub fn title(self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Modified => "Date Modified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub ascending: bool,
}

/// 表示順のファイル一覧と選択状態。行の識別子はファイル名。
#[derive(Debug, Clone, Default)]
pub struct FileList {
    entries: Vec<FileEntry>,
    selected: HashSet<String>,
    anchor: Option<String>,
    sort: Option<SortState>,
    saved_selection: Option<Vec<String>>,
}

impl FileList {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    /// 表示順のエントリ
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    /// 一覧を差し替える。現在の並べ替えを掛け直し、選択は解除する。
    pub fn replace_entries(&mut self, entries: Vec<FileEntry>) {
        self.entries = entries;
        self.selected.clear();
        self.anchor = None;
        if let Some(sort) = self.sort {
            self.apply_sort(sort);
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    /// 選択中のエントリ（表示順）
    pub fn selected_entries(&self) -> Vec<FileEntry> {
        self.entries
            .iter()
            .filter(|e| self.selected.contains(&e.name))
            .cloned()
            .collect()
    }

    pub fn selected_names(&self) -> Vec<String> {
        self.selected_entries().into_iter().map(|e| e.name).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// 通常クリック: クリックした行だけを選択する
    pub fn click(&mut self, name: &str) {
        if self.index_of(name).is_none() {
            return;
        }
        self.saved_selection = None;
        self.selected.clear();
        self.selected.insert(name.to_string());
        self.anchor = Some(name.to_string());
    }

    /// Ctrl クリック: 行の選択を反転し、アンカーをその行にする
    pub fn ctrl_click(&mut self, name: &str) {
        if self.index_of(name).is_none() {
            return;
        }
        self.saved_selection = None;
        if !self.selected.remove(name) {
            self.selected.insert(name.to_string());
        }
        self.anchor = Some(name.to_string());
    }

    /// Shift クリック（ドラッグ）: アンカーからクリック行までの範囲で選択を置き換える。
    /// アンカーが無ければ通常クリックと同じ。
    pub fn shift_click(&mut self, name: &str) {
        let Some(target) = self.index_of(name) else {
            return;
        };
        let anchor = self.anchor.as_deref().and_then(|a| self.index_of(a));
        let Some(anchor) = anchor else {
            self.click(name);
            return;
        };
        let (lo, hi) = if anchor <= target {
            (anchor, target)
        } else {
            (target, anchor)
        };
        self.saved_selection = None;
        self.selected = self.entries[lo..=hi].iter().map(|e| e.name.clone()).collect();
    }

    /// 行の無い場所をクリックしたとき
    pub fn clear_selection(&mut self) {
        self.saved_selection = None;
        self.selected.clear();
    }

    pub fn select_all(&mut self) {
        self.saved_selection = None;
        self.selected = self.entries.iter().map(|e| e.name.clone()).collect();
    }

    pub fn deselect_all(&mut self) {
        self.saved_selection = None;
        self.selected.clear();
    }

    /// テキスト入力へフォーカスが移る前に選択を退避する。
    /// 退避後に選択操作があった場合、退避分は破棄される。
    pub fn snapshot_selection(&mut self) {
        self.saved_selection = Some(self.selected_names());
    }

    /// 退避した選択のうち、まだ一覧に存在するものを選択に戻す
    pub fn restore_selection(&mut self) {
        let Some(saved) = self.saved_selection.take() else {
            return;
        };
        for name in saved {
            if self.index_of(&name).is_some() {
                self.selected.insert(name);
            }
        }
    }

    /// 列見出しのクリック。新しい列なら昇順、同じ列なら向きを反転する。
    pub fn sort_by(&mut self, column: SortColumn) {
        let sort = match self.sort {
            Some(s) if s.column == column => SortState {
                column,
                ascending: !s.ascending,
            },
            _ => SortState {
                column,
                ascending: true,
            },
        };
        self.sort = Some(sort);
        self.apply_sort(sort);
    }

    fn apply_sort(&mut self, sort: SortState) {
        self.entries.sort_by(|a, b| {
            let ord = compare(sort.column, a, b);
            if sort.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    /// 見出しの表示文字列（並べ替え中の列には矢印を付ける）
    pub fn header_title(&self, column: SortColumn) -> String {
        match self.sort {
            Some(s) if s.column == column => {
                format!("{} {}", column.title(), if s.ascending { "↑" } else { "↓" })
            }
            _ => column.title().to_string(),
        }
    }
}

/// 一覧上のドラッグ。押した行と別の行に入ったときだけ範囲選択に使う。
#[derive(Debug, Clone, Default)]
pub struct RowDrag {
    pressed: Option<String>,
    last_target: Option<String>,
}

impl RowDrag {
    pub fn press(&mut self, name: &str) {
        self.pressed = Some(name.to_string());
        self.last_target = None;
    }

    pub fn release(&mut self) {
        self.pressed = None;
        self.last_target = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed.is_some()
    }

    /// ボタンを押したままポインタが行に入った。範囲を広げるべき行を返す。
    pub fn enter(&mut self, name: &str) -> Option<&str> {
        let pressed = self.pressed.as_deref()?;
        if self.last_target.as_deref() == Some(name) {
            return None;
        }
        if pressed == name && self.last_target.is_none() {
            return None;
        }
        self.last_target = Some(name.to_string());
        self.last_target.as_deref()
    }

    /// `enter` の結果を一覧に反映する。選択が変わったら true
    pub fn drag_over(&mut self, files: &mut FileList, name: &str) -> bool {
        match self.enter(name) {
            Some(target) => {
                let target = target.to_string();
                files.shift_click(&target);
                true
            }
            None => false,
        }
    }
}

fn compare(column: SortColumn, a: &FileEntry, b: &FileEntry) -> Ordering {
    match column {
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Modified => a.modified.cmp(&b.modified),
    }
}
