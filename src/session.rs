//! 画面側から使う状態モデル。
//!
//! ファイル一覧・選択・変換パラメータを保持し、表示用の行と通知を返す。
//! 画面（druid）はここを読み書きするだけで、ファイル操作は行わない。

use crate::error::{ListingError, RenameError, Severity};
use crate::listing::{self, FileEntry};
use crate::rename::{self, FileOps, RealFs, RenameMode};
use crate::selection::FileList;
use crate::transform::{preview, TransformParams};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 一覧表示の 1 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub name: String,
    /// 選択されていない行は空文字
    pub preview: String,
    pub modified: String,
    pub selected: bool,
}

/// 画面に出すメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(renamed: usize) -> Self {
        let message = if renamed == 1 {
            "1 file has been renamed successfully.".to_string()
        } else {
            format!("{} files have been renamed successfully.", renamed)
        };
        Self {
            severity: Severity::Info,
            title: "Success".to_string(),
            message,
        }
    }
}

impl From<&RenameError> for Notification {
    fn from(err: &RenameError) -> Self {
        Self {
            severity: err.severity(),
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<&ListingError> for Notification {
    fn from(err: &ListingError) -> Self {
        let message = match err {
            ListingError::NotFound(path) => format!("Folder not found: {}", path.display()),
            ListingError::Io(path, source) => format!("Could not read {}: {}", path.display(), source),
        };
        Self {
            severity: Severity::Error,
            title: "Error".to_string(),
            message,
        }
    }
}

pub struct Session {
    folder: Option<PathBuf>,
    files: FileList,
    params: TransformParams,
    fs: Box<dyn FileOps>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_fs(Box::new(RealFs))
    }

    pub fn with_fs(fs: Box<dyn FileOps>) -> Self {
        Self {
            folder: None,
            files: FileList::default(),
            params: TransformParams::default(),
            fs,
        }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn folder_label(&self) -> String {
        match &self.folder {
            Some(folder) => format!("Selected Folder: {}", folder.display()),
            None => "Selected Folder: ".to_string(),
        }
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileList {
        &mut self.files
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    pub fn set_params(&mut self, params: TransformParams) {
        self.params = params;
    }

    /// フォルダを開く。失敗した場合はフォルダも一覧も以前のまま。
    pub fn open_folder(&mut self, folder: impl Into<PathBuf>) -> Result<usize, ListingError> {
        let folder = folder.into();
        let entries = listing::list_files(&folder).map_err(|err| {
            warn!(folder = %folder.display(), error = %err, "folder_load_failed");
            err
        })?;
        let count = entries.len();
        info!(folder = %folder.display(), count, "folder_opened");
        self.folder = Some(folder);
        self.files.replace_entries(entries);
        Ok(count)
    }

    /// 現在のフォルダを読み直す
    pub fn refresh(&mut self) -> Result<usize, ListingError> {
        let Some(folder) = self.folder.clone() else {
            return Ok(0);
        };
        let entries = listing::list_files(&folder)?;
        let count = entries.len();
        self.files.replace_entries(entries);
        Ok(count)
    }

    /// 表示用の行（表示順）。プレビューは選択行だけ計算する。
    pub fn rows(&self) -> Vec<PreviewRow> {
        self.files
            .entries()
            .iter()
            .map(|entry| {
                let selected = self.files.is_selected(&entry.name);
                PreviewRow {
                    name: entry.name.clone(),
                    preview: if selected {
                        preview(&entry.name, &self.params)
                    } else {
                        String::new()
                    },
                    modified: entry.modified_display(),
                    selected,
                }
            })
            .collect()
    }

    pub fn selected_entries(&self) -> Vec<FileEntry> {
        self.files.selected_entries()
    }

    /// 選択中のファイルをリネームし、結果の通知を返す。
    /// ファイルシステムに触れた場合は成否に関わらず一覧を読み直す。
    pub fn rename(&mut self, mode: RenameMode) -> Notification {
        let selected = self.files.selected_entries();
        let batch = match rename::plan(mode, &selected, &self.params) {
            Ok(batch) => batch,
            Err(err) => {
                warn!(?mode, error = %err, "rename_rejected");
                return Notification::from(&err);
            }
        };
        let Some(folder) = self.folder.clone() else {
            return Notification::from(&RenameError::NothingSelected);
        };

        let result = rename::execute(self.fs.as_ref(), &folder, &batch);
        if let Err(err) = self.refresh() {
            warn!(error = %err, "refresh_after_rename_failed");
        }
        match result {
            Ok(renamed) => Notification::success(renamed),
            Err(err) => Notification::from(&err),
        }
    }
}
