use std::path::PathBuf;
use std::{fmt, io};

/// 通知の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// フォルダ読み込みの失敗
#[derive(thiserror::Error, Debug)]
pub enum ListingError {
    /// フォルダが存在しない、またはディレクトリではない
    #[error("folder not found: {0}")]
    NotFound(PathBuf),

    /// 読み込み中の I/O エラー
    #[error("I/O error while reading {0}")]
    Io(PathBuf, #[source] io::Error),
}

/// 一括リネームの失敗。バッチはその時点で中断される。
#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    #[error("Please select at least one file.")]
    NothingSelected,

    #[error("You can't use '{0}' in the file name")]
    InvalidCharacter(char),

    /// 置換対象を含むファイルが無い。`selected` は選択数（文言の単複に使う）
    #[error("{}", no_match_message(.selected))]
    NoMatch { selected: usize },

    /// 新しい名前が既存ファイル、またはこのバッチで付けた名前と衝突した
    #[error("A file named '{}' already exists. {}", .name, renamed_so_far(.renamed))]
    Collision { name: String, renamed: usize },

    /// バッチ開始時にフォルダの内容を読めなかった（リネームは未実行）
    #[error("Could not read folder {}. Error: {}", .folder.display(), .source)]
    FolderRead {
        folder: PathBuf,
        #[source]
        source: io::Error,
    },

    /// OS レベルのリネーム失敗
    #[error("Failed to rename {} to {}. Error: {}", .from, .to, .source)]
    Filesystem {
        from: String,
        to: String,
        renamed: usize,
        #[source]
        source: io::Error,
    },
}

fn no_match_message(selected: &usize) -> &'static str {
    if *selected == 1 {
        "No file name matches your input."
    } else {
        "No file names match your input. Nothing was renamed."
    }
}

fn renamed_so_far(renamed: &usize) -> String {
    match *renamed {
        0 => "Nothing was renamed.".to_string(),
        1 => "1 file had already been renamed.".to_string(),
        n => format!("{} files had already been renamed.", n),
    }
}

impl RenameError {
    pub fn severity(&self) -> Severity {
        match self {
            RenameError::Filesystem { .. } | RenameError::FolderRead { .. } => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// 中断までに実際にリネームされた件数
    pub fn renamed(&self) -> usize {
        match self {
            RenameError::Collision { renamed, .. } | RenameError::Filesystem { renamed, .. } => {
                *renamed
            }
            _ => 0,
        }
    }

    /// ダイアログのタイトル
    pub fn title(&self) -> &'static str {
        match self {
            RenameError::NothingSelected => "Nothing selected!",
            RenameError::InvalidCharacter(_) => "Invalid character",
            RenameError::NoMatch { .. } => "Not found",
            RenameError::Collision { .. } => "Name already exists",
            RenameError::Filesystem { .. } | RenameError::FolderRead { .. } => "Error",
        }
    }
}
