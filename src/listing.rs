use crate::error::ListingError;
use crate::transform::split_name;
use chrono::{Local, TimeZone};
use std::path::Path;
use std::time::UNIX_EPOCH;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 表示用の更新日時フォーマット
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// フォルダ内の 1 ファイル。読み込みのたびに作り直す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    /// 更新日時（UNIX 秒）。並べ替えはこの値で行う
    pub modified: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, modified: u64) -> Self {
        Self {
            name: name.into(),
            modified,
        }
    }

    pub fn stem(&self) -> &str {
        split_name(&self.name).0
    }

    pub fn extension(&self) -> &str {
        split_name(&self.name).1
    }

    pub fn modified_display(&self) -> String {
        format_modified(self.modified)
    }
}

/// UNIX 秒をローカル時刻の `YYYY-MM-DD HH:MM:SS` にする
pub fn format_modified(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| Local.timestamp_opt(s, 0).earliest())
        .map(|dt| dt.format(MODIFIED_FORMAT).to_string())
        .unwrap_or_default()
}

/// 指定フォルダ直下の通常ファイルを列挙する（サブフォルダは含めない）。
/// 順序はファイルシステムの列挙順。
pub fn list_files(folder: &Path) -> Result<Vec<FileEntry>, ListingError> {
    if !folder.is_dir() {
        return Err(ListingError::NotFound(folder.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(folder).to_path_buf();
            ListingError::Io(path, err.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        let metadata = entry
            .metadata()
            .map_err(|err| ListingError::Io(entry.path().to_path_buf(), err.into()))?;
        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs())
            .unwrap_or(0);
        files.push(FileEntry::new(name, modified));
    }
    debug!(folder = %folder.display(), count = files.len(), "loaded_files");
    Ok(files)
}

/// フォルダ直下の全エントリ名（ディレクトリを含む）。衝突検出の初期集合に使う。
pub fn entry_names(folder: &Path) -> Result<Vec<String>, ListingError> {
    let mut names = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(folder).to_path_buf();
            ListingError::Io(path, err.into())
        })?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_splits_stem_and_extension() {
        let entry = FileEntry::new("holiday.photo.JPG", 0);
        assert_eq!(entry.stem(), "holiday.photo");
        assert_eq!(entry.extension(), ".JPG");
    }

    #[test]
    fn modified_is_second_precision() {
        let text = format_modified(1_700_000_000);
        assert_eq!(text.len(), 19);
        assert_eq!(format_modified(1_700_000_000), format_modified(1_700_000_000));
        assert_ne!(format_modified(1_700_000_000), format_modified(1_700_000_001));
    }

    #[test]
    fn missing_folder_is_not_found() {
        let err = list_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ListingError::NotFound(_)));
    }
}
