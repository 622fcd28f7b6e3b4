use crate::error::RenameError;
use crate::listing::{self, FileEntry};
use crate::transform::{find_invalid_character, preview, split_name, TransformParams};
use std::collections::HashSet;
use std::io;
use std::path::Path;
use tracing::{debug, error, info};

/// リネーム操作の種類（どのボタンが押されたか）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    /// 置換対象を stem に含むファイルだけが対象
    Replace,
    /// 選択された全ファイルが対象
    Case,
    /// 選択された全ファイルが対象
    PrefixSuffix,
}

/// リネームが使うファイルシステム操作
pub trait FileOps {
    /// フォルダ直下の全エントリ名
    fn entry_names(&self, folder: &Path) -> io::Result<Vec<String>>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// `std::fs` による実装
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileOps for RealFs {
    fn entry_names(&self, folder: &Path) -> io::Result<Vec<String>> {
        listing::entry_names(folder).map_err(io::Error::other)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// 1 件分のリネーム計画
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
}

/// リネーム前の検証を行い、バッチ（選択順）を作る。ファイルシステムには触れない。
pub fn plan(
    mode: RenameMode,
    selected: &[FileEntry],
    params: &TransformParams,
) -> Result<Vec<PlannedRename>, RenameError> {
    if selected.is_empty() {
        return Err(RenameError::NothingSelected);
    }

    let mut checked: Vec<&str> = Vec::new();
    if mode == RenameMode::Replace {
        checked.push(&params.replace_to);
    }
    checked.push(&params.prefix);
    checked.push(&params.suffix);
    if let Some(c) = checked.into_iter().find_map(find_invalid_character) {
        return Err(RenameError::InvalidCharacter(c));
    }

    let batch: Vec<&FileEntry> = match mode {
        RenameMode::Replace => selected
            .iter()
            .filter(|f| replace_hits(&f.name, params))
            .collect(),
        RenameMode::Case | RenameMode::PrefixSuffix => selected.iter().collect(),
    };
    if batch.is_empty() {
        return Err(RenameError::NoMatch {
            selected: selected.len(),
        });
    }

    Ok(batch
        .into_iter()
        .map(|f| PlannedRename {
            from: f.name.clone(),
            to: preview(&f.name, params),
        })
        .collect())
}

/// 計画を順番に実行する。衝突またはリネーム失敗で中断し、それまでの変更は戻さない。
/// 成功時はリネーム件数を返す。
pub fn execute(
    fs: &dyn FileOps,
    folder: &Path,
    batch: &[PlannedRename],
) -> Result<usize, RenameError> {
    let mut present: HashSet<String> = match fs.entry_names(folder) {
        Ok(names) => names.into_iter().collect(),
        Err(source) => {
            error!(folder = %folder.display(), %source, "entry_listing_failed");
            return Err(RenameError::FolderRead {
                folder: folder.to_path_buf(),
                source,
            });
        }
    };

    let mut renamed = 0usize;
    for item in batch {
        if item.to != item.from && present.contains(&item.to) {
            error!(name = %item.to, renamed, "collision_detected");
            return Err(RenameError::Collision {
                name: item.to.clone(),
                renamed,
            });
        }
        if let Err(source) = fs.rename(&folder.join(&item.from), &folder.join(&item.to)) {
            error!(from = %item.from, to = %item.to, %source, "rename_failed");
            return Err(RenameError::Filesystem {
                from: item.from.clone(),
                to: item.to.clone(),
                renamed,
                source,
            });
        }
        debug!(from = %item.from, to = %item.to, "renamed");
        present.remove(&item.from);
        present.insert(item.to.clone());
        renamed += 1;
    }
    info!(renamed, "rename_batch_done");
    Ok(renamed)
}

/// 検証から実行までをまとめて行う
pub fn rename_batch(
    fs: &dyn FileOps,
    folder: &Path,
    mode: RenameMode,
    selected: &[FileEntry],
    params: &TransformParams,
) -> Result<usize, RenameError> {
    let batch = plan(mode, selected, params)?;
    execute(fs, folder, &batch)
}

/// 置換が実際に起こるか。`preview` と同じく大文字小文字変換後の stem で判定する
pub fn replace_hits(name: &str, params: &TransformParams) -> bool {
    if params.replace_from.is_empty() {
        return false;
    }
    params
        .case_mode
        .apply(split_name(name).0)
        .contains(&params.replace_from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::CaseMode;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|n| FileEntry::new(*n, 0)).collect()
    }

    fn replace(from: &str, to: &str) -> TransformParams {
        TransformParams {
            replace_from: from.into(),
            replace_to: to.into(),
            ..Default::default()
        }
    }

    #[test]
    fn nothing_selected_is_rejected() {
        let err = plan(RenameMode::Case, &[], &TransformParams::default()).unwrap_err();
        assert!(matches!(err, RenameError::NothingSelected));
    }

    #[test]
    fn replace_skips_files_without_match() {
        let params = TransformParams {
            replace_from: "draft".into(),
            replace_to: "final".into(),
            ..Default::default()
        };
        let batch = plan(RenameMode::Replace, &entries(&["draft1.doc", "notes.doc"]), &params).unwrap();
        assert_eq!(
            batch,
            vec![PlannedRename {
                from: "draft1.doc".into(),
                to: "final1.doc".into()
            }]
        );
    }

    #[test]
    fn replace_does_not_match_inside_extension() {
        let params = TransformParams {
            replace_from: "doc".into(),
            replace_to: "x".into(),
            ..Default::default()
        };
        let err = plan(RenameMode::Replace, &entries(&["notes.doc"]), &params).unwrap_err();
        assert!(matches!(err, RenameError::NoMatch { selected: 1 }));
    }

    #[test]
    fn forbidden_character_in_replacement_is_rejected() {
        let params = TransformParams {
            replace_from: "a".into(),
            replace_to: "x/y".into(),
            ..Default::default()
        };
        let err = plan(RenameMode::Replace, &entries(&["a.txt"]), &params).unwrap_err();
        assert!(matches!(err, RenameError::InvalidCharacter('/')));
    }

    #[test]
    fn forbidden_character_in_prefix_is_rejected_in_every_mode() {
        let params = TransformParams {
            prefix: "x:".into(),
            ..Default::default()
        };
        let err = plan(RenameMode::PrefixSuffix, &entries(&["a.txt"]), &params).unwrap_err();
        assert!(matches!(err, RenameError::InvalidCharacter(':')));
    }

    #[test]
    fn case_mode_plans_every_selected_file() {
        let params = TransformParams {
            case_mode: CaseMode::Lower,
            ..Default::default()
        };
        let batch = plan(RenameMode::Case, &entries(&["Report.TXT", "notes.txt"]), &params).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].to, "report.TXT");
        assert_eq!(batch[1].to, "notes.txt");
    }

    #[test]
    fn replace_hits_ignores_extension() {
        assert!(replace_hits("a.txt", &replace("a", "b")));
        assert!(!replace_hits("b.txt", &replace("t", "x")));
        assert!(!replace_hits("b.txt", &replace("", "x")));
    }

    #[test]
    fn replace_membership_follows_case_conversion() {
        let lower = TransformParams {
            case_mode: CaseMode::Lower,
            ..replace("a", "x")
        };
        let batch = plan(RenameMode::Replace, &entries(&["ABC.txt"]), &lower).unwrap();
        assert_eq!(batch[0].to, preview("ABC.txt", &lower));
        assert_eq!(batch[0].to, "xbc.txt");

        let upper = TransformParams {
            case_mode: CaseMode::Upper,
            ..replace("a", "x")
        };
        let err = plan(RenameMode::Replace, &entries(&["abc.txt"]), &upper).unwrap_err();
        assert!(matches!(err, RenameError::NoMatch { selected: 1 }));
    }

    struct UnreadableFolder;

    impl FileOps for UnreadableFolder {
        fn entry_names(&self, _folder: &Path) -> io::Result<Vec<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
        }

        fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            panic!("rename must not be attempted");
        }
    }

    #[test]
    fn real_fs_reports_missing_folder_as_io_error() {
        assert!(RealFs.entry_names(Path::new("/definitely/not/here")).is_err());
    }

    #[test]
    fn unreadable_folder_is_reported_as_read_failure() {
        let batch = vec![PlannedRename {
            from: "a.txt".into(),
            to: "b.txt".into(),
        }];
        let err = execute(&UnreadableFolder, Path::new("/photos"), &batch).unwrap_err();
        assert!(matches!(err, RenameError::FolderRead { .. }));
        assert_eq!(err.renamed(), 0);
        assert_eq!(err.to_string(), "Could not read folder /photos. Error: access denied");
    }
}
