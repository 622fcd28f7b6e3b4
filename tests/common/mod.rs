#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Once;
use tempfile::TempDir;

static LOGGING_INIT: Once = Once::new();

/// テスト用に tracing の出力を一度だけ設定する
pub fn setup_test_logging() {
    LOGGING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 指定した名前の空ファイルを持つ一時フォルダを作る
pub fn folder_with(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in names {
        fs::write(dir.path().join(name), name.as_bytes()).expect("Failed to create file");
    }
    dir
}

/// フォルダ直下の名前（ソート済み）
pub fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|e| e.expect("bad entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
