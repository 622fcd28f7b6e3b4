//! フォルダ内ファイルの一括リネーム（置換・大文字小文字変換・接頭辞/接尾辞）のコア。
//!
//! GUI から独立しており、`session::Session` がファイル一覧・選択状態・
//! プレビュー・リネーム実行をまとめて扱う。

pub mod config;
pub mod error;
pub mod listing;
pub mod rename;
pub mod selection;
pub mod session;
pub mod transform;

pub use error::{ListingError, RenameError, Severity};
pub use listing::FileEntry;
pub use transform::{CaseMode, TransformParams};
