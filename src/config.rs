use clap::Parser;
use std::path::PathBuf;

/// 起動時に開くフォルダを指定する環境変数
pub const FOLDER_ENV: &str = "BATCH_RENAMER_FOLDER";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// 起動オプション。設定は保存しない。
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Batch-rename the files of a folder with a live preview.")]
pub struct LaunchOptions {
    /// Folder to open on start-up
    #[arg(env = FOLDER_ENV)]
    pub initial_folder: Option<PathBuf>,

    /// tracing filter directive (e.g. "debug", "batch_renamer=trace")
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl LaunchOptions {
    /// コマンドライン引数と環境変数から読む。`--help` や不正な引数はここで終了する
    pub fn from_env() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_folder_and_log_filter() {
        let opts =
            LaunchOptions::try_parse_from(["batch-renamer", "--log-filter", "debug", "/tmp/photos"]).unwrap();
        assert_eq!(opts.initial_folder, Some(PathBuf::from("/tmp/photos")));
        assert_eq!(opts.log_filter, "debug");
    }

    #[test]
    fn flag_value_is_not_taken_as_folder() {
        let opts = LaunchOptions::try_parse_from(["batch-renamer", "--log-filter", "debug"]).unwrap();
        assert_ne!(opts.initial_folder, Some(PathBuf::from("debug")));
        assert_eq!(opts.log_filter, "debug");
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = LaunchOptions::try_parse_from(["batch-renamer", "--filter", "debug"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn too_many_folders_are_rejected() {
        assert!(LaunchOptions::try_parse_from(["batch-renamer", "/a", "/b"]).is_err());
    }
}
