use std::fmt;
use std::str::FromStr;

/// ファイル名に使えない文字
pub const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// 大文字小文字変換の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    None,
    Lower,
    Upper,
    Title,
}

impl CaseMode {
    pub const ALL: [CaseMode; 4] = [CaseMode::None, CaseMode::Lower, CaseMode::Upper, CaseMode::Title];

    pub fn label(self) -> &'static str {
        match self {
            CaseMode::None => "None",
            CaseMode::Lower => "Lowercase",
            CaseMode::Upper => "Uppercase",
            CaseMode::Title => "Titlecase",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            CaseMode::None => text.to_string(),
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Title => title_case(text),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CaseMode::None => "none",
            CaseMode::Lower => "lowercase",
            CaseMode::Upper => "uppercase",
            CaseMode::Title => "titlecase",
        };
        f.write_str(s)
    }
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(CaseMode::None),
            "lower" | "lowercase" => Ok(CaseMode::Lower),
            "upper" | "uppercase" => Ok(CaseMode::Upper),
            "title" | "titlecase" => Ok(CaseMode::Title),
            other => Err(format!("unknown case mode: {}", other)),
        }
    }
}

/// UI から渡される変換パラメータのスナップショット
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformParams {
    pub replace_from: String,
    pub replace_to: String,
    pub case_mode: CaseMode,
    pub prefix: String,
    pub suffix: String,
}

/// ファイル名を (stem, 拡張子) に分ける。拡張子は最後の `.` 以降（`.` を含む）。
/// 先頭のドットだけを持つ名前（`.bashrc` など）は拡張子なしとして扱う。
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// 空白区切りの各単語の先頭を大文字に、残りを小文字にする
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// 最初に見つかった使用禁止文字を返す（左から走査）
pub fn find_invalid_character(text: &str) -> Option<char> {
    text.chars().find(|c| FORBIDDEN_CHARS.contains(c))
}

/// 変換後のファイル名を計算する。
///
/// 大文字小文字変換 → 置換 → 接頭辞/接尾辞の順で stem にだけ適用し、
/// 拡張子はそのまま付け直す。プレビューと実際のリネームはどちらもこの関数を使う。
pub fn preview(original_name: &str, params: &TransformParams) -> String {
    let (stem, ext) = split_name(original_name);
    let mut stem = params.case_mode.apply(stem);
    if !params.replace_from.is_empty() {
        stem = stem.replace(&params.replace_from, &params.replace_to);
    }
    format!("{}{}{}{}", params.prefix, stem, params.suffix, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TransformParams {
        TransformParams::default()
    }

    #[test]
    fn split_uses_last_dot() {
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_name("README"), ("README", ""));
        assert_eq!(split_name(".bashrc"), (".bashrc", ""));
        assert_eq!(split_name("..hidden.txt"), ("..hidden", ".txt"));
        assert_eq!(split_name("trailing."), ("trailing", "."));
    }

    #[test]
    fn default_params_are_identity() {
        assert_eq!(preview("Report.TXT", &params()), "Report.TXT");
    }

    #[test]
    fn case_conversion_keeps_extension() {
        let mut p = params();
        p.case_mode = CaseMode::Lower;
        assert_eq!(preview("Report.TXT", &p), "report.TXT");
        p.case_mode = CaseMode::Upper;
        assert_eq!(preview("notes.txt", &p), "NOTES.txt");
    }

    #[test]
    fn title_case_is_whitespace_delimited() {
        assert_eq!(title_case("hELLO wORLD  again"), "Hello World  Again");
        assert_eq!(title_case("my_file-name"), "My_file-name");
    }

    #[test]
    fn replace_runs_after_case_conversion() {
        let mut p = params();
        p.case_mode = CaseMode::Lower;
        p.replace_from = "a".to_string();
        p.replace_to = "o".to_string();
        assert_eq!(preview("BANANA.md", &p), "bonono.md");
    }

    #[test]
    fn empty_replace_from_is_a_no_op() {
        let mut p = params();
        p.replace_to = "x".to_string();
        assert_eq!(preview("abc.txt", &p), "abc.txt");
    }

    #[test]
    fn replace_never_touches_extension() {
        let mut p = params();
        p.replace_from = "txt".to_string();
        p.replace_to = "md".to_string();
        assert_eq!(preview("txt_notes.txt", &p), "md_notes.txt");
    }

    #[test]
    fn prefix_and_suffix_wrap_stem() {
        let mut p = params();
        p.prefix = "IMG_".to_string();
        p.suffix = "_v2".to_string();
        assert_eq!(preview("vacation.jpg", &p), "IMG_vacation_v2.jpg");
    }

    #[test]
    fn invalid_character_reports_first_from_left() {
        assert_eq!(find_invalid_character("ok_name"), None);
        assert_eq!(find_invalid_character("a|b<c"), Some('|'));
        assert_eq!(find_invalid_character("x*?"), Some('*'));
    }

    #[test]
    fn case_mode_parses_both_spellings() {
        assert_eq!("lower".parse::<CaseMode>(), Ok(CaseMode::Lower));
        assert_eq!("Titlecase".parse::<CaseMode>(), Ok(CaseMode::Title));
        assert!("camel".parse::<CaseMode>().is_err());
    }
}
