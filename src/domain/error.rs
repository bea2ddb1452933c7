/// ドメイン層のエラー定義
///
/// ビジネスロジックに関連するエラーを構造化して定義。
/// 外部クレートのエラーは含まず、純粋にドメインの制約違反を表現する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// レジュメテキストが未入力
    #[error("resume text is empty")]
    MissingResumeText,

    /// 求人票テキストが未入力
    #[error("job description is empty")]
    MissingJobDescription,

    /// ファイルが見つからない
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// ファイル形式が無効
    #[error("invalid file format: {path} (expected: {expected}, found: {found})")]
    InvalidFormat {
        path: String,
        expected: String,
        found: String,
    },

    /// ファイルサイズが制限を超過
    #[error("file too large: {size} bytes (maximum allowed: {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    /// ファイルが空
    #[error("file is empty: {path}")]
    EmptyFile { path: String },

    /// ディレクトリが指定された（ファイルが期待される場所）
    #[error("'{path}' is a directory, not a file")]
    NotAFile { path: String },
}

impl DomainError {
    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingResumeText => ErrorSeverity::UserError,
            Self::MissingJobDescription => ErrorSeverity::UserError,
            Self::FileNotFound { .. } => ErrorSeverity::UserError,
            Self::InvalidFormat { .. } => ErrorSeverity::UserError,
            Self::FileTooLarge { .. } => ErrorSeverity::UserError,
            Self::EmptyFile { .. } => ErrorSeverity::UserError,
            Self::NotAFile { .. } => ErrorSeverity::UserError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::MissingResumeText => {
                Some("Provide resume text with --resume <file|->, or a PDF with --resume-pdf <file.pdf>.")
            }
            Self::MissingJobDescription => {
                Some("Provide the job description with --job <file|->.")
            }
            Self::FileNotFound { .. } => {
                Some("Please check the file path and ensure the file exists.")
            }
            Self::InvalidFormat { .. } => Some("Supported formats: pdf"),
            Self::FileTooLarge { .. } => {
                Some("Try exporting a smaller PDF version of the resume.")
            }
            Self::EmptyFile { .. } => Some("The file appears to be empty or corrupted."),
            Self::NotAFile { .. } => Some("Please specify a file, not a directory."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_domain_errors_are_user_errors() {
        assert_eq!(
            DomainError::MissingResumeText.severity(),
            ErrorSeverity::UserError
        );
        assert_eq!(
            DomainError::FileTooLarge { size: 2, max: 1 }.severity(),
            ErrorSeverity::UserError
        );
    }

    #[test]
    fn test_every_domain_error_has_a_hint() {
        assert!(DomainError::MissingResumeText.hint().is_some());
        assert!(DomainError::MissingJobDescription.hint().is_some());
        assert!(
            DomainError::EmptyFile {
                path: "resume.pdf".to_string()
            }
            .hint()
            .is_some()
        );
    }
}
