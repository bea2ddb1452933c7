/// ワークフロー層のエラー定義
///
/// 調停者が返すエラーを構造化して定義。
/// リモート呼び出しの失敗は失敗した工程（抽出/解析）を保持したまま
/// InfraError を #[source] で連鎖させる。
use crate::api::error::InfraError;
use crate::domain::error::DomainError;
use crate::error_severity::ErrorSeverity;
use crate::workflow::coordinator::Stage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkflowError {
    /// 別の操作が実行中（同時実行は拒否する）
    #[error("workflow is busy: {running} is still in flight")]
    Busy {
        running: Stage,
    },

    /// 入力検証エラー（リモート呼び出し前に失敗）
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// 抽出工程の失敗
    #[error("resume extraction failed")]
    Extraction(#[source] InfraError),

    /// 解析工程の失敗
    #[error("resume analysis failed")]
    Analysis(#[source] InfraError),
}

impl WorkflowError {
    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Busy { .. } => ErrorSeverity::UserError,
            Self::Validation(domain_err) => domain_err.severity(),
            Self::Extraction(infra_err) => infra_err.severity(),
            Self::Analysis(infra_err) => infra_err.severity(),
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Busy { .. } => {
                Some("Wait for the current operation to finish, then try again.")
            }
            Self::Validation(domain_err) => domain_err.hint(),
            Self::Extraction(_) | Self::Analysis(_) => Some(
                "Check that the resumatch backend is running and reachable at the configured endpoint.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_is_user_error() {
        let error = WorkflowError::Busy {
            running: Stage::Analyze,
        };
        assert_eq!(error.severity(), ErrorSeverity::UserError);
        assert!(error.to_string().contains("analyze"));
    }

    #[test]
    fn test_validation_keeps_domain_severity() {
        let error = WorkflowError::Validation(DomainError::MissingResumeText);
        assert_eq!(error.severity(), ErrorSeverity::UserError);
        assert!(error.hint().is_some());
    }

    #[test]
    fn test_remote_failure_is_system_error() {
        let error = WorkflowError::Analysis(InfraError::network("connection refused"));
        assert_eq!(error.severity(), ErrorSeverity::SystemError);
    }
}
