use std::io;
/// インフラ層のエラー定義
///
/// 外部システム（ファイルシステム、ネットワーク、API）との
/// やり取りで発生するエラーを構造化して定義。
/// HTTPステータス起因の失敗とトランスポート起因の失敗を区別する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    /// ネットワークエラー
    #[error("network error: {message}")]
    Network {
        message: String,
    },

    /// API通信エラー（非2xxレスポンス）
    #[error("API error: {endpoint} - {message}")]
    Api {
        endpoint: String,
        message: String,
        status_code: Option<u16>,
    },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// その他のI/Oエラー
    #[error("I/O error")]
    Io(#[from] io::Error),
}

impl InfraError {
    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// API通信エラーを作成
    pub fn api(
        endpoint: impl Into<String>,
        message: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code,
        }
    }

    /// タイムアウトエラーを作成
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::SystemError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status_code() {
        let error = InfraError::api("/analyze", "Internal Server Error", Some(500));
        assert!(error.to_string().contains("/analyze"));
        match error {
            InfraError::Api { status_code, .. } => assert_eq!(status_code, Some(500)),
            _ => panic!("expected Api variant"),
        }
    }

    #[test]
    fn test_severity_is_system_error() {
        assert_eq!(
            InfraError::network("down").severity(),
            ErrorSeverity::SystemError
        );
        assert_eq!(
            InfraError::timeout("POST /upload").severity(),
            ErrorSeverity::SystemError
        );
    }
}
