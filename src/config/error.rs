/// Config層のエラー定義
///
/// 埋め込み設定のパースと検証に関するエラーを構造化して定義。
/// 外部エラー(toml::de::Error)の発信元を適切に保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// 設定ファイルのパースエラー
    #[error("failed to parse config file: {context}")]
    ParseError {
        context: String,
        #[source]
        source: toml::de::Error,
    },

    /// 設定の検証エラー
    #[error("configuration validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// 検証エラーを作成
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::ConfigError
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::ParseError { .. } => {
                Some("The embedded config.toml may be corrupted. Rebuild with a valid config.toml.")
            }
            Self::ValidationError { .. } => {
                Some("Review config.toml and ensure all required fields are valid, then rebuild.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_is_config_error() {
        let error = ConfigError::validation("api.endpoint must not be empty");
        assert_eq!(error.severity(), ErrorSeverity::ConfigError);
        assert_eq!(error.severity().exit_code(), 2);
    }

    #[test]
    fn test_validation_error_has_hint() {
        let error = ConfigError::validation("bad");
        assert!(error.hint().is_some());
    }
}
