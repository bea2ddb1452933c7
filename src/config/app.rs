/// アプリケーション設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません。

use crate::config::error::ConfigError;
use serde::Deserialize;
use std::sync::LazyLock;

/// ビルド時に埋め込まれたグローバル設定
///
/// # Panics
/// 埋め込み config.toml のパースに失敗した場合はパニックします。
/// これはビルド時設定なので、実行時エラーではなくビルドの欠陥として扱います。
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::load()
        .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
});

/// アプリケーション全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// 抽出・解析バックエンドのベースURL
    pub endpoint: String,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,
}

/// アップロード関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// アップロード可能な最大ファイルサイズ (バイト)
    pub max_file_size: u64,

    /// 対応するレジュメフォーマット
    pub supported_formats: Vec<String>,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// ログレベル (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    pub fn load() -> Result<Self, ConfigError> {
        const CONFIG_STR: &str = include_str!("../../config.toml");
        Self::from_toml(CONFIG_STR)
    }

    /// TOML文字列から設定をパースする
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::ParseError {
            context: "embedded config.toml".to_string(),
            source: e,
        })
    }

    /// 設定値の妥当性を検証する
    ///
    /// 起動時に一度呼ばれる。パースは通るが意味的に不正な値を弾く。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.endpoint.is_empty() {
            return Err(ConfigError::validation("api.endpoint must not be empty"));
        }
        if !self.api.endpoint.starts_with("http://") && !self.api.endpoint.starts_with("https://") {
            return Err(ConfigError::validation(
                "api.endpoint must start with http:// or https://",
            ));
        }
        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "api.timeout_seconds must be greater than 0",
            ));
        }
        if self.upload.max_file_size == 0 {
            return Err(ConfigError::validation(
                "upload.max_file_size must be greater than 0",
            ));
        }
        if self.upload.supported_formats.is_empty() {
            return Err(ConfigError::validation(
                "upload.supported_formats must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        // ビルド時設定が正しく読み込まれることを確認
        let config = AppConfig::load().expect("embedded config should parse");
        assert_eq!(config.api.endpoint, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(!config.upload.supported_formats.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let result = AppConfig::from_toml("not valid toml [");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let raw = r#"
            [api]
            endpoint = "http://localhost:8000"
            timeout_seconds = 0

            [upload]
            max_file_size = 1048576
            supported_formats = ["pdf"]

            [logging]
            level = "info"
        "#;

        let config = AppConfig::from_toml(raw).expect("should parse");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let raw = r#"
            [api]
            endpoint = "localhost:8000"
            timeout_seconds = 30

            [upload]
            max_file_size = 1048576
            supported_formats = ["pdf"]

            [logging]
            level = "info"
        "#;

        let config = AppConfig::from_toml(raw).expect("should parse");
        assert!(config.validate().is_err());
    }
}
