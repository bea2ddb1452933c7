/// 設定管理モジュール
///
/// ビルド時に config.toml から埋め込まれる静的設定を提供します。
/// 実行時に書き換わる設定は存在しません（永続化は非目標）。
///
/// # 使用例
///
/// ```rust
/// use crate::config::APP_CONFIG;
///
/// // グローバル定数として直接参照
/// let endpoint = &APP_CONFIG.api.endpoint;
/// let max_size = APP_CONFIG.upload.max_file_size;
/// ```
pub mod app;
pub mod error;

pub use app::APP_CONFIG;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_direct_access() {
        // APP_CONFIGがグローバル定数として直接アクセス可能であることを確認
        assert_eq!(APP_CONFIG.api.endpoint, "http://localhost:8000");
        assert_eq!(APP_CONFIG.api.timeout_seconds, 30);
        assert!(!APP_CONFIG.upload.supported_formats.is_empty());
    }

    #[test]
    fn test_embedded_config_is_valid() {
        // 埋め込み設定は検証を通過する
        assert!(APP_CONFIG.validate().is_ok());
    }
}
