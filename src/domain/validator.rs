/// ドメインサービス: ファイルバリデーション
///
/// 抽出に渡すレジュメPDFを検証する。
/// ドメイン層の責務として、バイト列を読み込む前にビジネスルールを適用する。
///
/// 設定値（最大ファイルサイズ、サポート形式）はAPP_CONFIGから取得します。
use crate::config::APP_CONFIG;
use crate::domain::error::DomainError;
use std::path::Path;

/// ファイルのバリデーション結果
pub struct ValidationResult {
    pub path: String,
    pub size: u64,
    pub extension: String,
}

/// レジュメPDFをバリデーションする
///
/// # エラー
/// - ファイルが存在しない
/// - ディレクトリが指定された
/// - ファイルが空
/// - サポートされていない形式
/// - ファイルサイズが制限を超過
pub fn validate_resume_file(file_path: &str) -> Result<ValidationResult, DomainError> {
    let path = Path::new(file_path);

    // 存在確認
    if !path.exists() {
        return Err(DomainError::FileNotFound {
            path: file_path.to_string(),
        });
    }

    // メタデータ取得（InfraErrorに変換せず、ここではDomainErrorとして扱う）
    let metadata = std::fs::metadata(path).map_err(|_| DomainError::FileNotFound {
        path: file_path.to_string(),
    })?;

    // ディレクトリチェック
    if metadata.is_dir() {
        return Err(DomainError::NotAFile {
            path: file_path.to_string(),
        });
    }

    // 空ファイルチェック
    let size = metadata.len();
    if size == 0 {
        return Err(DomainError::EmptyFile {
            path: file_path.to_string(),
        });
    }

    // ファイルサイズチェック（APP_CONFIGから設定値を取得）
    let max_file_size = APP_CONFIG.upload.max_file_size;
    if size > max_file_size {
        return Err(DomainError::FileTooLarge {
            size,
            max: max_file_size,
        });
    }

    // 拡張子チェック（APP_CONFIGから設定値を取得）
    let supported_formats = &APP_CONFIG.upload.supported_formats;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .ok_or_else(|| DomainError::InvalidFormat {
            path: file_path.to_string(),
            expected: format!("one of: {}", supported_formats.join(", ")),
            found: "no extension".to_string(),
        })?;

    if !supported_formats.iter().any(|format| format == &extension) {
        return Err(DomainError::InvalidFormat {
            path: file_path.to_string(),
            expected: format!("one of: {}", supported_formats.join(", ")),
            found: extension.clone(),
        });
    }

    Ok(ValidationResult {
        path: file_path.to_string(),
        size,
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_pdf(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_valid_pdf_passes() {
        let file = temp_pdf(b"%PDF-1.4 dummy");

        let result = validate_resume_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(result.extension, "pdf");
        assert_eq!(result.size, 14);
    }

    #[test]
    fn test_missing_file_is_rejected() {
        let result = validate_resume_file("/no/such/resume.pdf");
        assert!(matches!(result, Err(DomainError::FileNotFound { .. })));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let result = validate_resume_file(dir.path().to_str().unwrap());

        assert!(matches!(result, Err(DomainError::NotAFile { .. })));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let file = temp_pdf(b"");

        let result = validate_resume_file(file.path().to_str().unwrap());

        assert!(matches!(result, Err(DomainError::EmptyFile { .. })));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let mut file = tempfile::Builder::new()
            .suffix(".docx")
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(b"not a pdf").expect("Failed to write");

        let result = validate_resume_file(file.path().to_str().unwrap());

        assert!(matches!(result, Err(DomainError::InvalidFormat { .. })));
    }

    #[test]
    fn test_supported_formats_come_from_config() {
        // 埋め込み設定の形式リストにpdfが含まれることを確認
        let formats = &APP_CONFIG.upload.supported_formats;
        assert!(formats.iter().any(|format| format == "pdf"));
    }
}
