/// 抽出コマンド
///
/// レジュメPDFを抽出エンドポイントに送り、抽出テキストだけを取得します。
/// パイプでの利用を想定し、テキストはstdoutに出力されます。
use crate::api::analyze::RemoteAnalysisService;
use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::api::extract::RemoteExtractionService;
use crate::commands::result::{CommandResult, ExtractResult};
use crate::domain::validator;
use crate::workflow::MatchWorkflow;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// 抽出コマンドを実行する
///
/// # 引数
/// * `file_path` - 抽出対象のレジュメPDFのパス
///
/// # Returns
/// 成功時はOk(CommandResult)、失敗時はエラー
pub async fn execute(file_path: &str) -> Result<CommandResult> {
    // ドメイン層のバリデーションを実行
    // DomainError は自動的に anyhow::Error に変換される
    let validation =
        validator::validate_resume_file(file_path).context("File validation failed")?;

    let bytes = std::fs::read(file_path)
        .map_err(InfraError::Io)
        .context("Failed to read PDF file")?;

    info!(path = %validation.path, size = validation.size, "extracting resume text");

    let client = ApiClient::production().context("Failed to initialize HTTP client")?;
    let workflow = MatchWorkflow::new(
        RemoteExtractionService::new(client.clone()),
        RemoteAnalysisService::new(client),
    );

    let file_name = Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume.pdf");

    let text = workflow
        .run_extraction(file_name, bytes)
        .await
        .context("Extraction step failed")?;

    Ok(CommandResult::Extract(ExtractResult {
        file_path: validation.path,
        file_size: validation.size,
        char_count: text.chars().count(),
        extracted_text: text,
    }))
}
