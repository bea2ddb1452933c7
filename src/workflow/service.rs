/// ワークフローが依存する外部サービスの抽象
///
/// 調停者はこのトレイト越しにリモートサービスを呼び出します。
/// 本番実装は api 層の reqwest ベースのアダプタ、
/// テストではフェイク実装を注入します。
use crate::api::error::InfraError;
use crate::api::types::MatchReport;
use async_trait::async_trait;

/// 抽出サービス（POST /upload）の抽象
#[async_trait(?Send)]
pub trait ExtractionService {
    /// PDFのバイト列を送信し、抽出済みテキストを取得する
    async fn extract(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, InfraError>;
}

/// 解析サービス（POST /analyze）の抽象
#[async_trait(?Send)]
pub trait AnalysisService {
    /// レジュメと求人票のテキストから解析レポートを取得する
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<MatchReport, InfraError>;
}
