/// 解析サービスのリモート実装
///
/// レジュメと求人票のテキストをJSONで解析エンドポイントに送信し、
/// 解析レポートを取得します。
use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::api::types::{AnalysisRequest, MatchReport};
use crate::workflow::service::AnalysisService;
use async_trait::async_trait;

/// 解析エンドポイントのパス
const ANALYZE_ENDPOINT: &str = "/analyze";

/// reqwestベースの解析サービス
pub struct RemoteAnalysisService {
    client: ApiClient,
}

impl RemoteAnalysisService {
    /// 新しい解析サービスを作成
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AnalysisService for RemoteAnalysisService {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<MatchReport, InfraError> {
        let request = AnalysisRequest {
            resume_text: resume_text.to_string(),
            job_description: job_description.to_string(),
        };

        let response = self.client.post(ANALYZE_ENDPOINT, &request).await?;
        let response = ApiClient::check_response(response, ANALYZE_ENDPOINT).await?;

        // レスポンスは検証せずそのまま通す（スコア範囲は調停者が警告する）
        ApiClient::parse_json(response).await
    }
}
