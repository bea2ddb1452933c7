/// 抽出サービスのリモート実装
///
/// PDFをmultipartで抽出エンドポイントに送信し、
/// 抽出済みテキストを取得します。
use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::api::types::ExtractionResponse;
use crate::workflow::service::ExtractionService;
use async_trait::async_trait;

/// 抽出エンドポイントのパス
const EXTRACT_ENDPOINT: &str = "/upload";

/// reqwestベースの抽出サービス
pub struct RemoteExtractionService {
    client: ApiClient,
}

impl RemoteExtractionService {
    /// 新しい抽出サービスを作成
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ExtractionService for RemoteExtractionService {
    async fn extract(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, InfraError> {
        let response = self
            .client
            .post_multipart(EXTRACT_ENDPOINT, "file", file_name, bytes)
            .await?;
        let response = ApiClient::check_response(response, EXTRACT_ENDPOINT).await?;

        let body: ExtractionResponse = ApiClient::parse_json(response).await?;
        Ok(body.extracted_text)
    }
}
