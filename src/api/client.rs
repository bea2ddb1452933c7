/// HTTPクライアント
///
/// 抽出・解析バックエンドとの通信を担当するHTTPクライアント。
/// タイムアウトとエラーハンドリングを含みます。
use crate::api::error::InfraError;
use crate::config::APP_CONFIG;
use reqwest::multipart;
use reqwest::{Client, Response};
use std::time::Duration;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, InfraError>;

/// APIクライアント
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "http://localhost:8000"）
    ///
    /// # Returns
    /// 設定済みのAPIクライアント
    pub fn new(base_url: String) -> ApiResult<Self> {
        let timeout = Duration::from_secs(APP_CONFIG.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InfraError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// 埋め込み設定のエンドポイントを使うクライアントを作成
    pub fn production() -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint.to_string())
    }

    /// JSONボディのPOSTリクエストを送信
    ///
    /// # Arguments
    /// * `endpoint` - エンドポイントパス（例: "/analyze"）
    /// * `body` - リクエストボディ（JSON）
    pub async fn post<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> ApiResult<Response> {
        let url = self.build_url(endpoint);
        let request = self.client.post(&url).json(body);

        Self::send_with_error_handling(request, endpoint, "POST").await
    }

    /// multipartボディのPOSTリクエストを送信（ファイルアップロード用）
    ///
    /// # Arguments
    /// * `endpoint` - エンドポイントパス（例: "/upload"）
    /// * `field` - multipartのフィールド名
    /// * `file_name` - アップロードするファイル名
    /// * `bytes` - ファイルの中身（バイト列）
    pub async fn post_multipart(
        &self,
        endpoint: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<Response> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(|e| InfraError::network(format!("Failed to build multipart body: {}", e)))?;
        let form = multipart::Form::new().part(field.to_string(), part);

        let url = self.build_url(endpoint);
        let request = self.client.post(&url).multipart(form);

        Self::send_with_error_handling(request, endpoint, "POST").await
    }

    /// URLを構築
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// リクエストを送信し、エラーハンドリングを行う
    async fn send_with_error_handling(
        request: reqwest::RequestBuilder,
        endpoint: &str,
        method: &str,
    ) -> ApiResult<Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                InfraError::timeout(format!("{} {}", method, endpoint))
            } else if e.is_connect() {
                InfraError::network(format!("Connection failed for {} {}: {}", method, endpoint, e))
            } else {
                InfraError::network(format!("Request failed for {} {}: {}", method, endpoint, e))
            }
        })
    }

    /// レスポンスをチェックしてエラーを返す
    ///
    /// 非2xxの場合、ボディはJSONでもプレーンテキストでも
    /// そのまま生テキストとして取り込む。
    ///
    /// # Arguments
    /// * `response` - HTTPレスポンス
    /// * `endpoint` - エンドポイント名（エラーメッセージ用）
    pub async fn check_response(
        response: Response,
        endpoint: &str,
    ) -> ApiResult<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        Err(InfraError::api(endpoint, error_body, Some(status_code)))
    }

    /// JSONレスポンスをデシリアライズ
    pub async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> ApiResult<T> {
        response.json().await.map_err(|e| {
            InfraError::network(format!("Failed to parse JSON response: {}", e))
        })
    }
}
