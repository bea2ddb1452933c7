/// APIクライアントモジュール
///
/// 抽出サービス・解析サービスとのHTTP通信を担当します。
/// ワークフロー層のサービストレイトをreqwestベースで実装します。
pub mod analyze;
pub mod client;
pub mod error;
pub mod extract;
pub mod types;
