/// ワークフロー層モジュール
///
/// 入力状態の管理と、抽出・解析という2つのリモート呼び出しの
/// 直列化を担う調停レイヤーです。
///
/// サービス実装（api層）は値とエラーを返すだけで、
/// 共有状態の変更はすべて調停者 `MatchWorkflow` が行います。
/// この構造により、コントローラ間の競合は設計上発生しません。
pub mod coordinator;
pub mod error;
pub mod input;
pub mod service;

pub use coordinator::MatchWorkflow;

#[allow(unused_imports)]
pub use coordinator::{Stage, WorkflowState};
