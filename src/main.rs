mod api;
mod cli;
mod commands;
mod config;
mod domain;
mod error_severity;
mod presentation;
mod workflow;

use std::env;

use anyhow::{Context, Result};
use api::error::InfraError;
use config::APP_CONFIG;
use config::error::ConfigError;
use domain::error::DomainError;
use tracing_subscriber::EnvFilter;
use workflow::error::WorkflowError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();

    // エラー出力の形式を決めるため、グローバルフラグだけ先に見る
    let machine_output = args.iter().any(|arg| arg == "--machine");

    init_logging();

    if let Err(e) = run(&args).await {
        handle_error(e, machine_output);
    }
}

/// アプリケーションのメイン処理
async fn run(args: &[String]) -> Result<()> {
    APP_CONFIG
        .validate()
        .context("Invalid embedded configuration")?;

    cli::parse_args(args).await
}

/// 構造化ログの初期化
///
/// RUST_LOG が設定されていればそちらを優先し、
/// 未設定なら埋め込み設定の logging.level を使う。
/// --machine のstdoutを汚さないよう、ログはすべてstderrに出す。
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(APP_CONFIG.logging.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とヒントを決定する。
fn handle_error(error: anyhow::Error, machine_output: bool) {
    let exit_code = determine_exit_code(&error);
    let hint = get_error_hint(&error);

    presentation::output::output_error(&error, exit_code, hint.as_deref(), machine_output);

    std::process::exit(exit_code);
}

/// エラーチェーンから適切な終了コードを決定
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    // エラーチェーン全体を探索
    for cause in error.chain() {
        // WorkflowError の場合
        if let Some(workflow_err) = cause.downcast_ref::<WorkflowError>() {
            return workflow_err.severity().exit_code();
        }

        // DomainError の場合
        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            return domain_err.severity().exit_code();
        }

        // InfraError の場合
        if let Some(infra_err) = cause.downcast_ref::<InfraError>() {
            return infra_err.severity().exit_code();
        }

        // ConfigError の場合
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_err.severity().exit_code();
        }
    }

    // 不明なエラーの場合はデフォルトの終了コード
    1
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    for cause in error.chain() {
        // WorkflowError からヒントを取得
        if let Some(workflow_err) = cause.downcast_ref::<WorkflowError>() {
            if let Some(hint) = workflow_err.hint() {
                return Some(hint.to_string());
            }
        }

        // DomainError からヒントを取得
        if let Some(domain_err) = cause.downcast_ref::<DomainError>() {
            if let Some(hint) = domain_err.hint() {
                return Some(hint.to_string());
            }
        }

        // ConfigError からヒントを取得
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            if let Some(hint) = config_err.hint() {
                return Some(hint.to_string());
            }
        }
    }

    None
}
