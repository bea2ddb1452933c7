/// 解析コマンド
///
/// レジュメ（貼り付けテキストまたはPDF）と求人票を受け取り、
/// ワークフロー一式（任意の抽出工程 + 解析工程）を実行します。
use crate::api::analyze::RemoteAnalysisService;
use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::api::extract::RemoteExtractionService;
use crate::commands::result::{AnalyzeResult, CommandResult};
use crate::domain::validator;
use crate::presentation::input;
use crate::workflow::MatchWorkflow;
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;

/// 解析コマンドの引数
struct AnalyzeArgs {
    /// 求人票テキストのソース（ファイルパスまたは '-'）
    job: String,
    /// レジュメテキストのソース（ファイルパスまたは '-'）
    resume: Option<String>,
    /// レジュメPDFのパス（指定時は抽出結果が貼り付けテキストを上書き）
    resume_pdf: Option<String>,
}

/// 解析コマンドを実行する
///
/// # 引数
/// * `args` - `analyze` 以降の位置引数
///
/// # エラー
/// このレイヤーでは anyhow::Result を返し、
/// ドメイン層・ワークフロー層・インフラ層のエラーを集約する。
pub async fn execute(args: &[&String]) -> Result<CommandResult> {
    let parsed = parse_flags(args)?;

    let client = ApiClient::production().context("Failed to initialize HTTP client")?;
    let workflow = MatchWorkflow::new(
        RemoteExtractionService::new(client.clone()),
        RemoteAnalysisService::new(client),
    );

    // 貼り付けテキストを先に設定する。PDF抽出が後から走った場合は
    // 抽出結果が丸ごと上書きする（last-write-wins）
    if let Some(source) = &parsed.resume {
        let text = input::read_text_source(source).context("Failed to read resume text")?;
        workflow.set_resume_text(text);
    }

    let job_text = input::read_text_source(&parsed.job).context("Failed to read job description")?;
    workflow.set_job_description(job_text);

    let extracted_from = match &parsed.resume_pdf {
        Some(file_path) => {
            let validation = validator::validate_resume_file(file_path)
                .context("Resume PDF validation failed")?;
            let bytes = std::fs::read(file_path)
                .map_err(InfraError::Io)
                .context("Failed to read resume PDF")?;

            info!(path = %validation.path, size = validation.size, "extracting resume text");

            workflow
                .run_extraction(&upload_file_name(file_path), bytes)
                .await
                .context("Extraction step failed")?;

            Some(validation.path)
        }
        None => None,
    };

    let report = workflow.run_analysis().await.context("Analysis step failed")?;
    let snapshot = workflow.input_snapshot();

    Ok(CommandResult::Analyze(AnalyzeResult {
        match_score: report.match_score,
        tailored_resume: report.tailored_resume,
        cover_letter: report.cover_letter,
        resume_chars: snapshot.resume_text.chars().count(),
        job_chars: snapshot.job_description.chars().count(),
        extracted_from,
    }))
}

/// analyze コマンドのフラグを解析する
fn parse_flags(args: &[&String]) -> Result<AnalyzeArgs> {
    let mut job = None;
    let mut resume = None;
    let mut resume_pdf = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--job" => {
                job = Some(
                    iter.next()
                        .context("--job requires a value (file path, or '-' for stdin)")?
                        .to_string(),
                );
            }
            "--resume" => {
                resume = Some(
                    iter.next()
                        .context("--resume requires a value (file path, or '-' for stdin)")?
                        .to_string(),
                );
            }
            "--resume-pdf" => {
                resume_pdf = Some(
                    iter.next()
                        .context("--resume-pdf requires a PDF file path")?
                        .to_string(),
                );
            }
            other => bail!(
                "Unknown argument for analyze: '{}'. Use 'help' to see usage.",
                other
            ),
        }
    }

    Ok(AnalyzeArgs {
        job: job.context("--job <file|-> is required for analyze command")?,
        resume,
        resume_pdf,
    })
}

/// multipartで送るファイル名を決める
fn upload_file_name(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume.pdf")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn refs(args: &[String]) -> Vec<&String> {
        args.iter().collect()
    }

    #[test]
    fn test_parse_flags_requires_job() {
        let args = owned(&["--resume", "resume.txt"]);
        let result = parse_flags(&refs(&args));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_flags_full_set() {
        let args = owned(&[
            "--job",
            "jd.txt",
            "--resume",
            "-",
            "--resume-pdf",
            "resume.pdf",
        ]);

        let parsed = parse_flags(&refs(&args)).unwrap();

        assert_eq!(parsed.job, "jd.txt");
        assert_eq!(parsed.resume.as_deref(), Some("-"));
        assert_eq!(parsed.resume_pdf.as_deref(), Some("resume.pdf"));
    }

    #[test]
    fn test_parse_flags_rejects_unknown_argument() {
        let args = owned(&["--job", "jd.txt", "--frobnicate"]);
        let result = parse_flags(&refs(&args));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_flags_missing_value() {
        let args = owned(&["--job"]);
        let result = parse_flags(&refs(&args));
        assert!(result.is_err());
    }

    #[test]
    fn test_upload_file_name_uses_base_name() {
        assert_eq!(upload_file_name("/tmp/dir/my_resume.pdf"), "my_resume.pdf");
        assert_eq!(upload_file_name("resume.pdf"), "resume.pdf");
    }
}
