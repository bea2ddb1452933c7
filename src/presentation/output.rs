/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読）または
/// 機械向け（JSON）形式で出力する責務を担います。
/// CLI使用方法の表示とエラー表示もこのモジュールが担当します。
use crate::commands::result::CommandResult;
use anyhow::Result;

/// ヘルプテキスト（単一の情報源）
const HELP_TEXT: &str = "resumatch-CLI
Match your resume against a job description from the command line

Usage:
  resumatch [--machine] <command> [args...]

Global Flags:
  --machine        - Output machine-readable JSON to stdout (for scripting)
                     Works for both success and error cases

Available commands:
  analyze --job <file|-> [--resume <file|->] [--resume-pdf <file.pdf>]
                   - Run the full matching workflow
                     --job:        Job description text (file path, or '-' for stdin)
                     --resume:     Resume text (file path, or '-' for stdin)
                     --resume-pdf: Resume as a PDF; its text is extracted remotely
                                   and replaces any pasted resume text
  extract <file.pdf>
                   - Extract plain text from a resume PDF and print it to stdout
  help             - Display this help message

Machine-Readable Output:
  --machine analyze --job jd.txt --resume resume.txt
                                 - JSON report with match_score, tailored_resume
                                   and cover_letter fields
  --machine extract resume.pdf   - JSON object with the extracted text

Error Output:
  Normal mode:   Human-readable error messages to stderr
  --machine:     JSON error object with exit_code and hint fields";

/// コマンド使用方法を表示する
///
/// CLI引数が不正な場合や、ヘルプが必要な場合に呼び出されます。
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// # Arguments
/// * `result` - コマンド実行結果
/// * `machine_output` - 機械可読出力フラグ
///
/// # Output
/// * `machine_output = false`: 人間向けの詳細メッセージ（stderr、抽出テキストのみstdout）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        output_machine_readable(result)?;
    } else {
        output_human_readable(result)?;
    }

    Ok(())
}

/// 人間向けの詳細メッセージを出力（stderr）
///
/// ユーザーが理解しやすい形式でコマンド結果を表示します。
/// stdoutはパイプライン用に予約され、抽出テキストだけがそこに流れます。
fn output_human_readable(result: &CommandResult) -> Result<()> {
    match result {
        CommandResult::Analyze(r) => {
            eprintln!();
            eprintln!("Analysis completed!");
            eprintln!("---");
            eprintln!("Match Score: {}%", r.match_score);
            if let Some(path) = &r.extracted_from {
                eprintln!("Resume Source: extracted from {}", path);
            }
            eprintln!(
                "Input: {} resume character(s), {} job description character(s)",
                r.resume_chars, r.job_chars
            );
            eprintln!();
            eprintln!("Tailored Resume:");
            eprintln!("----------------");
            eprintln!("{}", r.tailored_resume);
            eprintln!();
            eprintln!("Cover Letter:");
            eprintln!("-------------");
            eprintln!("{}", r.cover_letter);
            eprintln!("---");
        }
        CommandResult::Extract(r) => {
            eprintln!(
                "Extracted {} character(s) from {} ({} bytes)",
                r.char_count, r.file_path, r.file_size
            );

            // 抽出テキストはパイプで使えるようstdoutへ
            println!("{}", r.extracted_text);
        }
        CommandResult::Help => {
            eprintln!("{}", HELP_TEXT);
        }
    }

    Ok(())
}

/// 機械可読JSONを出力（stdout）
///
/// スクリプトやパイプライン処理のために、
/// コマンド結果を構造化されたJSON形式で出力します。
fn output_machine_readable(result: &CommandResult) -> Result<()> {
    let json = match result {
        CommandResult::Analyze(r) => {
            serde_json::json!({
                "success": true,
                "command": "analyze",
                "match_score": r.match_score,
                "tailored_resume": r.tailored_resume,
                "cover_letter": r.cover_letter,
                "resume_chars": r.resume_chars,
                "job_chars": r.job_chars,
                "extracted_from": r.extracted_from
            })
        }
        CommandResult::Extract(r) => {
            serde_json::json!({
                "success": true,
                "command": "extract",
                "file_path": r.file_path,
                "file_size": r.file_size,
                "char_count": r.char_count,
                "extracted_text": r.extracted_text
            })
        }
        CommandResult::Help => {
            serde_json::json!({
                "success": true,
                "command": "help"
            })
        }
    };

    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}

/// エラーを適切な形式で出力する
///
/// # Arguments
/// * `error` - 集約されたエラー
/// * `exit_code` - 決定済みの終了コード
/// * `hint` - ユーザー向けヒント（あれば）
/// * `machine_output` - 機械可読出力フラグ
pub fn output_error(
    error: &anyhow::Error,
    exit_code: i32,
    hint: Option<&str>,
    machine_output: bool,
) {
    if machine_output {
        let causes: Vec<String> = error.chain().skip(1).map(|cause| cause.to_string()).collect();
        let json = serde_json::json!({
            "success": false,
            "error": error.to_string(),
            "causes": causes,
            "exit_code": exit_code,
            "hint": hint
        });

        println!("{}", json);
        return;
    }

    // エラーメッセージのヘッダー
    eprintln!("Error: {}", error);

    // エラーチェーンを辿って詳細を表示
    let chain: Vec<_> = error.chain().skip(1).collect();
    if !chain.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }

    // ユーザー向けのヒントを表示
    if let Some(hint) = hint {
        eprintln!("\nHint: {}", hint);
    }
}
