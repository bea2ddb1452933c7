use crate::commands;
use crate::presentation::output;
use anyhow::{Context, Result, bail};

/// CLI引数を解析し、適切なコマンドにディスパッチする
///
/// `--machine` はどの位置に置かれてもよいグローバルフラグとして扱い、
/// 残りを位置引数としてコマンドに渡す。
pub async fn parse_args(args: &[String]) -> Result<()> {
    let machine_output = args.iter().any(|arg| arg == "--machine");
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|arg| *arg != "--machine")
        .collect();

    if positional.is_empty() {
        output::print_usage();
        return Ok(());
    }

    let command = positional[0];

    let result = match command.as_str() {
        "analyze" => {
            commands::analyze::execute(&positional[1..])
                .await
                .context("Analyze command failed")?
        }
        "extract" => {
            let file_path = positional
                .get(1)
                .context("Please specify a PDF file path for extract command")?;
            commands::extract::execute(file_path)
                .await
                .context("Extract command failed")?
        }
        "help" => commands::help::execute().await?,
        _ => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            command
        ),
    };

    output::output_result(&result, machine_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        // 実際の env::args と同じく先頭はプログラム名
        std::iter::once("resumatch")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn test_no_command_prints_usage() {
        // 引数なしはヘルプ表示のみで成功する
        let result = parse_args(&args(&[])).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_command_fails() {
        let result = parse_args(&args(&["frobnicate"])).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Unknown command")
        );
    }

    #[tokio::test]
    async fn test_extract_requires_file_path() {
        let result = parse_args(&args(&["extract"])).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_help_command_succeeds() {
        let result = parse_args(&args(&["help"])).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_machine_flag_is_position_independent() {
        // --machine がコマンドの後ろにあっても認識される
        let result = parse_args(&args(&["help", "--machine"])).await;
        assert!(result.is_ok());
    }
}
