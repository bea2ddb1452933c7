/// プレゼンテーション層: ユーザー入力処理
///
/// ファイルパスまたはstdinからテキスト入力を取得し、
/// ワークフロー層で使用可能な形式に変換します。

use anyhow::{Context, Result};
use std::io::Read;

/// テキスト入力ソースを読み込む
///
/// `-` が指定された場合はstdinをEOFまで読む。
/// それ以外はファイルパスとして読み込む。
/// トリムや正規化は行わず、読み込んだ内容をそのまま返す。
pub fn read_text_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read text file: {}", source))
    }
}
