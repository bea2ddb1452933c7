/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層（presentation/output.rs）で
/// 人間向けと機械向けの出力フォーマットを決定する。
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Analyze(AnalyzeResult),
    Extract(ExtractResult),
    Help,
}

/// 解析コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResult {
    /// マッチスコア（契約上は0〜100）
    pub match_score: f64,
    /// 求人票に合わせて調整されたレジュメ
    pub tailored_resume: String,
    /// 生成されたカバーレター
    pub cover_letter: String,
    /// 解析に使われたレジュメテキストの文字数
    pub resume_chars: usize,
    /// 求人票テキストの文字数
    pub job_chars: usize,
    /// レジュメをPDF抽出で得た場合、その元ファイルのパス
    pub extracted_from: Option<String>,
}

/// 抽出コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResult {
    /// 抽出元ファイルのパス
    pub file_path: String,
    /// ファイルサイズ（bytes）
    pub file_size: u64,
    /// 抽出テキストの文字数
    pub char_count: usize,
    /// 抽出されたテキスト
    pub extracted_text: String,
}
