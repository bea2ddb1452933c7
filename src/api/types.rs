/// API通信用の型定義
///
/// 抽出・解析エンドポイントのリクエスト/レスポンスを
/// デシリアライズするための構造体を定義します。
use serde::{Deserialize, Serialize};

/// 抽出エンドポイントのレスポンス
///
/// POST /upload のレスポンス型
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionResponse {
    /// 抽出されたテキスト
    ///
    /// フィールドが欠落している場合は空文字列として扱う
    /// （デフォルト充填であり、エラーではない）。
    #[serde(default)]
    pub extracted_text: String,
}

/// 解析エンドポイントへのリクエスト
///
/// POST /analyze のリクエスト型
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    /// レジュメテキスト
    pub resume_text: String,
    /// 求人票テキスト
    pub job_description: String,
}

/// 解析レポート
///
/// POST /analyze のレスポンス型。成功した解析ごとに丸ごと置き換えられ、
/// 部分更新されることはない。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// マッチスコア（契約上は0〜100）
    pub match_score: f64,

    /// 求人票に合わせて調整されたレジュメ
    pub tailored_resume: String,

    /// 生成されたカバーレター
    pub cover_letter: String,
}

impl MatchReport {
    /// スコアが文書化された契約範囲（0〜100）に収まっているかチェック
    pub fn score_in_contract_range(&self) -> bool {
        (0.0..=100.0).contains(&self.match_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_response_deserialization() {
        let json = r#"{ "extracted_text": "John Doe, Engineer" }"#;

        let response: ExtractionResponse = serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(response.extracted_text, "John Doe, Engineer");
    }

    #[test]
    fn test_extraction_response_missing_field_defaults_to_empty() {
        // extracted_text が欠落していてもエラーにせず空文字列で埋める
        let json = r#"{}"#;

        let response: ExtractionResponse = serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(response.extracted_text, "");
    }

    #[test]
    fn test_match_report_deserialization() {
        let json = r#"{
            "match_score": 87.0,
            "tailored_resume": "Tailored version of: ...",
            "cover_letter": "Dear Hiring Manager, ..."
        }"#;

        let report: MatchReport = serde_json::from_str(json).expect("Failed to parse");

        assert_eq!(report.match_score, 87.0);
        assert!(report.score_in_contract_range());
    }

    #[test]
    fn test_score_out_of_contract_range() {
        let report = MatchReport {
            match_score: 123.4,
            tailored_resume: "".to_string(),
            cover_letter: "".to_string(),
        };

        assert!(!report.score_in_contract_range());
    }

    #[test]
    fn test_analysis_request_serialization() {
        let request = AnalysisRequest {
            resume_text: "X".to_string(),
            job_description: "Y".to_string(),
        };

        let json = serde_json::to_value(&request).expect("Failed to serialize");

        assert_eq!(json["resume_text"], "X");
        assert_eq!(json["job_description"], "Y");
    }
}
