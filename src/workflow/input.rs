/// ワークフローの入力状態
///
/// レジュメテキストと求人票テキストを保持する。
/// セッション開始時に空文字列で生成され、永続化されない。
/// 変更はユーザー入力と抽出成功時の上書きの2経路のみ。

/// 入力状態のスナップショット
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// レジュメテキスト（貼り付け、またはPDF抽出結果）
    pub resume_text: String,
    /// 求人票テキスト
    pub job_description: String,
}

impl InputState {
    /// 解析を開始できる状態かを返す
    ///
    /// 両フィールドが非空であること。トリム等の正規化は行わない。
    pub fn can_analyze(&self) -> bool {
        !self.resume_text.is_empty() && !self.job_description.is_empty()
    }
}
