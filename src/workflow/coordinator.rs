/// ワークフロー調停者
///
/// 入力状態・実行状態・解析レポートを一元管理し、
/// 抽出と解析の2つのリモート呼び出しを直列化する状態機械。
///
/// 状態遷移:
/// - `Idle --抽出開始--> Busy(Extract) --> 元の安定状態`
/// - `Idle|HasResult --解析開始--> Busy(Analyze) --> HasResult | 元の安定状態`
///
/// Busy中の新たなトリガーは同期的に拒否される（キューイングしない）。
/// キャンセルはサポートせず、実行中の呼び出しは完了まで走りきる。
use std::cell::{Cell, RefCell};

use tracing::{debug, warn};

use crate::api::types::MatchReport;
use crate::domain::error::DomainError;
use crate::workflow::error::WorkflowError;
use crate::workflow::input::InputState;
use crate::workflow::service::{AnalysisService, ExtractionService};

/// 実行中の工程
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// PDFからのテキスト抽出
    Extract,
    /// レジュメと求人票の解析
    Analyze,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extract => write!(f, "extract"),
            Self::Analyze => write!(f, "analyze"),
        }
    }
}

/// ワークフローの実行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// 待機中（レポートなし）
    Idle,
    /// 工程実行中
    Busy(Stage),
    /// 解析レポート保持中（新たな解析で再突入可能）
    HasResult,
}

/// 実行状態の占有ガード
///
/// 取得時に `Busy(stage)` へ遷移し、drop時に安定状態へ戻す。
/// panicを含むすべての脱出経路で解放が保証される。
struct BusyGuard<'a> {
    state: &'a Cell<WorkflowState>,
    resting: Cell<WorkflowState>,
}

impl<'a> BusyGuard<'a> {
    /// 実行状態を占有する。Busy中なら同期的に拒否する。
    fn acquire(state: &'a Cell<WorkflowState>, stage: Stage) -> Result<Self, WorkflowError> {
        match state.get() {
            WorkflowState::Busy(running) => Err(WorkflowError::Busy { running }),
            resting => {
                state.set(WorkflowState::Busy(stage));
                Ok(Self {
                    state,
                    resting: Cell::new(resting),
                })
            }
        }
    }

    /// drop時の遷移先を差し替える（工程成功時のみ使用）
    fn complete(&self, next: WorkflowState) {
        self.resting.set(next);
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state.set(self.resting.get());
    }
}

/// ワークフロー調停者
///
/// InputState と解析レポートの唯一の所有者。
/// サービスは値とエラーを返すだけで、状態変更はここでのみ行う。
pub struct MatchWorkflow<E, A> {
    extraction: E,
    analysis: A,
    input: RefCell<InputState>,
    state: Cell<WorkflowState>,
    report: RefCell<Option<MatchReport>>,
}

impl<E, A> MatchWorkflow<E, A>
where
    E: ExtractionService,
    A: AnalysisService,
{
    /// 新しい調停者を作成
    pub fn new(extraction: E, analysis: A) -> Self {
        Self {
            extraction,
            analysis,
            input: RefCell::new(InputState::default()),
            state: Cell::new(WorkflowState::Idle),
            report: RefCell::new(None),
        }
    }

    /// レジュメテキストを設定（ユーザー入力）
    pub fn set_resume_text(&self, text: impl Into<String>) {
        self.input.borrow_mut().resume_text = text.into();
    }

    /// 求人票テキストを設定（ユーザー入力）
    pub fn set_job_description(&self, text: impl Into<String>) {
        self.input.borrow_mut().job_description = text.into();
    }

    /// 入力状態のスナップショットを取得
    pub fn input_snapshot(&self) -> InputState {
        self.input.borrow().clone()
    }

    /// 現在の実行状態を取得
    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    /// 直近の解析レポートを取得（未解析ならNone）
    pub fn report(&self) -> Option<MatchReport> {
        self.report.borrow().clone()
    }

    /// 抽出工程を実行する
    ///
    /// 成功時は抽出テキストで `resume_text` を丸ごと上書きする
    /// （last-write-wins: 貼り付け済みテキストより抽出結果が優先）。
    /// 失敗時は `resume_text` を変更しない。
    pub async fn run_extraction(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, WorkflowError> {
        let guard = BusyGuard::acquire(&self.state, Stage::Extract)?;

        debug!(file_name, size = bytes.len(), "starting resume extraction");

        let text = self
            .extraction
            .extract(file_name, bytes)
            .await
            .map_err(WorkflowError::Extraction)?;

        debug!(chars = text.chars().count(), "extraction completed");

        // 空の抽出結果もそのまま採用する（エラーではなくデフォルト充填）
        self.input.borrow_mut().resume_text = text.clone();

        drop(guard);
        Ok(text)
    }

    /// 解析工程を実行する
    ///
    /// 入力が揃っていなければリモート呼び出しなしで即座に失敗する。
    /// 成功時はレポートを丸ごと置き換えて `HasResult` へ遷移する。
    /// 失敗時は以前のレポートを保持したまま元の安定状態へ戻る。
    pub async fn run_analysis(&self) -> Result<MatchReport, WorkflowError> {
        let guard = BusyGuard::acquire(&self.state, Stage::Analyze)?;

        // 検証はリモート呼び出し前に同期的に行う
        let snapshot = {
            let input = self.input.borrow();
            if !input.can_analyze() {
                let missing = if input.resume_text.is_empty() {
                    DomainError::MissingResumeText
                } else {
                    DomainError::MissingJobDescription
                };
                return Err(missing.into());
            }
            input.clone()
        };

        debug!(
            resume_chars = snapshot.resume_text.chars().count(),
            job_chars = snapshot.job_description.chars().count(),
            "starting analysis"
        );

        let report = self
            .analysis
            .analyze(&snapshot.resume_text, &snapshot.job_description)
            .await
            .map_err(WorkflowError::Analysis)?;

        // スコアはリモートサービスを信頼してそのまま通す。範囲外は警告のみ
        if !report.score_in_contract_range() {
            warn!(
                match_score = report.match_score,
                "match_score is outside the documented 0-100 range"
            );
        }

        *self.report.borrow_mut() = Some(report.clone());
        guard.complete(WorkflowState::HasResult);

        Ok(report)
    }
}
