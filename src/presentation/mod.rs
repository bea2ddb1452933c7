/// プレゼンテーション層モジュール
///
/// ワークフロー層のビジネスロジックとUI表示の橋渡しを行います。
/// Clean Architectureの依存方向に従い、プレゼンテーション層は
/// 内側の層に依存しますが、その逆はありません。
///
/// # モジュール
/// - `input`: ユーザー入力処理（ファイル・stdin）
/// - `output`: コマンド結果の出力（人間向け・機械向け）

pub mod input;
pub mod output;
