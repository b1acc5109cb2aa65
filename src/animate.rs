use std::error::Error;
use std::fmt;

/// 外部タイマーから1tickごとに駆動されるアニメーションの共通インターフェース。
///
/// `advance()` は離散的な1単位の仕事だけを進め、続きが残っているかを返す。
/// 駆動側は false が返るまで呼び続け、各呼び出しの間に読み取り専用の
/// スナップショット（各ステッパーのアクセサ）を描画する。
/// キャンセルは単に呼ぶのをやめるだけでよく、ロールバックは不要。
pub trait Animator {
    /// 1単位の仕事を進める。まだ仕事が残っているなら true。
    fn advance(&mut self) -> bool;
}

/// アニメーション構築時の入力エラー。
/// 計算が始まる前に検出され、プロセスを落とすことはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimError {
    /// 非正のシードや空のシード列など、前提条件を満たさない入力
    InvalidInput(String),
}

impl fmt::Display for AnimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
        }
    }
}

impl Error for AnimError {}
