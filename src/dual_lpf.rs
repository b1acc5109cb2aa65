use num_integer::Roots;

use crate::animate::{AnimError, Animator};
use crate::primes::{is_prime_naive, is_prime_opt};

/// 素朴版と最適化版の最大素因数探索を1tickずつ並走させるステッパー。
///
/// 昇順側は i = 2 から ⌊n/2⌋ へ、降順側は j = ⌊√n⌋ から 2 へ、
/// 1回の advance() でそれぞれ高々1つの候補を処理する。
/// i は増加のみ、j は減少のみで、両側は独立に終了する。
/// 降順側は最初に素数が見つかった時点で打ち切る（降順走査では
/// 最初に見つかる素数が最大なので、全走査して最大を取る変種と
/// 結果は一致する。一致性はテストで検証する）。
#[derive(Debug, Clone)]
pub struct DualLpfStepper {
    n: i64,
    naive_i: i64,
    opt_j: i64,
    naive_tests: u64,
    opt_tests: u64,
    best_naive: Option<i64>,
    best_opt: Option<i64>,
    max_naive_tests: u64,
    max_opt_tests: u64,
}

impl DualLpfStepper {
    /// n >= 2 を対象とするステッパーを構築する。
    pub fn new(n: i64) -> Result<Self, AnimError> {
        if n < 2 {
            return Err(AnimError::InvalidInput(
                "LPF target must be an integer >= 2".to_string(),
            ));
        }
        let opt_j = n.sqrt();
        Ok(DualLpfStepper {
            n,
            naive_i: 2,
            opt_j,
            naive_tests: 0,
            opt_tests: 0,
            best_naive: None,
            best_opt: None,
            max_naive_tests: (n / 2 - 1).max(1) as u64,
            max_opt_tests: (opt_j - 1).max(1) as u64,
        })
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    /// 昇順側カーソル。
    pub fn naive_cursor(&self) -> i64 {
        self.naive_i
    }

    /// 降順側カーソル。
    pub fn opt_cursor(&self) -> i64 {
        self.opt_j
    }

    pub fn naive_tests(&self) -> u64 {
        self.naive_tests
    }

    pub fn opt_tests(&self) -> u64 {
        self.opt_tests
    }

    /// これまでに昇順側が見つけた最良（最大）の素因数。
    pub fn best_naive(&self) -> Option<i64> {
        self.best_naive
    }

    /// 降順側が見つけた素因数。見つかった時点で最大と確定している。
    pub fn best_opt(&self) -> Option<i64> {
        self.best_opt
    }

    /// 進捗バー表示用の理論上の最大試行回数（昇順側, 降順側）。
    pub fn max_tests(&self) -> (u64, u64) {
        (self.max_naive_tests, self.max_opt_tests)
    }
}

impl Animator for DualLpfStepper {
    fn advance(&mut self) -> bool {
        let mut cont = false;

        // 昇順側: 素朴な全域走査
        if self.naive_i <= self.n / 2 {
            cont = true;
            self.naive_tests += 1;
            if self.n % self.naive_i == 0 && is_prime_naive(self.naive_i) {
                // 昇順走査なので後勝ちがそのまま最大
                self.best_naive = Some(self.naive_i);
            }
            self.naive_i += 1;
        }

        // 降順側: √n からの走査、発見時点で打ち切り
        if self.opt_j >= 2 && self.best_opt.is_none() {
            cont = true;
            self.opt_tests += 1;
            if self.n % self.opt_j == 0 {
                let cp = self.n / self.opt_j;
                if is_prime_opt(cp) {
                    self.best_opt = Some(cp);
                } else if is_prime_opt(self.opt_j) {
                    self.best_opt = Some(self.opt_j);
                }
            }
            self.opt_j -= 1;
        }

        cont
    }
}
