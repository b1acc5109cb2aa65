use crate::animate::{AnimError, Animator};

/// エラトステネスの篩のステップ実行。
///
/// 1回の advance() で候補 num = frame + 1 をひとつだけ処理する:
/// num がまだ素数候補なら max(num², 2·num) から n まで num 刻みで
/// 倍数を合成数として消し込み、frame を進める。
/// flags[i]（1始まりの値 v = i+1）は frame が i を通過して初めて
/// 「確定素数」として意味を持つ。
#[derive(Debug, Clone)]
pub struct SieveStepper {
    n: usize,
    frame: usize,
    flags: Vec<bool>,
}

impl SieveStepper {
    /// n 以下の自然数を対象とする篩を構築する。n >= 1。
    pub fn new(n: usize) -> Result<Self, AnimError> {
        if n == 0 {
            return Err(AnimError::InvalidInput(
                "sieve bound must be a positive integer".to_string(),
            ));
        }
        let mut flags = vec![true; n];
        flags[0] = false; // 1 は規約上合成数扱い
        Ok(SieveStepper { n, frame: 0, flags })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// 走査カーソル。frame == n で終端。
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// 位置ごとの素数候補フラグ（インデックス i が値 i+1 に対応）。
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// 走査が通過し確定した素数の列。
    pub fn confirmed_primes(&self) -> Vec<usize> {
        (0..self.frame.min(self.n))
            .filter(|&i| self.flags[i])
            .map(|i| i + 1)
            .collect()
    }
}

impl Animator for SieveStepper {
    fn advance(&mut self) -> bool {
        if self.frame >= self.n {
            return false;
        }
        let num = self.frame + 1;
        if num > 1 && self.flags[self.frame] {
            let start = num.saturating_mul(num).max(num * 2);
            let mut multiple = start;
            while multiple <= self.n {
                self.flags[multiple - 1] = false;
                multiple += num;
            }
        }
        self.frame += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_30() {
        let mut sieve = SieveStepper::new(30).unwrap();
        let mut calls = 0;
        while sieve.advance() {
            calls += 1;
        }
        assert_eq!(calls, 30, "one unit of work per value");
        assert_eq!(
            sieve.confirmed_primes(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_sieve_rejects_zero() {
        assert!(SieveStepper::new(0).is_err());
    }
}
