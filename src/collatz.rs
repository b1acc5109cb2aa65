use std::collections::HashMap;

use crate::animate::AnimError;

/// コラッツ写像の1ステップ。偶数なら n/2、奇数なら 3n+1。
#[inline]
pub fn collatz_next(n: u64) -> u64 {
    if n % 2 == 0 {
        n / 2
    } else {
        3 * n + 1
    }
}

/// メモ化なしの連鎖長計算。1 に到達するまでのステップ数を返す。
/// n >= 1 が前提（n = 0 は 0 を返す）。
pub fn chain_length_naive(n: u64) -> u64 {
    if n <= 1 {
        return 0;
    }
    let mut n = n;
    let mut cnt = 0;
    while n != 1 {
        n = collatz_next(n);
        cnt += 1;
    }
    cnt
}

/// 連鎖長のメモ化キャッシュ。
///
/// シード値 → 1 までの連鎖長の対応を保持する。一度入ったキーの値は
/// 以後変化しない。ベンチマークでコールドキャッシュ計測をやり直すときは
/// reset() で明示的に初期状態（1 → 0 のみ）へ戻す。
#[derive(Debug, Clone)]
pub struct LengthCache {
    map: HashMap<u64, u64>,
}

impl LengthCache {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert(1, 0);
        LengthCache { map }
    }

    /// キャッシュを初期状態に戻す。
    pub fn reset(&mut self) {
        self.map.clear();
        self.map.insert(1, 0);
    }

    /// 解決済みエントリ数。
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// メモ化付き連鎖長計算。
    /// 既知の値に当たるまで軌道を歩き、巻き戻しながら途中の全値を
    /// キャッシュする（再帰の代わりに明示スタックで深さ制限を回避）。
    /// n >= 1 が前提（n = 0 は 0 を返す）。
    pub fn length(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        let mut path = Vec::new();
        let mut x = n;
        while !self.map.contains_key(&x) {
            path.push(x);
            x = collatz_next(x);
        }
        let mut len = self.map[&x];
        for &v in path.iter().rev() {
            len += 1;
            self.map.insert(v, len);
        }
        len
    }
}

impl Default for LengthCache {
    fn default() -> Self {
        Self::new()
    }
}

/// 全数列のメモ化キャッシュ（接尾辞共有）。
///
/// シード値 → 1 で終わる値列全体の対応を保持する。新しいシードは
/// 既知のキーに当たるまで歩いた接頭辞と、キャッシュ済み接尾辞の
/// 連結として構築される。
#[derive(Debug, Clone)]
pub struct SequenceCache {
    map: HashMap<u64, Vec<u64>>,
}

impl SequenceCache {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert(1, vec![1]);
        SequenceCache { map }
    }

    /// seed から 1 までの完全な値列を返す。
    /// 非正のシードは計算前に InvalidInput で拒否する。
    pub fn sequence(&mut self, seed: u64) -> Result<Vec<u64>, AnimError> {
        if seed == 0 {
            return Err(AnimError::InvalidInput(
                "Collatz seed must be a positive integer".to_string(),
            ));
        }
        if let Some(seq) = self.map.get(&seed) {
            return Ok(seq.clone());
        }
        let mut prefix = Vec::new();
        let mut x = seed;
        while !self.map.contains_key(&x) {
            prefix.push(x);
            x = collatz_next(x);
        }
        let mut full = prefix;
        full.extend_from_slice(&self.map[&x]);
        self.map.insert(seed, full.clone());
        Ok(full)
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_length_known() {
        assert_eq!(chain_length_naive(1), 0);
        assert_eq!(chain_length_naive(2), 1);
        assert_eq!(chain_length_naive(6), 8);
        assert_eq!(chain_length_naive(27), 111);
    }

    #[test]
    fn test_memoized_matches_naive() {
        let mut cache = LengthCache::new();
        for n in 1..=300 {
            assert_eq!(
                cache.length(n),
                chain_length_naive(n),
                "chain length mismatch for n={}",
                n
            );
        }
    }

    #[test]
    fn test_cache_reset() {
        let mut cache = LengthCache::new();
        cache.length(27);
        assert!(cache.len() > 1);
        cache.reset();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_sequence_suffix_sharing() {
        let mut cache = SequenceCache::new();
        let seq = cache.sequence(6).unwrap();
        assert_eq!(seq, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);
        // 12 は 6 の列を接尾辞として再利用する
        let seq12 = cache.sequence(12).unwrap();
        assert_eq!(seq12[0], 12);
        assert_eq!(&seq12[1..], &seq[..]);
    }

    #[test]
    fn test_sequence_rejects_zero() {
        let mut cache = SequenceCache::new();
        assert!(cache.sequence(0).is_err());
    }
}
