use crate::animate::{AnimError, Animator};
use crate::collatz::SequenceCache;

/// ヒストグラムのビン数（1 から全系列の最大値まで対数等分）。
const HIST_BINS: usize = 20;

/// 複数シードのコラッツ数列を1ステップずつ描き進めるステッパー。
///
/// 構築時に全シードの完全な数列を（接尾辞共有キャッシュ経由で）
/// 前計算し、advance() ごとに可視プレフィックスを1値ずつ伸ばす。
/// 短い数列は末尾（= 1）で止まったまま凍結する。
/// 先頭シードについてだけ現在値とピーク値（単調増加）を追跡し、
/// 全シードの可視値を対数ビンのヒストグラムに集計する。
#[derive(Debug, Clone)]
pub struct CollatzProgression {
    seeds: Vec<u64>,
    seqs: Vec<Vec<u64>>,
    max_len: usize,
    global_max: u64,
    bin_edges: Vec<f64>,
    hist: Vec<u64>,
    step: usize,
    paused: bool,
    current: u64,
    peak: u64,
}

impl CollatzProgression {
    /// 正のシード列からステッパーを構築する。
    /// 空列や 0 を含むシードは InvalidInput。
    pub fn new(seeds: &[u64]) -> Result<Self, AnimError> {
        if seeds.is_empty() {
            return Err(AnimError::InvalidInput(
                "at least one Collatz seed is required".to_string(),
            ));
        }
        let mut cache = SequenceCache::new();
        let mut seqs = Vec::with_capacity(seeds.len());
        for &s in seeds {
            seqs.push(cache.sequence(s)?);
        }

        let max_len = seqs.iter().map(|s| s.len()).max().unwrap_or(1);
        let global_max = seqs
            .iter()
            .flat_map(|s| s.iter().copied())
            .max()
            .unwrap_or(1);

        // 1 〜 global_max を対数スケールで HIST_BINS 分割（端点は構築時に固定）
        let log_max = (global_max as f64).log10();
        let bin_edges: Vec<f64> = (0..=HIST_BINS)
            .map(|k| 10f64.powf(k as f64 * log_max / HIST_BINS as f64))
            .collect();

        let first = seqs[0][0];
        Ok(CollatzProgression {
            seeds: seeds.to_vec(),
            seqs,
            max_len,
            global_max,
            bin_edges,
            hist: vec![0; HIST_BINS],
            step: 1,
            paused: false,
            current: first,
            peak: first,
        })
    }

    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    /// 最長数列の長さ。advance() はこの回数だけ true を返す。
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// 全系列を通しての最大値。
    pub fn global_max(&self) -> u64 {
        self.global_max
    }

    /// これまでに描画された可視ステップ数。
    pub fn steps_shown(&self) -> usize {
        self.step - 1
    }

    /// seed_idx 番目の数列の可視プレフィックス。
    pub fn visible(&self, seed_idx: usize) -> &[u64] {
        let seq = &self.seqs[seed_idx];
        let shown = (self.step - 1).min(seq.len());
        &seq[..shown]
    }

    /// 先頭シードの現在値。
    pub fn current(&self) -> u64 {
        self.current
    }

    /// 先頭シードのこれまでのピーク値（単調増加）。
    pub fn peak(&self) -> u64 {
        self.peak
    }

    /// ビンごとの可視値カウント。
    pub fn histogram(&self) -> &[u64] {
        &self.hist
    }

    /// ヒストグラムのビン端点（HIST_BINS + 1 個）。
    pub fn bin_edges(&self) -> &[f64] {
        &self.bin_edges
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// 一時停止の反転。停止中の advance() は何もせず true を返す。
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn bin_index(&self, v: u64) -> usize {
        let x = v as f64;
        let k = self.bin_edges.partition_point(|&e| e <= x);
        k.saturating_sub(1).min(HIST_BINS - 1)
    }
}

impl Animator for CollatzProgression {
    fn advance(&mut self) -> bool {
        if self.paused {
            return true;
        }
        if self.step > self.max_len {
            return false;
        }

        let mut hist = vec![0; HIST_BINS];
        for seq in &self.seqs {
            let shown = self.step.min(seq.len());
            for &v in &seq[..shown] {
                hist[self.bin_index(v)] += 1;
            }
        }
        self.hist = hist;

        let seq0 = &self.seqs[0];
        let idx0 = self.step.min(seq0.len()) - 1;
        self.current = seq0[idx0];
        if self.current > self.peak {
            self.peak = self.current;
        }

        self.step += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progression_protocol() {
        let mut p = CollatzProgression::new(&[6, 3]).unwrap();
        // 6 の数列は長さ 9
        assert_eq!(p.max_len(), 9);
        let mut true_calls = 0;
        while p.advance() {
            true_calls += 1;
        }
        assert_eq!(true_calls, 9);
        assert_eq!(p.visible(0), &[6, 3, 10, 5, 16, 8, 4, 2, 1]);
        assert_eq!(p.peak(), 16);
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn test_pause_is_noop() {
        let mut p = CollatzProgression::new(&[27]).unwrap();
        p.advance();
        let shown = p.steps_shown();
        p.toggle_pause();
        assert!(p.advance(), "paused advance still reports pending work");
        assert_eq!(p.steps_shown(), shown);
        p.toggle_pause();
        p.advance();
        assert_eq!(p.steps_shown(), shown + 1);
    }

    #[test]
    fn test_histogram_counts_visible_values() {
        let mut p = CollatzProgression::new(&[6, 3]).unwrap();
        p.advance();
        // 1ステップ後は各シードの先頭値のみ可視
        let total: u64 = p.histogram().iter().sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_rejects_bad_seeds() {
        assert!(CollatzProgression::new(&[]).is_err());
        assert!(CollatzProgression::new(&[5, 0]).is_err());
    }
}
