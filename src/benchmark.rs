use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::animate::Animator;
use crate::collatz::{chain_length_naive, LengthCache};
use crate::primes::{naive_lpf, optimized_lpf};

/// 問題サイズごとの実測時間の対。構築後は不変。
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub sizes: Vec<u64>,
    pub naive: Vec<Duration>,
    pub optimized: Vec<Duration>,
}

impl BenchmarkResult {
    /// (サイズ, 素朴版, 最適化版) の3つ組を順に返す。
    pub fn rows(&self) -> impl Iterator<Item = (u64, Duration, Duration)> + '_ {
        self.sizes
            .iter()
            .zip(self.naive.iter())
            .zip(self.optimized.iter())
            .map(|((&s, &n), &o)| (s, n, o))
    }
}

/// コラッツ連鎖長の一括ベンチマーク。
///
/// 各サイズ N について 1..=N の全連鎖長を素朴版とメモ化版で計算し、
/// それぞれの所要時間を記録する。メモ化版はサイズごとにキャッシュを
/// リセットしてコールドキャッシュの計測にする。
/// 計測は構築時に一度きり走り、advance() は常に false を返す
/// （ステッピングプロトコル上は「最初から完了済み」）。
#[derive(Debug, Clone)]
pub struct CollatzBenchmark {
    result: BenchmarkResult,
}

impl CollatzBenchmark {
    pub fn run(sizes: &[u64]) -> Self {
        let mut naive = Vec::with_capacity(sizes.len());
        let mut optimized = Vec::with_capacity(sizes.len());
        let mut cache = LengthCache::new();

        for &n in sizes {
            let t0 = Instant::now();
            for i in 1..=n {
                black_box(chain_length_naive(i));
            }
            naive.push(t0.elapsed());

            cache.reset();
            let t1 = Instant::now();
            for i in 1..=n {
                black_box(cache.length(i));
            }
            optimized.push(t1.elapsed());
        }

        CollatzBenchmark {
            result: BenchmarkResult {
                sizes: sizes.to_vec(),
                naive,
                optimized,
            },
        }
    }

    pub fn result(&self) -> &BenchmarkResult {
        &self.result
    }
}

impl Animator for CollatzBenchmark {
    fn advance(&mut self) -> bool {
        false
    }
}

/// 最大素因数探索の一括ベンチマーク。
/// 各 n について naive_lpf / optimized_lpf を一度ずつ計測する。
#[derive(Debug, Clone)]
pub struct LpfBenchmark {
    result: BenchmarkResult,
}

impl LpfBenchmark {
    pub fn run(sizes: &[u64]) -> Self {
        let mut naive = Vec::with_capacity(sizes.len());
        let mut optimized = Vec::with_capacity(sizes.len());

        for &n in sizes {
            let n = n as i64;
            let t0 = Instant::now();
            black_box(naive_lpf(n));
            naive.push(t0.elapsed());

            let t1 = Instant::now();
            black_box(optimized_lpf(n));
            optimized.push(t1.elapsed());
        }

        LpfBenchmark {
            result: BenchmarkResult {
                sizes: sizes.to_vec(),
                naive,
                optimized,
            },
        }
    }

    pub fn result(&self) -> &BenchmarkResult {
        &self.result
    }
}

impl Animator for LpfBenchmark {
    fn advance(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_protocol() {
        let mut bench = LpfBenchmark::run(&[180, 13195]);
        assert!(!bench.advance(), "harness is done after construction");
        let result = bench.result();
        assert_eq!(result.sizes.len(), 2);
        assert_eq!(result.naive.len(), 2);
        assert_eq!(result.optimized.len(), 2);
    }

    #[test]
    fn test_collatz_harness_rows() {
        let bench = CollatzBenchmark::run(&[100, 500]);
        let rows: Vec<_> = bench.result().rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 100);
        assert_eq!(rows[1].0, 500);
    }
}
