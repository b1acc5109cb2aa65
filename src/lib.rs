//! 数値アルゴリズムの可視化コア
//!
//! コラッツ連鎖長と最大素因数（LPF）探索について、素朴版と最適化版を
//! 比較するためのライブラリ。各アルゴリズムを
//! 「1tickに1単位だけ進む」再開可能なステートマシンとして公開し、
//! 外部ドライバ（CLI / GUI）は固定周期タイマーから advance() を
//! 呼んで描画面を更新するだけでよい。
//!
//! 静的なランタイム比較（一括ベンチマーク）も同じステッピング
//! プロトコルに載る（構築時に完走し、以後は常に完了済みを報告する）。

pub mod animate;
pub mod benchmark;
pub mod collatz;
pub mod dual_lpf;
pub mod primes;
pub mod progression;
pub mod sieve;

pub use animate::{AnimError, Animator};
pub use benchmark::{BenchmarkResult, CollatzBenchmark, LpfBenchmark};
pub use collatz::{chain_length_naive, collatz_next, LengthCache, SequenceCache};
pub use dual_lpf::DualLpfStepper;
pub use primes::{is_prime_naive, is_prime_opt, naive_lpf, optimized_lpf};
pub use progression::CollatzProgression;
pub use sieve::SieveStepper;
