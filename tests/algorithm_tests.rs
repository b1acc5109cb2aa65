use euler_anim::*;

/// 素数判定: 素朴版と 6k±1 版は全整数入力で一致する
#[test]
fn test_is_prime_agreement_spec_values() {
    for m in [0, 1, 2, 3, 4, 5, 18, 37, 97, 100] {
        assert_eq!(
            is_prime_naive(m),
            is_prime_opt(m),
            "primality mismatch for m={}",
            m
        );
    }
}

#[test]
fn test_is_prime_agreement_range() {
    for m in -50..=3000 {
        assert_eq!(
            is_prime_naive(m),
            is_prime_opt(m),
            "primality mismatch for m={}",
            m
        );
    }
}

/// 最大素因数: 境界規約を揃えた上で素朴版と最適化版は一致する
#[test]
fn test_lpf_agreement_spec_values() {
    for n in [1, 2, 3, 4, 15, 21, 37, 97, 180] {
        assert_eq!(
            naive_lpf(n),
            optimized_lpf(n),
            "LPF mismatch for n={}",
            n
        );
    }
}

#[test]
fn test_lpf_agreement_range() {
    for n in -10..=2000 {
        assert_eq!(
            naive_lpf(n),
            optimized_lpf(n),
            "LPF mismatch for n={}",
            n
        );
    }
}

#[test]
fn test_lpf_boundary_policy() {
    // n <= 1 は最大素因数なし、素数 n は n 自身
    assert_eq!(optimized_lpf(-100), None);
    assert_eq!(optimized_lpf(0), None);
    assert_eq!(optimized_lpf(1), None);
    assert_eq!(optimized_lpf(2), Some(2));
    assert_eq!(optimized_lpf(37), Some(37));
}

/// 連鎖長: メモ化版は素朴版と全シードで一致する
#[test]
fn test_chain_length_agreement() {
    let mut cache = LengthCache::new();
    for n in 1..=1000 {
        assert_eq!(
            cache.length(n),
            chain_length_naive(n),
            "chain length mismatch for n={}",
            n
        );
    }
}

#[test]
fn test_chain_length_cold_cache_matches_warm() {
    let mut warm = LengthCache::new();
    for n in 1..=100 {
        warm.length(n);
    }
    let warm_27 = warm.length(27);

    let mut cold = LengthCache::new();
    assert_eq!(cold.length(27), warm_27, "cache state must not change results");
}

/// 数列ビルダー: 必ず 1 で終わり、隣接値はコラッツ規則に従い、
/// 長さ - 1 は連鎖長に等しい
#[test]
fn test_sequence_invariants() {
    let mut cache = SequenceCache::new();
    for seed in 1..=200 {
        let seq = cache.sequence(seed).unwrap();
        assert_eq!(seq[0], seed, "sequence must start at its seed");
        assert_eq!(*seq.last().unwrap(), 1, "sequence must end at 1");
        for w in seq.windows(2) {
            let expected = if w[0] % 2 == 0 { w[0] / 2 } else { 3 * w[0] + 1 };
            assert_eq!(w[1], expected, "Collatz rule violated after {}", w[0]);
        }
        assert_eq!(
            seq.len() as u64 - 1,
            chain_length_naive(seed),
            "length-1 must equal chain length for seed={}",
            seed
        );
    }
}

#[test]
fn test_sequence_rejects_nonpositive_seed() {
    let mut cache = SequenceCache::new();
    assert_eq!(
        cache.sequence(0),
        Err(AnimError::InvalidInput(
            "Collatz seed must be a positive integer".to_string()
        ))
    );
}
