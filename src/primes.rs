use num_integer::Roots;

/// 素朴な素数判定。2〜⌊√m⌋ の全整数で試し割りする。
/// m <= 1（負数含む）は常に false。
pub fn is_prime_naive(m: i64) -> bool {
    if m <= 1 {
        return false;
    }
    let lim = m.sqrt();
    for j in 2..=lim {
        if m % j == 0 {
            return false;
        }
    }
    true
}

/// 6k±1 最適化版の素数判定。
/// 2と3の倍数を先に弾き、以降は 6k±1 形の候補のみ試す。
/// 全整数入力で is_prime_naive と一致する。
pub fn is_prime_opt(m: i64) -> bool {
    if m <= 1 {
        return false;
    }
    if m <= 3 {
        return true;
    }
    if m % 2 == 0 || m % 3 == 0 {
        return false;
    }
    let lim = m.sqrt();
    let mut i = 5;
    while i <= lim {
        if m % i == 0 || m % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// 素朴な最大素因数探索。2〜⌊n/2⌋ を昇順に走査し、
/// n を割り切る素数のうち最後（=最大）のものを返す。
/// 約数が見つからず n > 1 なら n 自身が素数なので Some(n)。
/// n <= 1 は最大素因数が定義できないので None。
pub fn naive_lpf(n: i64) -> Option<i64> {
    if n <= 1 {
        return None;
    }
    let mut max_p = None;
    for i in 2..=n / 2 {
        if n % i == 0 && is_prime_naive(i) {
            max_p = Some(i);
        }
    }
    max_p.or(Some(n))
}

/// ⌊√n⌋ から降順に走査する最適化版の最大素因数探索。
/// 約数 i が見つかるたび補因数 n/i を先に素数判定し、
/// {n/i, i} のうち先に素数と判った方を返す。降順走査なので
/// 最初に見つかった素数が最大素因数になる。
/// 境界規約は naive_lpf と同一: n <= 1 → None、素数 n → Some(n)。
pub fn optimized_lpf(n: i64) -> Option<i64> {
    if n <= 1 {
        return None;
    }
    if is_prime_opt(n) {
        return Some(n);
    }
    for i in (2..=n.sqrt()).rev() {
        if n % i == 0 {
            let cp = n / i;
            if is_prime_opt(cp) {
                return Some(cp);
            }
            if is_prime_opt(i) {
                return Some(i);
            }
        }
    }
    // 合成数は必ず ⌊√n⌋ 以下に素な約数を持つので到達しない
    None
}
