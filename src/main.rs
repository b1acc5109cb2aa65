use euler_anim::*;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write as IoWrite};
use std::path::PathBuf;
use std::time::Instant;

fn print_usage() {
    eprintln!("数値アルゴリズム可視化 (素朴版 vs 最適化版)");
    eprintln!();
    eprintln!("使い方:");
    eprintln!("  euler-anim sieve <n>                  エラトステネスの篩を最後まで実行");
    eprintln!("  euler-anim lpf <n>                    最大素因数の二重探索を最後まで実行");
    eprintln!("  euler-anim collatz <seed> [seed...]   複数シードのコラッツ数列を描画");
    eprintln!("  euler-anim bench-collatz [N...]       連鎖長ベンチマーク (デフォルト 1000..100000)");
    eprintln!("  euler-anim bench-lpf [n...]           LPFベンチマーク (デフォルト 10007..2500001)");
    eprintln!();
    eprintln!("ベンチマーク結果は output/ フォルダに CSV 保存されます。");
    eprintln!();
    eprintln!("例:");
    eprintln!("  euler-anim sieve 30");
    eprintln!("  euler-anim lpf 13195");
    eprintln!("  euler-anim collatz 27 97 871");
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from("output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn timestamp() -> String {
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let s = now % 60;
    let m = (now / 60) % 60;
    let h = (now / 3600) % 24;
    let days = now / 86400;
    let y = 1970 + days / 365;
    let d = days % 365;
    format!("{:04}{:03}_{:02}{:02}{:02}", y, d, h, m, s)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "sieve" => cmd_sieve(&args[2..]),
        "lpf" => cmd_lpf(&args[2..]),
        "collatz" => cmd_collatz(&args[2..]),
        "bench-collatz" => cmd_bench_collatz(&args[2..]),
        "bench-lpf" => cmd_bench_lpf(&args[2..]),
        _ => {
            eprintln!("不明なコマンド: {}", args[1]);
            print_usage();
        }
    }
}

fn parse_u64(s: &str) -> u64 {
    s.parse::<u64>().unwrap_or_else(|_| {
        eprintln!("数値を解析できません: {}", s);
        std::process::exit(1);
    })
}

fn parse_sizes(args: &[String], default: &[u64]) -> Vec<u64> {
    if args.is_empty() {
        default.to_vec()
    } else {
        args.iter().map(|s| parse_u64(s)).collect()
    }
}

fn cmd_sieve(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: euler-anim sieve <n>");
        return;
    }
    let n = parse_u64(&args[0]) as usize;

    let mut sieve = match SieveStepper::new(n) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let timer = Instant::now();
    let mut ticks = 0u64;
    while sieve.advance() {
        ticks += 1;
    }
    let elapsed = timer.elapsed();

    let primes = sieve.confirmed_primes();
    println!("エラトステネスの篩: n = {}", n);
    println!("tick数     = {}", ticks);
    println!("素数の個数 = {}", primes.len());
    if primes.len() <= 50 {
        println!("素数       = {:?}", primes);
    } else {
        println!("先頭       = {:?} ...", &primes[..50]);
    }
    println!("計算時間   = {:?}", elapsed);
}

fn cmd_lpf(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: euler-anim lpf <n>");
        return;
    }
    let n = parse_u64(&args[0]) as i64;

    let mut stepper = match DualLpfStepper::new(n) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let timer = Instant::now();
    while stepper.advance() {}
    let elapsed = timer.elapsed();

    let (max_naive, max_opt) = stepper.max_tests();
    println!("最大素因数の二重探索: n = {}", n);
    println!("--- 昇順 (素朴版) ---");
    println!("試行回数 = {} / {}", stepper.naive_tests(), max_naive);
    println!("結果     = {:?}", stepper.best_naive());
    println!("--- 降順 (最適化版) ---");
    println!("試行回数 = {} / {}", stepper.opt_tests(), max_opt);
    println!("結果     = {:?}", stepper.best_opt());
    println!();
    println!("optimized_lpf({}) = {:?}", n, optimized_lpf(n));
    println!("計算時間 = {:?}", elapsed);
}

fn cmd_collatz(args: &[String]) {
    if args.is_empty() {
        eprintln!("使い方: euler-anim collatz <seed> [seed...]");
        return;
    }
    let seeds: Vec<u64> = args.iter().map(|s| parse_u64(s)).collect();

    let mut progression = match CollatzProgression::new(&seeds) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    while progression.advance() {}

    println!("コラッツ数列: seeds = {:?}", progression.seeds());
    println!("最長数列長     = {}", progression.max_len());
    println!("全体の最大値   = {}", progression.global_max());
    println!("seed[0] ピーク = {}", progression.peak());
    for (idx, &seed) in seeds.iter().enumerate() {
        let seq = progression.visible(idx);
        if seq.len() <= 30 {
            println!("  seed {:>8}: {:?}", seed, seq);
        } else {
            println!(
                "  seed {:>8}: 長さ {} / 先頭 {:?} ...",
                seed,
                seq.len(),
                &seq[..10]
            );
        }
    }

    println!("ヒストグラム (対数ビン):");
    let edges = progression.bin_edges();
    for (k, &count) in progression.histogram().iter().enumerate() {
        if count > 0 {
            println!("  [{:>10.0}, {:>10.0}): {}", edges[k], edges[k + 1], count);
        }
    }
}

fn save_bench_csv(kind: &str, result: &BenchmarkResult) {
    let filename = format!("bench_{}_{}.csv", kind, timestamp());
    let path = output_dir().join(&filename);
    if let Ok(file) = File::create(&path) {
        let mut w = BufWriter::new(file);
        writeln!(w, "size,naive_secs,optimized_secs").ok();
        for (size, naive, opt) in result.rows() {
            writeln!(
                w,
                "{},{:.9},{:.9}",
                size,
                naive.as_secs_f64(),
                opt.as_secs_f64()
            )
            .ok();
        }
        w.flush().ok();
        println!("\n保存: {}", path.display());
    }
}

fn print_bench_table(result: &BenchmarkResult) {
    println!(
        "  {:>10}  {:>14}  {:>14}  {:>8}",
        "size", "naive", "optimized", "ratio"
    );
    for (size, naive, opt) in result.rows() {
        let ratio = if opt.as_secs_f64() > 0.0 {
            naive.as_secs_f64() / opt.as_secs_f64()
        } else {
            f64::INFINITY
        };
        println!("  {:>10}  {:>14?}  {:>14?}  {:>7.1}x", size, naive, opt, ratio);
    }
}

fn cmd_bench_collatz(args: &[String]) {
    let sizes = parse_sizes(args, &[1_000, 5_000, 10_000, 50_000, 100_000]);
    println!("コラッツ連鎖長ベンチマーク (1..=N の総計算時間)");
    let bench = CollatzBenchmark::run(&sizes);
    print_bench_table(bench.result());
    save_bench_csv("collatz", bench.result());
}

fn cmd_bench_lpf(args: &[String]) {
    let sizes = parse_sizes(args, &[10_007, 100_003, 500_009, 1_000_003, 2_500_001]);
    println!("最大素因数ベンチマーク (1回の探索時間)");
    let bench = LpfBenchmark::run(&sizes);
    print_bench_table(bench.result());
    save_bench_csv("lpf", bench.result());
}
