#![windows_subsystem = "windows"]

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, Points};
use euler_anim::*;
use std::time::Instant;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_title("Euler Visualizer (naive vs optimized)"),
        ..Default::default()
    };
    eframe::run_native(
        "euler-anim",
        options,
        Box::new(|cc| {
            setup_japanese_font(&cc.egui_ctx);
            Ok(Box::new(VisualizerApp::default()))
        }),
    )
}

fn setup_japanese_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let font_paths = [
        "C:\\Windows\\Fonts\\YuGothR.ttc",
        "C:\\Windows\\Fonts\\msgothic.ttc",
        "C:\\Windows\\Fonts\\meiryo.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];
    for path in &font_paths {
        if let Ok(data) = std::fs::read(path) {
            fonts
                .font_data
                .insert("japanese".to_owned(), egui::FontData::from_owned(data));
            fonts
                .families
                .entry(egui::FontFamily::Proportional)
                .or_default()
                .insert(0, "japanese".to_owned());
            fonts
                .families
                .entry(egui::FontFamily::Monospace)
                .or_default()
                .push("japanese".to_owned());
            break;
        }
    }
    ctx.set_fonts(fonts);
}

// ─── データ構造 ─────────────────────────────────────

#[derive(PartialEq)]
enum Tab {
    Sieve,
    Lpf,
    Collatz,
    Bench,
}

#[derive(PartialEq, Clone, Copy)]
enum BenchKind {
    Collatz,
    Lpf,
}

struct VisualizerApp {
    tab: Tab,
    tick_ms: u64,
    last_tick: Instant,
    error: Option<String>,
    // 篩
    sieve_n_input: String,
    sieve: Option<SieveStepper>,
    sieve_running: bool,
    // 二重LPF
    lpf_n_input: String,
    lpf: Option<DualLpfStepper>,
    lpf_running: bool,
    // コラッツ数列
    seeds_input: String,
    collatz: Option<CollatzProgression>,
    collatz_running: bool,
    // ベンチマーク
    bench_kind: BenchKind,
    bench_sizes_input: String,
    bench: Option<BenchmarkResult>,
    bench_elapsed_s: f64,
}

impl Default for VisualizerApp {
    fn default() -> Self {
        Self {
            tab: Tab::Sieve,
            tick_ms: 50,
            last_tick: Instant::now(),
            error: None,
            sieve_n_input: "30".to_string(),
            sieve: None,
            sieve_running: false,
            lpf_n_input: "13195".to_string(),
            lpf: None,
            lpf_running: false,
            seeds_input: "27, 97, 871".to_string(),
            collatz: None,
            collatz_running: false,
            bench_kind: BenchKind::Collatz,
            bench_sizes_input: "1000, 5000, 10000, 50000".to_string(),
            bench: None,
            bench_elapsed_s: 0.0,
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 固定周期タイマー: tick_ms ごとに advance() を1回だけ呼ぶ
        let any_running = self.sieve_running || self.lpf_running || self.collatz_running;
        if any_running {
            if self.last_tick.elapsed().as_millis() as u64 >= self.tick_ms {
                self.last_tick = Instant::now();
                self.tick();
            }
            ctx.request_repaint_after(std::time::Duration::from_millis(self.tick_ms.min(16)));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Euler Visualizer");
                ui.separator();
                ui.label("tick:");
                ui.add(egui::Slider::new(&mut self.tick_ms, 10..=500).suffix("ms"));
                ui.separator();
                if ui.selectable_label(self.tab == Tab::Sieve, "篩").clicked() {
                    self.tab = Tab::Sieve;
                }
                if ui.selectable_label(self.tab == Tab::Lpf, "最大素因数").clicked() {
                    self.tab = Tab::Lpf;
                }
                if ui.selectable_label(self.tab == Tab::Collatz, "コラッツ").clicked() {
                    self.tab = Tab::Collatz;
                }
                if ui
                    .selectable_label(self.tab == Tab::Bench, "ベンチマーク")
                    .clicked()
                {
                    self.tab = Tab::Bench;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref msg) = self.error {
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), msg);
                ui.separator();
            }
            match self.tab {
                Tab::Sieve => self.ui_sieve(ui),
                Tab::Lpf => self.ui_lpf(ui),
                Tab::Collatz => self.ui_collatz(ui),
                Tab::Bench => self.ui_bench(ui),
            }
        });
    }
}

impl VisualizerApp {
    /// 実行中の全アニメーションを1tickずつ進める。
    fn tick(&mut self) {
        if self.sieve_running {
            if let Some(ref mut s) = self.sieve {
                self.sieve_running = s.advance();
            }
        }
        if self.lpf_running {
            if let Some(ref mut s) = self.lpf {
                self.lpf_running = s.advance();
            }
        }
        if self.collatz_running {
            if let Some(ref mut p) = self.collatz {
                self.collatz_running = p.advance();
            }
        }
    }

    // ─── 篩タブ ──────────────────────────────
    fn ui_sieve(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("n =");
            ui.add(egui::TextEdit::singleline(&mut self.sieve_n_input).desired_width(80.0));
            if ui.button("開始").clicked() {
                self.error = None;
                match self.sieve_n_input.trim().parse::<usize>() {
                    Ok(n) => match SieveStepper::new(n) {
                        Ok(s) => {
                            self.sieve = Some(s);
                            self.sieve_running = true;
                            self.last_tick = Instant::now();
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    },
                    Err(_) => {
                        self.error = Some(format!("数値を解析できません: {}", self.sieve_n_input))
                    }
                }
            }
        });

        ui.separator();

        let Some(sieve) = &self.sieve else {
            ui.label("n を入力して「開始」を押してください。");
            return;
        };

        let frame = sieve.frame();
        ui.label(format!(
            "走査位置 {} / {} | 確定素数 {} 個",
            frame,
            sieve.n(),
            sieve.confirmed_primes().len()
        ));

        // 確定素数 / 未確定候補 (上段)、合成数 (下段)
        let mut confirmed = Vec::new();
        let mut candidate = Vec::new();
        let mut composite = Vec::new();
        for (i, &flag) in sieve.flags().iter().enumerate() {
            let x = (i + 1) as f64;
            if !flag {
                composite.push([x, 0.5]);
            } else if i < frame {
                confirmed.push([x, 1.0]);
            } else {
                candidate.push([x, 1.0]);
            }
        }

        Plot::new("sieve_plot")
            .height(260.0)
            .include_y(0.0)
            .include_y(1.5)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.points(
                    Points::new(composite)
                        .radius(4.0)
                        .color(egui::Color32::GRAY)
                        .name("合成数"),
                );
                plot_ui.points(
                    Points::new(candidate)
                        .radius(4.0)
                        .color(egui::Color32::LIGHT_BLUE)
                        .name("未確定"),
                );
                plot_ui.points(
                    Points::new(confirmed)
                        .radius(5.0)
                        .color(egui::Color32::from_rgb(80, 190, 80))
                        .name("素数"),
                );
            });
    }

    // ─── 二重LPFタブ ──────────────────────────────
    fn ui_lpf(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("n =");
            ui.add(egui::TextEdit::singleline(&mut self.lpf_n_input).desired_width(120.0));
            if ui.button("開始").clicked() {
                self.error = None;
                match self.lpf_n_input.trim().parse::<i64>() {
                    Ok(n) => match DualLpfStepper::new(n) {
                        Ok(s) => {
                            self.lpf = Some(s);
                            self.lpf_running = true;
                            self.last_tick = Instant::now();
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    },
                    Err(_) => {
                        self.error = Some(format!("数値を解析できません: {}", self.lpf_n_input))
                    }
                }
            }
        });

        ui.separator();

        let Some(stepper) = &self.lpf else {
            ui.label("n を入力して「開始」を押してください。");
            return;
        };

        let (max_naive, max_opt) = stepper.max_tests();

        ui.label(format!("n = {}", stepper.n()));
        ui.add_space(8.0);

        ui.label(format!(
            "素朴版 (昇順): i = {} | 最大素因数: {}",
            stepper.naive_cursor(),
            stepper
                .best_naive()
                .map_or("–".to_string(), |p| p.to_string())
        ));
        ui.add(
            egui::ProgressBar::new(stepper.naive_tests() as f32 / max_naive as f32)
                .text(format!("{} / {} 回", stepper.naive_tests(), max_naive)),
        );

        ui.add_space(8.0);

        ui.label(format!(
            "最適化版 (降順): j = {} | 最大素因数: {}",
            stepper.opt_cursor(),
            stepper
                .best_opt()
                .map_or("–".to_string(), |p| p.to_string())
        ));
        ui.add(
            egui::ProgressBar::new(stepper.opt_tests() as f32 / max_opt as f32)
                .text(format!("{} / {} 回", stepper.opt_tests(), max_opt)),
        );

        if !self.lpf_running {
            ui.add_space(8.0);
            ui.label(format!(
                "探索終了: 素朴版 {} 回 / 最適化版 {} 回",
                stepper.naive_tests(),
                stepper.opt_tests()
            ));
        }
    }

    // ─── コラッツタブ ──────────────────────────────
    fn ui_collatz(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("seeds =");
            ui.add(egui::TextEdit::singleline(&mut self.seeds_input).desired_width(200.0));
            if ui.button("開始").clicked() {
                self.error = None;
                let parsed: Result<Vec<u64>, _> = self
                    .seeds_input
                    .split(&[',', ' '][..])
                    .filter(|s| !s.is_empty())
                    .map(|s| s.trim().parse::<u64>())
                    .collect();
                match parsed {
                    Ok(seeds) => match CollatzProgression::new(&seeds) {
                        Ok(p) => {
                            self.collatz = Some(p);
                            self.collatz_running = true;
                            self.last_tick = Instant::now();
                        }
                        Err(e) => self.error = Some(e.to_string()),
                    },
                    Err(_) => {
                        self.error =
                            Some(format!("シード列を解析できません: {}", self.seeds_input))
                    }
                }
            }
            if let Some(ref mut p) = self.collatz {
                let label = if p.is_paused() { "再開" } else { "一時停止" };
                if ui.button(label).clicked() {
                    p.toggle_pause();
                }
            }
        });

        ui.separator();

        let Some(progression) = &self.collatz else {
            ui.label("シード列を入力して「開始」を押してください。");
            return;
        };

        ui.label(format!(
            "ステップ {} / {} | 現在値 {} | ピーク {}",
            progression.steps_shown(),
            progression.max_len(),
            progression.current(),
            progression.peak()
        ));

        // 値は対数スケールで描く
        Plot::new("collatz_plot")
            .height(260.0)
            .legend(Legend::default())
            .y_axis_label("log10(値)")
            .show(ui, |plot_ui| {
                for (idx, &seed) in progression.seeds().iter().enumerate() {
                    let pts: Vec<[f64; 2]> = progression
                        .visible(idx)
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, (v as f64).log10()])
                        .collect();
                    plot_ui.line(Line::new(pts).name(format!("seed {}", seed)));
                }
                let peak_y = (progression.peak() as f64).log10();
                plot_ui.line(
                    Line::new(vec![[0.0, peak_y], [progression.max_len() as f64, peak_y]])
                        .color(egui::Color32::ORANGE)
                        .name("ピーク (seed[0])"),
                );
            });

        // 可視値の対数ビンヒストグラム
        let bars: Vec<Bar> = progression
            .histogram()
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(k, &c)| Bar::new(k as f64, c as f64))
            .collect();
        if !bars.is_empty() {
            ui.label("可視値の分布 (対数ビン)");
            Plot::new("collatz_hist")
                .height(110.0)
                .allow_drag(false)
                .allow_zoom(false)
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(BarChart::new(bars).width(0.8));
                });
        }
    }

    // ─── ベンチマークタブ ──────────────────────────────
    fn ui_bench(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.bench_kind, BenchKind::Collatz, "コラッツ連鎖長");
            ui.selectable_value(&mut self.bench_kind, BenchKind::Lpf, "最大素因数");
            ui.label("sizes =");
            ui.add(egui::TextEdit::singleline(&mut self.bench_sizes_input).desired_width(220.0));
            if ui.button("計測").clicked() {
                self.error = None;
                let parsed: Result<Vec<u64>, _> = self
                    .bench_sizes_input
                    .split(&[',', ' '][..])
                    .filter(|s| !s.is_empty())
                    .map(|s| s.trim().parse::<u64>())
                    .collect();
                match parsed {
                    Ok(sizes) => {
                        let timer = Instant::now();
                        let result = match self.bench_kind {
                            BenchKind::Collatz => CollatzBenchmark::run(&sizes).result().clone(),
                            BenchKind::Lpf => LpfBenchmark::run(&sizes).result().clone(),
                        };
                        self.bench_elapsed_s = timer.elapsed().as_secs_f64();
                        self.bench = Some(result);
                    }
                    Err(_) => {
                        self.error = Some(format!(
                            "サイズ列を解析できません: {}",
                            self.bench_sizes_input
                        ))
                    }
                }
            }
        });

        ui.separator();

        let Some(result) = &self.bench else {
            ui.label("サイズ列を入力して「計測」を押してください。");
            return;
        };

        ui.label(format!("計測時間: {:.2}s", self.bench_elapsed_s));

        // log-log 比較プロット
        let to_pts = |times: &[std::time::Duration]| -> Vec<[f64; 2]> {
            result
                .sizes
                .iter()
                .zip(times.iter())
                .map(|(&s, t)| [(s as f64).log10(), t.as_secs_f64().max(1e-9).log10()])
                .collect()
        };
        let naive_pts = to_pts(&result.naive);
        let opt_pts = to_pts(&result.optimized);

        Plot::new("bench_plot")
            .height(260.0)
            .legend(Legend::default())
            .x_axis_label("log10(size)")
            .y_axis_label("log10(秒)")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(naive_pts.clone())
                        .color(egui::Color32::from_rgb(100, 160, 220))
                        .name("素朴版"),
                );
                plot_ui.points(
                    Points::new(naive_pts)
                        .radius(4.0)
                        .color(egui::Color32::from_rgb(100, 160, 220)),
                );
                plot_ui.line(
                    Line::new(opt_pts.clone())
                        .color(egui::Color32::from_rgb(220, 80, 80))
                        .name("最適化版"),
                );
                plot_ui.points(
                    Points::new(opt_pts)
                        .radius(4.0)
                        .color(egui::Color32::from_rgb(220, 80, 80)),
                );
            });

        egui::Grid::new("bench_grid").striped(true).show(ui, |ui| {
            ui.label("size");
            ui.label("素朴版");
            ui.label("最適化版");
            ui.label("倍率");
            ui.end_row();
            for (size, naive, opt) in result.rows() {
                let ratio = if opt.as_secs_f64() > 0.0 {
                    naive.as_secs_f64() / opt.as_secs_f64()
                } else {
                    f64::INFINITY
                };
                ui.label(format!("{}", size));
                ui.label(format!("{:?}", naive));
                ui.label(format!("{:?}", opt));
                ui.label(format!("{:.1}x", ratio));
                ui.end_row();
            }
        });
    }
}
