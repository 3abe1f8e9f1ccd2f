// cargo run --example moisture
// 合成土壤湿度信号，估计主频并输出周期图 PNG
use std::f64::consts::PI;
use std::path::PathBuf;
use rand::{rngs::StdRng, Rng, SeedableRng};
use spectral_peak::{render_to_file, PlotStyle, RenderOutcome, SpectralResults};
// hourly readings over 30 days
const SAMPLES_PER_DAY: f64 = 24.0;
const DAYS: usize = 30;
fn synth_moisture(rng: &mut StdRng, depth_damping: f64) -> Vec<f64> {
    (0..DAYS * SAMPLES_PER_DAY as usize)
        .map(|i| {
            let t = i as f64 / SAMPLES_PER_DAY;
            let daily = (2.0 * PI * t).sin() * depth_damping;
            let drying = -0.002 * i as f64;
            30.0 + daily + drying + rng.gen_range(-0.2..0.2)
        })
        .collect()
}
fn main() -> anyhow::Result<()> {
    // diagnostics are logged at warn
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = SpectralResults::new();
    results.estimate_into("moisture_0_10", &synth_moisture(&mut rng, 3.0), SAMPLES_PER_DAY);
    results.estimate_into("moisture_10_20", &synth_moisture(&mut rng, 1.0), SAMPLES_PER_DAY);
    results.estimate_into("moisture_30_40", &[f64::NAN; 48], SAMPLES_PER_DAY);
    let out_dir = PathBuf::from(std::env::var("PLOT_DIR").unwrap_or_else(|_| ".".into()));
    let style = PlotStyle::default();
    for name in ["moisture_0_10", "moisture_10_20", "moisture_30_40", "moisture_50_60"] {
        let path = out_dir.join(format!("{name}.png"));
        match render_to_file(name, &results, &style, &path)? {
            RenderOutcome::Drawn(_) => {
                let peak = results.get(name).and_then(|r| r.dominant());
                if let Some(peak) = peak {
                    println!(
                        "{name}: dominant {:.2} cycles/day (period {:.1} h) -> {}",
                        peak.frequency,
                        24.0 / peak.frequency,
                        path.display()
                    );
                }
            }
            RenderOutcome::Skipped(diagnostic) => println!("{name}: skipped ({diagnostic})"),
        }
    }
    Ok(())
}
