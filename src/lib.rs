// src/lib.rs
// 周期图分析：估计主频并绘制对数功率谱
pub mod analysis;
pub use analysis::{
    estimate, render, render_to_file, Detrend, Diagnostic, DominantPeak, Periodogram,
    PeriodogramConfig, PlotError, PlotStyle, RenderOutcome, Scaling, SpectralResult,
    SpectralResults,
};
