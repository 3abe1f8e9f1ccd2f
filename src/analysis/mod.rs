// src/analysis/mod.rs
// 声明同级目录下的子模块文件
pub mod config;
pub mod error;
pub mod periodogram;
pub mod plot;
pub mod results;
// 公开导出这些模块里的结构体，方便外部调用
pub use config::{Detrend, PeriodogramConfig, Scaling};
pub use error::{Diagnostic, PlotError};
pub use periodogram::{estimate, DominantPeak, Periodogram, SpectralResult};
pub use plot::{render, render_to_file, PlotStyle, RenderOutcome};
pub use results::SpectralResults;
