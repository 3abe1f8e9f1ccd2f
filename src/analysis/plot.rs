use std::io::Cursor;
use std::path::Path;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::analysis::error::{Diagnostic, PlotError};
use crate::analysis::periodogram::{DominantPeak, SpectralResult};
use crate::analysis::results::SpectralResults;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub foreground: RGBColor,
    pub line_color: RGBColor,
    pub marker_color: RGBColor,
    pub marker_size: u32,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            background: WHITE,
            foreground: BLACK,
            line_color: RGBColor(31, 119, 180),
            marker_color: RED,
            marker_size: 6,
        }
    }
}
/// What `render` did for a signal name.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome {
    /// PNG-encoded figure.
    Drawn(Vec<u8>),
    /// Nothing was drawn; the diagnostic says why.
    Skipped(Diagnostic),
}
impl RenderOutcome {
    pub fn png(&self) -> Option<&[u8]> {
        match self {
            RenderOutcome::Drawn(bytes) => Some(bytes),
            RenderOutcome::Skipped(_) => None,
        }
    }
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            RenderOutcome::Drawn(_) => None,
            RenderOutcome::Skipped(d) => Some(d),
        }
    }
}
/// Draws the periodogram stored under `name` on a logarithmic power axis and
/// marks its dominant frequency. Missing or incomplete results are skipped
/// with a diagnostic; only backend failures are errors.
pub fn render(
    name: &str,
    results: &SpectralResults,
    style: &PlotStyle,
) -> Result<RenderOutcome, PlotError> {
    let Some(result) = results.get(name) else {
        return Ok(skip(Diagnostic::UnknownSignal(name.to_owned())));
    };
    if result.frequencies().is_empty() || result.power_density().is_empty() {
        return Ok(skip(Diagnostic::MissingSpectrum(name.to_owned())));
    }
    let Some(peak) = result.dominant() else {
        return Ok(skip(Diagnostic::MissingDominant(name.to_owned())));
    };
    let png = render_spectrum_png(name, result, peak, style)?;
    log::debug!("rendered periodogram of {name} ({} bytes)", png.len());
    Ok(RenderOutcome::Drawn(png))
}
/// `render`, then write the figure to `path` when one was drawn.
pub fn render_to_file(
    name: &str,
    results: &SpectralResults,
    style: &PlotStyle,
    path: impl AsRef<Path>,
) -> Result<RenderOutcome, PlotError> {
    let outcome = render(name, results, style)?;
    if let Some(png) = outcome.png() {
        std::fs::write(path.as_ref(), png)?;
        log::info!("wrote {}", path.as_ref().display());
    }
    Ok(outcome)
}
// 64 Mpx
const MAX_PLOT_PIXELS: usize = 1 << 26;
/// Byte length of the RGB bitmap for a `width` x `height` figure.
fn bitmap_len(width: u32, height: u32) -> Result<usize, PlotError> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&pixels| pixels <= MAX_PLOT_PIXELS)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| PlotError::Backend("plot dimensions too large".into()))
}
fn skip(diagnostic: Diagnostic) -> RenderOutcome {
    RenderOutcome::Skipped(diagnostic.report())
}
fn plottable(frequency: f64, power: f64) -> bool {
    frequency.is_finite() && power.is_finite() && power > 0.0
}
/// Positive power range for the log axis, padded when flat or empty.
fn power_bounds(result: &SpectralResult) -> (f64, f64) {
    let (lo, hi) = result
        .frequencies()
        .iter()
        .zip(result.power_density())
        .filter(|(f, p)| plottable(**f, **p))
        .fold((f64::INFINITY, 0.0f64), |(lo, hi), (_, &p)| (lo.min(p), hi.max(p)));
    if hi <= 0.0 {
        (1e-3, 1.0)
    } else if hi / lo < 10.0 {
        (lo / 10.0, hi * 10.0)
    } else {
        (lo, hi * 2.0)
    }
}
fn render_spectrum_png(
    name: &str,
    result: &SpectralResult,
    peak: DominantPeak,
    style: &PlotStyle,
) -> Result<Vec<u8>, PlotError> {
    let mut buffer = vec![0u8; bitmap_len(style.width, style.height)?];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let x_max = result
            .frequencies()
            .last()
            .copied()
            .filter(|f| f.is_finite() && *f > 0.0)
            .unwrap_or(1.0);
        let (y_min, y_max) = power_bounds(result);
        let text = |size: u32| ("sans-serif", size).into_font().color(&style.foreground);
        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .caption(format!("Periodogram of {name}"), text(24))
            .set_label_area_size(LabelAreaPosition::Left, 70)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(0f64..x_max, (y_min..y_max).log_scale())?;
        chart
            .configure_mesh()
            .x_desc("Frequency (Hz)")
            .y_desc("Power Density")
            .y_label_formatter(&|v| format!("{v:.0e}"))
            .label_style(text(14))
            .axis_desc_style(text(16))
            .light_line_style(&style.foreground.mix(0.05))
            .draw()?;
        let line_color = style.line_color;
        let series = result
            .frequencies()
            .iter()
            .copied()
            .zip(result.power_density().iter().copied())
            .filter(|&(f, p)| plottable(f, p));
        chart
            .draw_series(LineSeries::new(series, &line_color))?
            .label("Power Density")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &line_color));
        let marker_color = style.marker_color;
        let marker_size = style.marker_size;
        let marker = Some((peak.frequency, peak.power))
            .filter(|&(f, p)| plottable(f, p))
            .map(|point| Circle::new(point, marker_size, marker_color.filled()));
        chart
            .draw_series(marker)?
            .label(format!("Dominant frequency: {:.2} Hz", peak.frequency))
            .legend(move |(x, y)| Circle::new((x + 10, y), marker_size, marker_color.filled()));
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(text(14))
            .border_style(&style.foreground.mix(0.3))
            .background_style(&style.background.mix(0.9))
            .draw()?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, PlotError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| PlotError::Encode("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::periodogram::estimate;
    use std::f64::consts::PI;
    fn with_sine() -> SpectralResults {
        let samples: Vec<f64> = (0..100)
            .map(|i| (2.0 * PI * 10.0 * i as f64 / 100.0).sin() + 0.1 * (i as f64 * 0.37).cos())
            .collect();
        let mut results = SpectralResults::new();
        results.estimate_into("sine", &samples, 100.0);
        results
    }
    #[test]
    fn unknown_name_is_skipped() {
        let outcome = render("moisture_30_40", &with_sine(), &PlotStyle::default()).unwrap();
        assert_eq!(
            outcome,
            RenderOutcome::Skipped(Diagnostic::UnknownSignal("moisture_30_40".into()))
        );
        assert!(outcome.png().is_none());
        assert!(outcome
            .diagnostic()
            .unwrap()
            .to_string()
            .contains("moisture_30_40"));
    }
    #[test]
    fn incomplete_results_are_skipped() {
        let mut results = SpectralResults::new();
        results.insert("empty", estimate(&[], 1.0));
        results.insert("single", estimate(&[5.0], 1.0));
        let style = PlotStyle::default();
        assert_eq!(
            render("empty", &results, &style).unwrap(),
            RenderOutcome::Skipped(Diagnostic::MissingSpectrum("empty".into()))
        );
        assert_eq!(
            render("single", &results, &style).unwrap(),
            RenderOutcome::Skipped(Diagnostic::MissingDominant("single".into()))
        );
    }
    #[test]
    fn draws_png_of_configured_size() {
        let style = PlotStyle {
            width: 640,
            height: 360,
            ..PlotStyle::default()
        };
        let outcome = render("sine", &with_sine(), &style).unwrap();
        let png = outcome.png().expect("figure drawn");
        assert_eq!(&png[..4], b"\x89PNG");
        let decoded = image::load_from_memory(png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (640, 360));
    }
    #[test]
    fn oversized_style_is_an_error() {
        for (width, height) in [(70_000, 70_000), (u32::MAX, u32::MAX)] {
            let style = PlotStyle {
                width,
                height,
                ..PlotStyle::default()
            };
            let err = render("sine", &with_sine(), &style).unwrap_err();
            assert!(matches!(err, PlotError::Backend(_)), "{width}x{height}: {err}");
        }
        assert_eq!(bitmap_len(1000, 600).unwrap(), 1_800_000);
    }
    #[test]
    fn flat_spectrum_still_draws() {
        let mut results = SpectralResults::new();
        results.estimate_into("flat", &[4.0; 32], 2.0);
        let outcome = render("flat", &results, &PlotStyle::default()).unwrap();
        assert!(outcome.png().is_some());
    }
    #[test]
    fn power_bounds_are_positive() {
        let (lo, hi) = power_bounds(&estimate(&[4.0; 32], 2.0));
        assert!(lo > 0.0 && hi > lo);
        let results = with_sine();
        let (lo, hi) = power_bounds(results.get("sine").unwrap());
        assert!(lo > 0.0 && hi > lo);
    }
    #[test]
    fn writes_file_only_when_drawn() {
        let dir = std::env::temp_dir();
        let drawn = dir.join(format!("spectral-peak-{}-sine.png", std::process::id()));
        let skipped = dir.join(format!("spectral-peak-{}-none.png", std::process::id()));
        let results = with_sine();
        let style = PlotStyle::default();
        render_to_file("sine", &results, &style, &drawn).unwrap();
        render_to_file("none", &results, &style, &skipped).unwrap();
        assert!(std::fs::metadata(&drawn).unwrap().len() > 0);
        assert!(!skipped.exists());
        std::fs::remove_file(&drawn).unwrap();
    }
}
