use thiserror::Error;
/// Degenerate-input notices. These are reported, never returned as `Err`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Diagnostic {
    #[error("Empty or all NaN time series")]
    EmptySignal,
    #[error("sample rate must be a positive finite number, got {sample_rate}")]
    InvalidSampleRate { sample_rate: f64 },
    #[error("Insufficient data in power density ({bins} bins)")]
    InsufficientSpectrum { bins: usize },
    #[error("No data available for {0}")]
    UnknownSignal(String),
    #[error("No frequencies or power density data available for {0}")]
    MissingSpectrum(String),
    #[error("No dominant frequency or power data available for {0}")]
    MissingDominant(String),
}
impl Diagnostic {
    pub(crate) fn report(self) -> Self {
        log::warn!("{self}");
        self
    }
}
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to render plot: {0}")]
    Backend(String),
    #[error("failed to encode plot: {0}")]
    Encode(String),
    #[error("failed to write plot: {0}")]
    Io(#[from] std::io::Error),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        PlotError::Backend(format!("{value:?}"))
    }
}
impl From<image::ImageError> for PlotError {
    fn from(value: image::ImageError) -> Self {
        PlotError::Encode(value.to_string())
    }
}
