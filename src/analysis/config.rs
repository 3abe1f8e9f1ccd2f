use serde::{Deserialize, Serialize};
/// What is removed from the samples before the transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detrend {
    /// Subtract the sample mean.
    #[default]
    Constant,
    None,
}
/// Normalisation of the squared DFT magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    /// Power per unit frequency, `|X|^2 / (fs * N)`.
    #[default]
    Density,
    /// Power per bin, `|X|^2 / N^2`.
    Spectrum,
}
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodogramConfig {
    pub detrend: Detrend,
    pub scaling: Scaling,
}
impl PeriodogramConfig {
    pub fn with_detrend(mut self, detrend: Detrend) -> Self {
        self.detrend = detrend;
        self
    }
    pub fn with_scaling(mut self, scaling: Scaling) -> Self {
        self.scaling = scaling;
        self
    }
}
