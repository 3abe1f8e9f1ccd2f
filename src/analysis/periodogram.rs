use rustfft::{num_complex::Complex64, FftPlanner};
use crate::analysis::config::{Detrend, PeriodogramConfig, Scaling};
use crate::analysis::error::Diagnostic;
/// Highest-power bin above DC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominantPeak {
    pub frequency: f64,
    pub power: f64,
}
/// One-sided power spectrum of a single signal.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralResult {
    frequencies: Vec<f64>,
    power_density: Vec<f64>, // same length as frequencies
    dominant: Option<DominantPeak>,
    diagnostic: Option<Diagnostic>,
}
impl SpectralResult {
    fn degenerate(diagnostic: Diagnostic) -> Self {
        Self {
            frequencies: Vec::new(),
            power_density: Vec::new(),
            dominant: None,
            diagnostic: Some(diagnostic.report()),
        }
    }
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
    pub fn power_density(&self) -> &[f64] {
        &self.power_density
    }
    pub fn dominant(&self) -> Option<DominantPeak> {
        self.dominant
    }
    pub fn dominant_frequency(&self) -> Option<f64> {
        self.dominant.map(|p| p.frequency)
    }
    pub fn dominant_power(&self) -> Option<f64> {
        self.dominant.map(|p| p.power)
    }
    /// Why no dominant peak was found, if none was.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}
/// Periodogram estimator for a fixed sampling rate.
#[derive(Clone, Debug)]
pub struct Periodogram {
    sample_rate: f64,
    config: PeriodogramConfig,
}
impl Periodogram {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            config: PeriodogramConfig::default(),
        }
    }
    pub fn with_config(mut self, config: PeriodogramConfig) -> Self {
        self.config = config;
        self
    }
    /// Samples are NaN where missing. Degenerate input yields a result with
    /// no dominant peak and a diagnostic instead of an error.
    pub fn compute(&self, samples: &[f64]) -> SpectralResult {
        // also true for an empty slice
        if samples.iter().all(|v| v.is_nan()) {
            return SpectralResult::degenerate(Diagnostic::EmptySignal);
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return SpectralResult::degenerate(Diagnostic::InvalidSampleRate {
                sample_rate: self.sample_rate,
            });
        }
        let (frequencies, power_density) = self.one_sided(samples);
        if power_density.len() <= 1 {
            let diagnostic = Diagnostic::InsufficientSpectrum {
                bins: power_density.len(),
            };
            return SpectralResult {
                frequencies,
                power_density,
                dominant: None,
                diagnostic: Some(diagnostic.report()),
            };
        }
        // DC is never a candidate
        let idx = stable_argmax(&power_density[1..]) + 1;
        let peak = DominantPeak {
            frequency: frequencies[idx],
            power: power_density[idx],
        };
        log::debug!(
            "dominant frequency {:.4} (power {:e}) over {} bins",
            peak.frequency,
            peak.power,
            power_density.len()
        );
        SpectralResult {
            frequencies,
            power_density,
            dominant: Some(peak),
            diagnostic: None,
        }
    }
    fn one_sided(&self, samples: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = samples.len();
        let offset = match self.config.detrend {
            Detrend::Constant => samples.iter().sum::<f64>() / n as f64,
            Detrend::None => 0.0,
        };
        let mut buffer: Vec<Complex64> = samples
            .iter()
            .map(|&v| Complex64::new(v - offset, 0.0))
            .collect();
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(n);
        fft.process(&mut buffer);
        let bins = n / 2 + 1;
        let scale = match self.config.scaling {
            Scaling::Density => 1.0 / (self.sample_rate * n as f64),
            Scaling::Spectrum => 1.0 / (n as f64 * n as f64),
        };
        let frequencies = (0..bins)
            .map(|k| k as f64 * (self.sample_rate / n as f64))
            .collect();
        let power_density = buffer
            .iter()
            .take(bins)
            .enumerate()
            .map(|(k, c)| {
                let p = c.norm_sqr() * scale;
                // fold the negative frequencies; DC and Nyquist have no mirror
                if k == 0 || (n % 2 == 0 && k == n / 2) {
                    p
                } else {
                    2.0 * p
                }
            })
            .collect();
        (frequencies, power_density)
    }
}
/// Periodogram of `samples` with the default configuration.
pub fn estimate(samples: &[f64], sample_rate: f64) -> SpectralResult {
    Periodogram::new(sample_rate).compute(samples)
}
/// First index of the maximum. A NaN outranks every number, so the first NaN wins.
fn stable_argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        let current = values[best];
        if current.is_nan() {
            break;
        }
        if v.is_nan() || v > current {
            best = i;
        }
    }
    best
}
