use std::collections::HashMap;
use crate::analysis::config::PeriodogramConfig;
use crate::analysis::periodogram::{Periodogram, SpectralResult};
/// Spectral results keyed by signal name.
#[derive(Clone, Debug, Default)]
pub struct SpectralResults {
    by_name: HashMap<String, SpectralResult>,
}
impl SpectralResults {
    pub fn new() -> Self {
        Self::default()
    }
    /// Replaces any earlier result stored under `name`.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        result: SpectralResult,
    ) -> Option<SpectralResult> {
        self.by_name.insert(name.into(), result)
    }
    /// Estimates `samples` with the default configuration and stores the result.
    pub fn estimate_into(
        &mut self,
        name: impl Into<String>,
        samples: &[f64],
        sample_rate: f64,
    ) -> &SpectralResult {
        self.estimate_with(name, samples, sample_rate, PeriodogramConfig::default())
    }
    pub fn estimate_with(
        &mut self,
        name: impl Into<String>,
        samples: &[f64],
        sample_rate: f64,
        config: PeriodogramConfig,
    ) -> &SpectralResult {
        let result = Periodogram::new(sample_rate)
            .with_config(config)
            .compute(samples);
        let name = name.into();
        self.by_name.insert(name.clone(), result);
        &self.by_name[&name]
    }
    pub fn get(&self, name: &str) -> Option<&SpectralResult> {
        self.by_name.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
    pub fn len(&self) -> usize {
        self.by_name.len()
    }
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpectralResult)> {
        self.by_name.iter().map(|(k, v)| (k.as_str(), v))
    }
}
impl<K: Into<String>> FromIterator<(K, SpectralResult)> for SpectralResults {
    fn from_iter<I: IntoIterator<Item = (K, SpectralResult)>>(iter: I) -> Self {
        Self {
            by_name: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
