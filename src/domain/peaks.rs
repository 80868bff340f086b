use serde::Serialize;

/// Ordered amplitude samples summarizing a track's waveform.
///
/// The length is approximately the requested peak count; the exact length is
/// the analyzer's contract and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peaks {
    pub values: Vec<f32>,
}

impl Peaks {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
