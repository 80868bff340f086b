/// Reduces a mono sample stream to exactly `peaks_amount` peaks.
///
/// Bin boundaries are proportional, so the peak count does not drift with
/// track length. Each bin contributes its absolute amplitude peak; the result
/// is normalized so the loudest bin is 1.0.
pub fn reduce_peaks(samples: &[f32], peaks_amount: usize) -> Vec<f32> {
    if samples.is_empty() || peaks_amount == 0 {
        return Vec::new();
    }

    let mut peaks = Vec::with_capacity(peaks_amount);
    for i in 0..peaks_amount {
        let start = i * samples.len() / peaks_amount;
        let end = ((i + 1) * samples.len() / peaks_amount)
            .max(start + 1)
            .min(samples.len());
        let peak = samples[start..end]
            .iter()
            .fold(0.0f32, |acc, s| acc.max(s.abs()));
        peaks.push(peak);
    }

    let loudest = peaks.iter().copied().fold(0.0f32, f32::max);
    if loudest > 0.0 {
        for peak in &mut peaks {
            *peak /= loudest;
        }
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_bins() {
        let samples = [0.1, 0.5, -0.3, 0.8, -1.0, 0.0, 0.2, 0.3];
        let peaks = reduce_peaks(&samples, 2);
        assert_eq!(peaks, vec![0.8, 1.0]);
    }

    #[test]
    fn output_length_matches_request() {
        let samples: Vec<f32> = (0..1001).map(|i| (i as f32 * 0.01).sin()).collect();
        assert_eq!(reduce_peaks(&samples, 200).len(), 200);
        assert_eq!(reduce_peaks(&samples, 7).len(), 7);
    }

    #[test]
    fn fewer_samples_than_peaks_still_yields_requested_length() {
        let peaks = reduce_peaks(&[0.5, -0.25], 4);
        assert_eq!(peaks.len(), 4);
        assert!(peaks.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn silence_stays_zero() {
        let peaks = reduce_peaks(&[0.0; 100], 10);
        assert_eq!(peaks, vec![0.0; 10]);
    }

    #[test]
    fn empty_input_yields_no_peaks() {
        assert!(reduce_peaks(&[], 10).is_empty());
    }
}
