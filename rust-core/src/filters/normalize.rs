//! Peak normalization across channels

/// Largest absolute sample over every channel
pub fn peak(channels: &[Vec<f64>]) -> f64 {
    channels
        .iter()
        .flat_map(|channel| channel.iter())
        .fold(0.0, |acc: f64, &s| acc.max(s.abs()))
}

/// Scale every channel in place so the loudest sample is ±1.0
///
/// Silent buffers are left untouched.
///
/// # Returns
/// The peak before scaling
pub fn normalize(channels: &mut [Vec<f64>]) -> f64 {
    let max = peak(channels);

    if max > 0.0 {
        for s in channels.iter_mut().flat_map(|channel| channel.iter_mut()) {
            *s /= max;
        }
    }

    max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_to_unit_peak() {
        let mut channels = vec![vec![0.5, -2.0, 1.0], vec![0.25, 0.0, -0.5]];
        let before = normalize(&mut channels);

        assert_eq!(before, 2.0);
        assert_eq!(channels, vec![vec![0.25, -1.0, 0.5], vec![0.125, 0.0, -0.25]]);
        assert_eq!(peak(&channels), 1.0);
    }

    #[test]
    fn test_silence_untouched() {
        let mut channels = vec![vec![0.0; 16], vec![0.0; 16]];
        assert_eq!(normalize(&mut channels), 0.0);
        assert!(channels.iter().flatten().all(|&s| s == 0.0));
    }

    #[test]
    fn test_peak_shared_across_channels() {
        // Quiet channel keeps its level relative to the loud one
        let mut channels = vec![vec![0.1, -0.2], vec![4.0, 2.0]];
        normalize(&mut channels);

        assert!((channels[0][1] + 0.05).abs() < 1e-15);
        assert_eq!(channels[1][0], 1.0);
    }

    #[test]
    fn test_empty() {
        let mut channels: Vec<Vec<f64>> = Vec::new();
        assert_eq!(normalize(&mut channels), 0.0);
    }
}
