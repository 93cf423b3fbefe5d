//! Linear and band scales.

/// Maps a continuous domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A collapsed domain maps everything to the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Maps discrete categories onto evenly spaced bands.
///
/// Outer padding is zero and bands are centred in the range, so with `n`
/// categories the step is `extent / max(1, n - padding_inner)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding_inner: f64) -> Self {
        let n = domain.len() as f64;
        if domain.is_empty() {
            return Self {
                domain,
                start: range.0,
                step: 0.0,
                bandwidth: 0.0,
            };
        }

        let extent = range.1 - range.0;
        let step = extent / (n - padding_inner).max(1.0);
        let start = range.0 + (extent - step * (n - padding_inner)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding_inner),
        }
    }

    /// Start of the band at `index`.
    pub fn position(&self, index: usize) -> Option<f64> {
        (index < self.domain.len()).then(|| self.start + self.step * index as f64)
    }

    /// Start of the band for a category label.
    pub fn position_of(&self, label: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == label)?;
        self.position(index)
    }

    /// Centre of the band at `index`.
    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index).map(|y| y + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_linear_scale_maps_proportionally() {
        let scale = LinearScale::new((0.0, 200.0), (0.0, 100.0));
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(50.0), 25.0);
        assert_eq!(scale.map(200.0), 100.0);
    }

    #[test]
    fn test_linear_scale_collapsed_domain() {
        let scale = LinearScale::new((0.0, 0.0), (0.0, 100.0));
        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(5.0), 0.0);
    }

    #[test]
    fn test_band_scale_layout() {
        let domain = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let scale = BandScale::new(domain, (0.0, 72.0), 0.765);
        let step = 72.0 / (3.0 - 0.765);
        assert!(close(scale.step(), step));
        assert!(close(scale.bandwidth(), step * 0.235));
        // Bands are centred, so the first starts where the outer gap ends.
        let first = scale.position(0).unwrap();
        let last = scale.position(2).unwrap();
        assert!(close(first, 72.0 - (last + scale.bandwidth())));
        assert!(close(scale.position_of("b").unwrap(), first + step));
        assert_eq!(scale.position(3), None);
        assert_eq!(scale.position_of("z"), None);
    }

    #[test]
    fn test_band_scale_single_category() {
        let scale = BandScale::new(vec!["only".to_string()], (0.0, 24.0), 0.765);
        assert!(close(scale.step(), 24.0));
        assert!(close(scale.center(0).unwrap(), 12.0));
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::new(Vec::new(), (0.0, 0.0), 0.765);
        assert!(scale.is_empty());
        assert_eq!(scale.step(), 0.0);
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.position(0), None);
    }
}
