//! Per-stream filter history.

/// Last raw input, last low-pass output and last high-boost output,
/// indexed `[0]` left, `[1]` right.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterState {
    pub asis: [f64; 2],
    pub lo: [f64; 2],
    pub hi: [f64; 2],
}

impl FilterState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when every history value is exactly zero.
    pub fn is_clear(&self) -> bool {
        self.asis
            .iter()
            .chain(&self.lo)
            .chain(&self.hi)
            .all(|&v| v == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let mut state = FilterState {
            asis: [0.5, 0.0],
            lo: [0.0, -0.25],
            hi: [0.0, 0.0],
        };
        assert!(!state.is_clear());

        state.clear();
        assert!(state.is_clear());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_negative_zero_is_clear() {
        let state = FilterState {
            asis: [-0.0, 0.0],
            ..Default::default()
        };
        assert!(state.is_clear());
    }
}
