//! Per-package progress lines for a batch run.

/// Position within a batch of known size
pub struct BatchProgress {
    total: usize,
    current: usize,
}

impl BatchProgress {
    pub fn new(total: usize) -> Self {
        Self { total, current: 0 }
    }

    /// Move to the next package and return its progress line
    pub fn advance(&mut self, package: &str) -> String {
        self.current += 1;
        format!("({}/{}) fetching {}...", self.current, self.total, package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_lines() {
        let mut progress = BatchProgress::new(2);
        assert_eq!(progress.advance("requests"), "(1/2) fetching requests...");
        assert_eq!(progress.advance("flask"), "(2/2) fetching flask...");
        assert_eq!(progress.current, progress.total);
    }
}
