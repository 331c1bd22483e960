use serde::Serialize;

/// Metrics of changed and unchanged items.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Metrics {
    changed: usize,
    unchanged: usize,
}

impl Metrics {
    /// Creates metrics.
    pub const fn new(changed: usize, unchanged: usize) -> Self {
        Self { changed, unchanged }
    }

    /// Returns a number of changed items.
    pub const fn changed(&self) -> usize {
        self.changed
    }

    /// Returns a number of unchanged items.
    pub const fn unchanged(&self) -> usize {
        self.unchanged
    }

    /// Returns a total number of items.
    pub const fn total(&self) -> usize {
        self.changed + self.unchanged
    }

    /// Returns whether any items are changed.
    pub const fn has_change(&self) -> bool {
        self.changed > 0
    }

    /// Adds an item.
    pub const fn add(&mut self, changed: bool) {
        if changed {
            self.changed += 1;
        } else {
            self.unchanged += 1;
        }
    }

    /// Merges other metrics.
    pub const fn merge(&mut self, other: &Self) {
        self.changed += other.changed;
        self.unchanged += other.unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_items() {
        let mut metrics = Metrics::default();

        metrics.add(true);
        metrics.add(false);
        metrics.add(false);

        assert_eq!(metrics, Metrics::new(1, 2));
        assert_eq!(metrics.total(), 3);
        assert!(metrics.has_change());
    }

    #[test]
    fn merge_metrics() {
        let mut metrics = Metrics::new(0, 3);

        assert!(!metrics.has_change());

        metrics.merge(&Metrics::new(2, 1));

        assert_eq!(metrics, Metrics::new(2, 4));
    }
}
