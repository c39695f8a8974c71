use std::num::NonZeroUsize;

/// Construction parameters for a [`crate::KDTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KDTreeConfig {
    /// Number of leading coordinates that drive descent. Values below 1 are clamped to 1.
    pub dimensions: usize,
    /// Number of nodes to preallocate in the arena.
    pub capacity: usize,
}

impl Default for KDTreeConfig {
    fn default() -> Self {
        Self {
            dimensions: 2,
            capacity: 0,
        }
    }
}

impl KDTreeConfig {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            ..Default::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// The dimensionality the tree will actually use
    pub fn clamped_dimensions(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.dimensions).unwrap_or(NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(3, 3)]
    fn dimensions_are_clamped(#[case] requested: usize, #[case] expected: usize) {
        let config = KDTreeConfig::new(requested);
        assert_eq!(config.clamped_dimensions().get(), expected);
    }

    #[test]
    fn default_is_planar() {
        let config = KDTreeConfig::default().with_capacity(16);
        assert_eq!(config.dimensions, 2);
        assert_eq!(config.capacity, 16);
    }
}
