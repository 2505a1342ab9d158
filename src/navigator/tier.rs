/// Emphasis class of a navigator row, derived from its distance to the focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualTier {
    Focused,
    Adjacent,
    Far,
}

impl VisualTier {
    #[must_use]
    pub fn from_distance(distance: usize) -> Self {
        match distance {
            0 => VisualTier::Focused,
            1 => VisualTier::Adjacent,
            _ => VisualTier::Far,
        }
    }

    #[must_use]
    pub fn for_index(index: usize, focused_index: usize) -> Self {
        Self::from_distance(index.abs_diff(focused_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_by_distance() {
        assert_eq!(VisualTier::for_index(3, 3), VisualTier::Focused);
        assert_eq!(VisualTier::for_index(2, 3), VisualTier::Adjacent);
        assert_eq!(VisualTier::for_index(4, 3), VisualTier::Adjacent);
        assert_eq!(VisualTier::for_index(0, 3), VisualTier::Far);
        assert_eq!(VisualTier::for_index(9, 3), VisualTier::Far);
    }
}
