/// A closed range of ray parameters or coordinates.
///
/// Every intersection query narrows one of these; `min > max` means empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Range `[min, +inf)`, the usual search range for a ray hit.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Inclusive membership. NaN is never contained.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Membership excluding both endpoints.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Grow by `delta` in total, half on each end.
    pub fn expand(&self, delta: f32) -> Self {
        let half = delta / 2.0;
        Self::new(self.min - half, self.max + half)
    }

    pub fn is_empty(&self) -> bool {
        !(self.min <= self.max)
    }

    /// Smallest interval covering both `a` and `b`.
    pub fn surrounding(a: &Interval, b: &Interval) -> Self {
        Self::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// Identity for `surrounding`.
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    pub const UNIVERSE: Interval = Interval {
        min: f32::NEG_INFINITY,
        max: f32::INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_range_endpoints() {
        let hit_range = Interval::new(0.001, 4.0);

        assert!(hit_range.contains(0.001));
        assert!(hit_range.contains(4.0));
        assert!(!hit_range.contains(0.0));
        assert!(!hit_range.contains(f32::NAN));

        assert!(!hit_range.surrounds(0.001));
        assert!(!hit_range.surrounds(4.0));
        assert!(hit_range.surrounds(2.0));
    }

    #[test]
    fn test_from_min_is_unbounded_above() {
        let range = Interval::from_min(0.001);

        assert!(range.contains(1e30));
        assert!(range.contains(f32::INFINITY));
        assert!(!range.contains(-1.0));
        assert!(!range.is_empty());
        assert_eq!(range.size(), f32::INFINITY);
    }

    #[test]
    fn test_clamp_and_expand() {
        let unit = Interval::new(0.0, 1.0);
        assert_eq!(unit.clamp(-3.0), 0.0);
        assert_eq!(unit.clamp(0.25), 0.25);
        assert_eq!(unit.clamp(7.0), 1.0);

        let padded = Interval::new(-2.0, -2.0).expand(0.5);
        assert_eq!(padded, Interval::new(-2.25, -1.75));
        assert_eq!(padded.size(), 0.5);
    }

    #[test]
    fn test_surrounding_from_empty() {
        let spans = [Interval::new(1.0, 5.0), Interval::new(-2.0, 3.0)];
        let covered = spans
            .iter()
            .fold(Interval::EMPTY, |acc, span| Interval::surrounding(&acc, span));

        assert_eq!(covered, Interval::new(-2.0, 5.0));
    }

    #[test]
    fn test_empty_and_universe() {
        assert!(Interval::EMPTY.is_empty());
        assert!(!Interval::EMPTY.contains(0.0));
        assert!(Interval::new(1.0, 0.0).is_empty());
        assert!(Interval::new(f32::NAN, 1.0).is_empty());

        assert!(!Interval::UNIVERSE.is_empty());
        assert!(Interval::UNIVERSE.contains(-1e30));
        assert!(Interval::UNIVERSE.contains(1e30));
    }
}
