//! Year-range arithmetic for fabricated ancestors.
//!
//! Every year is derived from a descendant's already-chosen years, so a
//! tree is always chronologically consistent:
//!
//! ```text
//! root birth      configured bounds (default 1984..=2008)
//! parent birth    child_birth - 50 ..= child_birth - 13
//! parent death    child_birth      ..= own_birth + 120
//! marriage        max(births) + 13 ..= min(deaths)
//! ```
//!
//! Ranges are never clamped. A range whose bounds cross, or a bound that
//! would leave the representable calendar, is a [`ConstraintError`].

use famtree_types::EventType;
use rand::Rng;

use crate::config::YearBounds;
use crate::error::ConstraintError;

/// Youngest age at which a person becomes a parent.
pub const MIN_PARENT_AGE: u32 = 13;

/// Oldest age at which a person becomes a parent.
pub const MAX_PARENT_AGE: u32 = 50;

/// Longest lifespan, in years.
pub const MAX_LIFESPAN: u32 = 120;

/// Youngest age at which a person marries.
pub const MIN_MARRIAGE_AGE: u32 = 13;

// ---------------------------------------------------------------------------
// YearRange
// ---------------------------------------------------------------------------

/// An inclusive, non-empty range of years for one event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    event: EventType,
    lower: u32,
    upper: u32,
}

impl YearRange {
    /// Build a range, rejecting inverted bounds and year zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvertedRange`] if `lower > upper`, or
    /// [`ConstraintError::YearOutOfRange`] if `lower` is zero.
    pub fn new(event: EventType, lower: u32, upper: u32) -> Result<Self, ConstraintError> {
        if lower > upper {
            return Err(ConstraintError::InvertedRange {
                event,
                lower,
                upper,
            });
        }
        if lower == 0 {
            return Err(ConstraintError::YearOutOfRange {
                event,
                context: String::from("lower bound is year 0"),
            });
        }
        Ok(Self {
            event,
            lower,
            upper,
        })
    }

    /// The event type this range applies to.
    pub const fn event(&self) -> EventType {
        self.event
    }

    /// Earliest year in the range.
    pub const fn lower(&self) -> u32 {
        self.lower
    }

    /// Latest year in the range.
    pub const fn upper(&self) -> u32 {
        self.upper
    }

    /// Whether `year` lies inside the range.
    pub const fn contains(&self, year: u32) -> bool {
        year >= self.lower && year <= self.upper
    }

    /// Draw a year uniformly from the range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.lower..=self.upper)
    }
}

// ---------------------------------------------------------------------------
// Range functions
// ---------------------------------------------------------------------------

/// Birth range of the root person.
///
/// # Errors
///
/// Returns a [`ConstraintError`] if the configured bounds are inverted or
/// start at year 0.
pub fn root_birth_range(bounds: &YearBounds) -> Result<YearRange, ConstraintError> {
    YearRange::new(EventType::Birth, bounds.earliest, bounds.latest)
}

/// Birth range of a parent of a child born in `child_birth`.
///
/// # Errors
///
/// Returns [`ConstraintError::YearOutOfRange`] if either bound would fall
/// before year 1.
pub fn parent_birth_range(child_birth: u32) -> Result<YearRange, ConstraintError> {
    let out_of_range = || ConstraintError::YearOutOfRange {
        event: EventType::Birth,
        context: format!("parent of a child born in {child_birth} would be born before year 1"),
    };
    let lower = child_birth
        .checked_sub(MAX_PARENT_AGE)
        .filter(|year| *year > 0)
        .ok_or_else(out_of_range)?;
    let upper = child_birth
        .checked_sub(MIN_PARENT_AGE)
        .filter(|year| *year > 0)
        .ok_or_else(out_of_range)?;
    YearRange::new(EventType::Birth, lower, upper)
}

/// Death range of a person born in `own_birth` whose child was born in
/// `child_birth`.
///
/// # Errors
///
/// Returns [`ConstraintError::YearOutOfRange`] if the upper bound
/// overflows, or [`ConstraintError::InvertedRange`] if the child was born
/// after the latest possible death.
pub fn death_range(child_birth: u32, own_birth: u32) -> Result<YearRange, ConstraintError> {
    let upper = own_birth
        .checked_add(MAX_LIFESPAN)
        .ok_or_else(|| ConstraintError::YearOutOfRange {
            event: EventType::Death,
            context: format!("death bound for birth year {own_birth} overflows"),
        })?;
    YearRange::new(EventType::Death, child_birth, upper)
}

/// Shared marriage range of a couple.
///
/// # Errors
///
/// Returns [`ConstraintError::YearOutOfRange`] if the lower bound
/// overflows, or [`ConstraintError::InvertedRange`] if one spouse dies
/// before both are old enough to marry.
pub fn marriage_range(
    births: (u32, u32),
    deaths: (u32, u32),
) -> Result<YearRange, ConstraintError> {
    let eldest_birth = births.0.max(births.1);
    let lower = eldest_birth
        .checked_add(MIN_MARRIAGE_AGE)
        .ok_or_else(|| ConstraintError::YearOutOfRange {
            event: EventType::Marriage,
            context: format!("marriage bound for birth year {eldest_birth} overflows"),
        })?;
    YearRange::new(EventType::Marriage, lower, deaths.0.min(deaths.1))
}

// ---------------------------------------------------------------------------
// ConstraintNode
// ---------------------------------------------------------------------------

/// The chosen years of one fabricated person, linked to the child whose
/// parent they are.
///
/// Years are sampled once, at construction. A node borrows its child, so
/// the chain always runs from an ancestor down to the root and never
/// forms a cycle.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintNode<'a> {
    generations_remaining: u32,
    child: Option<&'a ConstraintNode<'a>>,
    birth_year: u32,
    death_year: Option<u32>,
}

impl<'a> ConstraintNode<'a> {
    /// The root person's node, with `generations` ancestor layers above it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `birth_years` is not a valid range.
    pub fn root<R: Rng>(
        generations: u32,
        birth_years: &YearBounds,
        rng: &mut R,
    ) -> Result<Self, ConstraintError> {
        let birth_year = root_birth_range(birth_years)?.sample(rng);
        Ok(Self {
            generations_remaining: generations,
            child: None,
            birth_year,
            death_year: None,
        })
    }

    /// A parent's node, with birth and death years drawn relative to
    /// `child`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::GenerationsExhausted`] if `child` has no
    /// generations remaining, or a range error if the parent's years
    /// cannot be placed.
    pub fn parent_of<R: Rng>(
        child: &'a ConstraintNode<'a>,
        rng: &mut R,
    ) -> Result<Self, ConstraintError> {
        let generations_remaining = child
            .generations_remaining
            .checked_sub(1)
            .ok_or(ConstraintError::GenerationsExhausted)?;
        let birth_year = parent_birth_range(child.birth_year)?.sample(rng);
        let death_year = death_range(child.birth_year, birth_year)?.sample(rng);
        Ok(Self {
            generations_remaining,
            child: Some(child),
            birth_year,
            death_year: Some(death_year),
        })
    }

    /// Ancestor layers still to fabricate above this node.
    pub const fn generations_remaining(&self) -> u32 {
        self.generations_remaining
    }

    /// Whether this is the root person's node.
    pub const fn is_root(&self) -> bool {
        self.child.is_none()
    }

    /// Whether parents should be fabricated for this node.
    pub const fn has_parents(&self) -> bool {
        self.generations_remaining > 0
    }

    /// Chosen birth year.
    pub const fn birth_year(&self) -> u32 {
        self.birth_year
    }

    /// Chosen death year. `None` for the root, who is alive.
    pub const fn death_year(&self) -> Option<u32> {
        self.death_year
    }

    /// Distance from the root (the root is at depth 0).
    pub const fn depth(&self) -> u32 {
        let mut depth: u32 = 0;
        let mut current = self.child;
        while let Some(node) = current {
            depth = depth.saturating_add(1);
            current = node.child;
        }
        depth
    }

    /// Marriage range shared by this node and `spouse`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::YearOutOfRange`] if either spouse is the
    /// root (who has no death year), or a range error from
    /// [`marriage_range`].
    pub fn marriage_range_with(&self, spouse: &ConstraintNode<'_>) -> Result<YearRange, ConstraintError> {
        let (Some(own_death), Some(spouse_death)) = (self.death_year, spouse.death_year) else {
            return Err(ConstraintError::YearOutOfRange {
                event: EventType::Marriage,
                context: String::from("the root person has no death year to bound a marriage"),
            });
        };
        marriage_range(
            (self.birth_year, spouse.birth_year),
            (own_death, spouse_death),
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::arithmetic_side_effects)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn year_range_rejects_inverted_bounds() {
        let result = YearRange::new(EventType::Death, 2000, 1999);
        assert_eq!(
            result,
            Err(ConstraintError::InvertedRange {
                event: EventType::Death,
                lower: 2000,
                upper: 1999,
            })
        );
    }

    #[test]
    fn year_range_rejects_year_zero() {
        let result = YearRange::new(EventType::Birth, 0, 10);
        assert!(matches!(result, Err(ConstraintError::YearOutOfRange { .. })));
    }

    #[test]
    fn single_year_range_always_samples_that_year() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = YearRange::new(EventType::Marriage, 1950, 1950);
        assert!(range.is_ok());
        if let Ok(range) = range {
            for _ in 0..20 {
                assert_eq!(range.sample(&mut rng), 1950);
            }
        }
    }

    #[test]
    fn samples_stay_inside_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let Ok(range) = YearRange::new(EventType::Birth, 1900, 1910) else {
            panic!("valid range rejected");
        };
        for _ in 0..500 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn parent_birth_range_matches_parent_ages() {
        let range = parent_birth_range(2000);
        assert_eq!(range.map(|r| (r.lower(), r.upper())), Ok((1950, 1987)));
    }

    #[test]
    fn parent_birth_range_before_year_one_is_error() {
        assert!(matches!(
            parent_birth_range(40),
            Err(ConstraintError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            parent_birth_range(13),
            Err(ConstraintError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn death_range_runs_from_child_birth_to_max_lifespan() {
        let range = death_range(1990, 1960);
        assert_eq!(range.map(|r| (r.lower(), r.upper())), Ok((1990, 2080)));
    }

    #[test]
    fn death_range_overflow_is_error() {
        assert!(matches!(
            death_range(10, u32::MAX),
            Err(ConstraintError::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn marriage_range_uses_eldest_birth_and_first_death() {
        let range = marriage_range((1940, 1945), (2010, 1999));
        assert_eq!(range.map(|r| (r.lower(), r.upper())), Ok((1958, 1999)));
    }

    #[test]
    fn marriage_range_inverted_when_spouse_dies_young() {
        let range = marriage_range((1940, 1945), (2010, 1950));
        assert_eq!(
            range,
            Err(ConstraintError::InvertedRange {
                event: EventType::Marriage,
                lower: 1958,
                upper: 1950,
            })
        );
    }

    #[test]
    fn root_node_has_no_death_and_no_child() {
        let mut rng = StdRng::seed_from_u64(1);
        let Ok(root) = ConstraintNode::root(3, &YearBounds::default(), &mut rng) else {
            panic!("default bounds rejected");
        };
        assert!(root.is_root());
        assert!(root.has_parents());
        assert_eq!(root.death_year(), None);
        assert_eq!(root.depth(), 0);
        assert!((1984..=2008).contains(&root.birth_year()));
    }

    #[test]
    fn inverted_root_bounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = YearBounds {
            earliest: 2010,
            latest: 2000,
        };
        assert!(matches!(
            ConstraintNode::root(1, &bounds, &mut rng),
            Err(ConstraintError::InvertedRange { .. })
        ));
    }

    #[test]
    fn parent_years_follow_child() {
        let mut rng = StdRng::seed_from_u64(99);
        let Ok(root) = ConstraintNode::root(2, &YearBounds::default(), &mut rng) else {
            panic!("default bounds rejected");
        };
        for _ in 0..100 {
            let Ok(parent) = ConstraintNode::parent_of(&root, &mut rng) else {
                panic!("parent years could not be placed");
            };
            let birth = parent.birth_year();
            assert!(birth >= root.birth_year() - MAX_PARENT_AGE);
            assert!(birth <= root.birth_year() - MIN_PARENT_AGE);
            let death = parent.death_year().unwrap_or(0);
            assert!(death >= root.birth_year());
            assert!(death <= birth + MAX_LIFESPAN);
            assert_eq!(parent.generations_remaining(), 1);
            assert_eq!(parent.depth(), 1);
            assert!(!parent.is_root());
        }
    }

    #[test]
    fn parents_of_exhausted_node_are_refused() {
        let mut rng = StdRng::seed_from_u64(5);
        let Ok(root) = ConstraintNode::root(0, &YearBounds::default(), &mut rng) else {
            panic!("default bounds rejected");
        };
        assert!(!root.has_parents());
        assert!(matches!(
            ConstraintNode::parent_of(&root, &mut rng),
            Err(ConstraintError::GenerationsExhausted)
        ));
    }

    #[test]
    fn couple_marriage_range_is_always_valid() {
        let mut rng = StdRng::seed_from_u64(2024);
        let Ok(root) = ConstraintNode::root(1, &YearBounds::default(), &mut rng) else {
            panic!("default bounds rejected");
        };
        for _ in 0..200 {
            let (Ok(mother), Ok(father)) = (
                ConstraintNode::parent_of(&root, &mut rng),
                ConstraintNode::parent_of(&root, &mut rng),
            ) else {
                panic!("parent years could not be placed");
            };
            let range = mother.marriage_range_with(&father);
            assert!(range.is_ok());
            if let Ok(range) = range {
                assert!(range.upper() >= root.birth_year());
                assert!(range.lower() <= root.birth_year());
            }
        }
    }

    #[test]
    fn root_cannot_marry() {
        let mut rng = StdRng::seed_from_u64(3);
        let Ok(root) = ConstraintNode::root(1, &YearBounds::default(), &mut rng) else {
            panic!("default bounds rejected");
        };
        let Ok(parent) = ConstraintNode::parent_of(&root, &mut rng) else {
            panic!("parent years could not be placed");
        };
        assert!(matches!(
            root.marriage_range_with(&parent),
            Err(ConstraintError::YearOutOfRange { .. })
        ));
    }
}
