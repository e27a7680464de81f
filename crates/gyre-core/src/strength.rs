//! Strength levels gating the tier permutation stages.

use std::fmt;
use std::str::FromStr;

use crate::error::TranspositionError;

/// How strongly the tiers are distorted.
///
/// The discriminant is the pull factor. Each permutation stage switches on
/// at a threshold factor, so the levels are strictly ordered:
///
/// | Level | Factor | Core reversed | Ring swirled | Outer pairs swapped |
/// |-------|--------|---------------|--------------|---------------------|
/// | Weak | 1 | | | |
/// | Medium | 2 | yes | | |
/// | Strong | 3 | yes | yes | |
/// | Extreme | 5 | yes | yes | yes |
///
/// # Examples
///
/// ```
/// use gyre_core::Strength;
///
/// let s: Strength = "Extreme".parse().unwrap();
/// assert_eq!(s.pull_factor(), 5);
/// assert!(s > Strength::Strong);
/// assert!(Strength::try_from(4u8).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Strength {
    /// No stage active; only the spiral and tier reordering apply.
    Weak = 1,
    /// Core tier reversed.
    Medium = 2,
    /// Core reversed, ring swirled.
    #[default]
    Strong = 3,
    /// All three stages active.
    Extreme = 5,
}

impl Strength {
    /// Every level, weakest first.
    pub const ALL: [Strength; 4] = [
        Strength::Weak,
        Strength::Medium,
        Strength::Strong,
        Strength::Extreme,
    ];

    /// Numeric pull factor of this level.
    pub fn pull_factor(self) -> u8 {
        self as u8
    }

    /// Lowercase name, as written in container headers.
    pub fn name(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::Extreme => "extreme",
        }
    }

    /// Whether the core tier is reversed (factor >= 2).
    pub fn reverses_core(self) -> bool {
        self.pull_factor() >= 2
    }

    /// Whether the ring tier is swirled (factor >= 3).
    pub fn swirls_ring(self) -> bool {
        self.pull_factor() >= 3
    }

    /// Whether adjacent pairs of the outer tier are swapped (factor >= 5).
    pub fn swaps_outer(self) -> bool {
        self.pull_factor() >= 5
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Strength {
    type Error = TranspositionError;

    fn try_from(factor: u8) -> Result<Self, Self::Error> {
        match factor {
            1 => Ok(Self::Weak),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Strong),
            5 => Ok(Self::Extreme),
            other => Err(TranspositionError::UnsupportedStrength {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Strength {
    type Err = TranspositionError;

    /// Accepts a level name in any case, or its pull factor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "weak" => Ok(Self::Weak),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            "extreme" => Ok(Self::Extreme),
            other => match other.parse::<u8>() {
                Ok(factor) => Self::try_from(factor),
                Err(_) => Err(TranspositionError::UnsupportedStrength {
                    value: trimmed.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(Strength::Weak < Strength::Medium);
        assert!(Strength::Medium < Strength::Strong);
        assert!(Strength::Strong < Strength::Extreme);
        let mut sorted = Strength::ALL;
        sorted.sort();
        assert_eq!(sorted, Strength::ALL);
    }

    #[test]
    fn stage_thresholds() {
        let gates: Vec<(bool, bool, bool)> = Strength::ALL
            .iter()
            .map(|s| (s.reverses_core(), s.swirls_ring(), s.swaps_outer()))
            .collect();
        assert_eq!(
            gates,
            vec![
                (false, false, false),
                (true, false, false),
                (true, true, false),
                (true, true, true),
            ]
        );
    }

    #[test]
    fn parse_names_and_factors() {
        assert_eq!("weak".parse::<Strength>().unwrap(), Strength::Weak);
        assert_eq!(" MEDIUM ".parse::<Strength>().unwrap(), Strength::Medium);
        assert_eq!("Strong".parse::<Strength>().unwrap(), Strength::Strong);
        assert_eq!("5".parse::<Strength>().unwrap(), Strength::Extreme);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(
            "4".parse::<Strength>(),
            Err(TranspositionError::UnsupportedStrength { value: "4".into() })
        );
        assert!(matches!(
            "gentle".parse::<Strength>(),
            Err(TranspositionError::UnsupportedStrength { .. })
        ));
        assert!("".parse::<Strength>().is_err());
    }

    #[test]
    fn try_from_factor() {
        for s in Strength::ALL {
            assert_eq!(Strength::try_from(s.pull_factor()).unwrap(), s);
        }
        assert!(Strength::try_from(0u8).is_err());
        assert!(Strength::try_from(4u8).is_err());
        assert!(Strength::try_from(6u8).is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for s in Strength::ALL {
            assert_eq!(s.to_string().parse::<Strength>().unwrap(), s);
        }
    }

    #[test]
    fn default_is_strong() {
        assert_eq!(Strength::default(), Strength::Strong);
    }
}
