//! Bean decision policies.

use std::fmt;

/// How a bean chooses its direction at each peg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionMode {
    /// Every peg is a fair coin flip drawn from the bean's random source.
    Luck,
    /// The bean goes right for its first `skill_level` pegs, then left.
    Skill,
}

impl DecisionMode {
    /// `true` for [`DecisionMode::Luck`].
    pub fn is_luck(self) -> bool {
        matches!(self, Self::Luck)
    }
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Luck => write!(f, "luck"),
            Self::Skill => write!(f, "skill"),
        }
    }
}
