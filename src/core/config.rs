//! Rule-set configuration.
//!
//! Different builds of the game disagreed on one rule: whether drawing the
//! Blank without calling it ends the round. `RuleSet` makes that choice
//! explicit:
//! - `RuleSet::strict()`: a missed Blank is a loss (default)
//! - `RuleSet::lenient()`: a missed Blank is survivable; only calling Blank
//!   on a number loses
//!
//! The engine reads the rule set at evaluation time and never hardcodes
//! either variant.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Maximum number of top-to-bottom rotations while looking for an
/// opening number card.
pub const DEFAULT_ROTATION_LIMIT: usize = 100;

/// Named rule-set presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetName {
    /// Drawing the Blank without calling it loses.
    #[default]
    Strict,
    /// Drawing the Blank without calling it is survivable.
    Lenient,
}

impl RuleSetName {
    /// Expand the name into its rule set.
    #[must_use]
    pub fn rules(self) -> RuleSet {
        match self {
            RuleSetName::Strict => RuleSet::strict(),
            RuleSetName::Lenient => RuleSet::lenient(),
        }
    }
}

impl std::str::FromStr for RuleSetName {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(RuleSetName::Strict),
            "lenient" => Ok(RuleSetName::Lenient),
            other => Err(EngineError::UnknownRuleSet(other.to_string())),
        }
    }
}

impl std::fmt::Display for RuleSetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSetName::Strict => write!(f, "strict"),
            RuleSetName::Lenient => write!(f, "lenient"),
        }
    }
}

/// Rules applied by the round engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Does drawing the Blank without calling it lose the round?
    pub blank_is_strict: bool,

    /// Safety bound on rotations when looking for the opening number.
    pub rotation_limit: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::strict()
    }
}

impl RuleSet {
    /// Missing the Blank loses.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            blank_is_strict: true,
            rotation_limit: DEFAULT_ROTATION_LIMIT,
        }
    }

    /// Missing the Blank is survivable.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            blank_is_strict: false,
            ..Self::strict()
        }
    }

    /// Override the blank rule.
    #[must_use]
    pub fn with_blank_strict(mut self, strict: bool) -> Self {
        self.blank_is_strict = strict;
        self
    }

    /// Override the rotation safety bound.
    #[must_use]
    pub fn with_rotation_limit(mut self, limit: usize) -> Self {
        self.rotation_limit = limit;
        self
    }

    /// The preset this rule set corresponds to, ignoring the rotation bound.
    #[must_use]
    pub fn name(&self) -> RuleSetName {
        if self.blank_is_strict {
            RuleSetName::Strict
        } else {
            RuleSetName::Lenient
        }
    }
}

impl From<RuleSetName> for RuleSet {
    fn from(name: RuleSetName) -> Self {
        name.rules()
    }
}
