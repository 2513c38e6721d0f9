//! Relation values and inverse resolution.
//!
//! A relation describes the strength multiplier of an interaction in one
//! direction, plus the rule for producing the relation seen from the opposite
//! direction. A relation is *symmetric* when it is its own inverse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Directional strength of an interaction between two elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Attacker is strong (2x); the reverse direction is weak (0.5x).
    Strong,
    /// Attacker is weak (0.5x); the reverse direction is strong (2x).
    Weak,
    /// No advantage in either direction (1x).
    Neutral,
    /// Both directions are strong (2x each way).
    MutualStrong,
    /// Both directions are weak (0.5x each way).
    MutualWeak,
    /// Caller-defined multiplier pair for relations outside the built-in set.
    Custom {
        multiplier: f64,
        inverse_multiplier: f64,
    },
}

/// The fixed variant set searched when resolving the inverse of an
/// asymmetric custom relation.
const BUILT_IN: [Relation; 5] = [
    Relation::Strong,
    Relation::Weak,
    Relation::Neutral,
    Relation::MutualStrong,
    Relation::MutualWeak,
];

impl Relation {
    /// The strength multiplier applied in this relation's direction.
    pub fn multiplier(&self) -> f64 {
        match self {
            Relation::Strong | Relation::MutualStrong => 2.0,
            Relation::Weak | Relation::MutualWeak => 0.5,
            Relation::Neutral => 1.0,
            Relation::Custom { multiplier, .. } => *multiplier,
        }
    }

    /// The multiplier seen from the opposite direction.
    pub fn inverse_multiplier(&self) -> f64 {
        match self {
            Relation::Strong | Relation::MutualWeak => 0.5,
            Relation::Weak | Relation::MutualStrong => 2.0,
            Relation::Neutral => 1.0,
            Relation::Custom {
                inverse_multiplier, ..
            } => *inverse_multiplier,
        }
    }

    /// Whether this relation is its own inverse.
    pub fn is_symmetric(&self) -> bool {
        self.multiplier() == self.inverse_multiplier()
    }

    /// The relation for the opposite direction.
    ///
    /// Symmetric relations return themselves. An asymmetric relation resolves
    /// to the built-in variant whose (multiplier, inverse-multiplier) pair is
    /// the exact swap of its own; `Strong` and `Weak` pair with each other
    /// this way. An asymmetric [`Relation::Custom`] with no built-in
    /// counterpart falls back to [`Relation::Neutral`]. The fallback is
    /// intentional policy rather than an error: it silently discards the
    /// custom multipliers for the reverse direction, so custom asymmetric
    /// relations should only be used where that is acceptable.
    pub fn inverse(&self) -> Relation {
        if self.is_symmetric() {
            return *self;
        }
        match self {
            Relation::Strong => Relation::Weak,
            Relation::Weak => Relation::Strong,
            _ => {
                let (multiplier, inverse_multiplier) =
                    (self.inverse_multiplier(), self.multiplier());
                BUILT_IN
                    .iter()
                    .copied()
                    .find(|candidate| {
                        candidate.multiplier() == multiplier
                            && candidate.inverse_multiplier() == inverse_multiplier
                    })
                    .unwrap_or(Relation::Neutral)
            }
        }
    }

    /// Variant name in canonical (uppercase) form.
    pub fn name(&self) -> &'static str {
        match self {
            Relation::Strong => "STRONG",
            Relation::Weak => "WEAK",
            Relation::Neutral => "NEUTRAL",
            Relation::MutualStrong => "MUTUAL_STRONG",
            Relation::MutualWeak => "MUTUAL_WEAK",
            Relation::Custom { .. } => "CUSTOM",
        }
    }
}

impl Default for Relation {
    fn default() -> Self {
        Relation::Neutral
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(x{})", self.name(), self.multiplier())
    }
}
