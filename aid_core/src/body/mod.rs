//! Body - Per-part health for a player

mod healer;
mod part;

pub use healer::PartHealer;
pub use part::DamageablePart;

use crate::config::HealthConfig;
use crate::types::{PlayerPart, SubjectId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inconsistent part state found in a stored body
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("{found} stored in the {expected} slot")]
    MisplacedPart { expected: PlayerPart, found: PlayerPart },
    #[error("{part} has invalid max health {max_health}")]
    InvalidMaxHealth { part: PlayerPart, max_health: f64 },
    #[error("{part} has health {current_health} outside 0..={max_health}")]
    HealthOutOfRange {
        part: PlayerPart,
        current_health: f64,
        max_health: f64,
    },
}

/// Resolves the body of a subject for debuffs that need per-part health
pub trait DamageModelLookup {
    /// Body of the given subject, or `None` if it has no damage model yet
    fn body_of(&self, subject: SubjectId) -> Option<&BodyParts>;
}

/// The eight damageable parts of a player, indexed by ordinal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyParts {
    parts: [DamageablePart; 8],
}

impl BodyParts {
    /// Create a body at full health
    pub fn new(health: &HealthConfig) -> Self {
        BodyParts {
            parts: PlayerPart::ALL.map(|part| DamageablePart::new(part, health.max_health(part))),
        }
    }

    pub fn part(&self, part: PlayerPart) -> &DamageablePart {
        &self.parts[part.ordinal()]
    }

    pub fn part_mut(&mut self, part: PlayerPart) -> &mut DamageablePart {
        &mut self.parts[part.ordinal()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DamageablePart> {
        self.parts.iter()
    }

    /// Unweighted mean health fraction across the given parts
    ///
    /// Returns 1.0 for an empty list.
    pub fn mean_health_fraction(&self, parts: &[PlayerPart]) -> f64 {
        if parts.is_empty() {
            return 1.0;
        }
        let total: f64 = parts.iter().map(|&p| self.part(p).health_fraction()).sum();
        total / parts.len() as f64
    }

    /// Check that every part is in its own slot with a health fraction in [0, 1]
    pub fn validate(&self) -> Result<(), BodyError> {
        for (&expected, state) in PlayerPart::ALL.iter().zip(self.parts.iter()) {
            if state.part != expected {
                return Err(BodyError::MisplacedPart {
                    expected,
                    found: state.part,
                });
            }
            if !(state.max_health.is_finite() && state.max_health > 0.0) {
                return Err(BodyError::InvalidMaxHealth {
                    part: state.part,
                    max_health: state.max_health,
                });
            }
            if !(0.0..=state.max_health).contains(&state.current_health) {
                return Err(BodyError::HealthOutOfRange {
                    part: state.part,
                    current_health: state.current_health,
                    max_health: state.max_health,
                });
            }
        }
        Ok(())
    }
}

/// An already resolved body answers for the subject that owns it
impl DamageModelLookup for BodyParts {
    fn body_of(&self, _subject: SubjectId) -> Option<&BodyParts> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_full_health() {
        let body = BodyParts::new(&HealthConfig::default());
        for part in PlayerPart::ALL {
            assert_eq!(body.part(part).part, part);
            assert!((body.part(part).health_fraction() - 1.0).abs() < f64::EPSILON);
        }
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_mean_health_fraction() {
        let mut body = BodyParts::new(&HealthConfig::default());
        body.part_mut(PlayerPart::LeftArm).current_health = 2.0; // 0.5
        body.part_mut(PlayerPart::LeftLeg).current_health = 1.0; // 0.25

        let arms = [PlayerPart::LeftArm, PlayerPart::RightArm];
        assert!((body.mean_health_fraction(&arms) - 0.75).abs() < 1e-9);

        let three = [PlayerPart::LeftArm, PlayerPart::RightArm, PlayerPart::LeftLeg];
        assert!((body.mean_health_fraction(&three) - 1.75 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_zero_max_health() {
        let mut body = BodyParts::new(&HealthConfig::default());
        body.part_mut(PlayerPart::RightFoot).max_health = 0.0;
        assert_eq!(
            body.validate(),
            Err(BodyError::InvalidMaxHealth {
                part: PlayerPart::RightFoot,
                max_health: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_health_outside_range() {
        let mut body = BodyParts::new(&HealthConfig::default());
        body.part_mut(PlayerPart::Head).current_health = 40.0;
        assert!(matches!(
            body.validate(),
            Err(BodyError::HealthOutOfRange { part: PlayerPart::Head, .. })
        ));

        let mut body = BodyParts::new(&HealthConfig::default());
        body.part_mut(PlayerPart::Body).current_health = -3.0;
        assert!(matches!(
            body.validate(),
            Err(BodyError::HealthOutOfRange { part: PlayerPart::Body, .. })
        ));

        body.part_mut(PlayerPart::Body).current_health = f64::NAN;
        assert!(body.validate().is_err());

        // Both ends of the range are valid
        body.part_mut(PlayerPart::Body).current_health = 0.0;
        body.part_mut(PlayerPart::LeftArm).current_health = 4.0;
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_misplaced_part() {
        let mut body = BodyParts::new(&HealthConfig::default());
        body.part_mut(PlayerPart::LeftArm).part = PlayerPart::RightArm;
        assert_eq!(
            body.validate(),
            Err(BodyError::MisplacedPart {
                expected: PlayerPart::LeftArm,
                found: PlayerPart::RightArm
            })
        );
    }
}
