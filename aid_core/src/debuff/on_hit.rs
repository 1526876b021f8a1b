//! OnHitDebuff - Effect triggered by a single strong hit

use super::DebuffPolicy;
use crate::subject::{ActiveEffect, Subject};
use serde::{Deserialize, Serialize};

/// Minimum damage for a hit to apply the effect for `duration_ticks`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnHitThreshold {
    pub damage: f64,
    pub duration_ticks: u32,
}

/// Applies an effect when a part takes enough damage at once
#[derive(Debug, Clone, PartialEq)]
pub struct OnHitDebuff {
    pub effect: String,
    /// Sorted by damage, highest first
    thresholds: Vec<OnHitThreshold>,
}

impl OnHitDebuff {
    pub fn new(effect: String, mut thresholds: Vec<OnHitThreshold>) -> Self {
        thresholds.sort_by(|a, b| b.damage.total_cmp(&a.damage));
        OnHitDebuff { effect, thresholds }
    }

    pub fn thresholds(&self) -> &[OnHitThreshold] {
        &self.thresholds
    }

    /// Duration for a hit of the given size, if it reaches any threshold
    pub fn duration_for(&self, damage: f64) -> Option<u32> {
        self.thresholds
            .iter()
            .find(|t| damage >= t.damage)
            .map(|t| t.duration_ticks)
    }
}

impl DebuffPolicy for OnHitDebuff {
    fn handle_damage(&mut self, damage: f64, _health_fraction: f64, subject: &mut Subject) {
        if let Some(duration) = self.duration_for(damage) {
            tracing::debug!(
                subject = %subject.name,
                effect = %self.effect,
                damage,
                duration,
                "on-hit debuff triggered"
            );
            subject.apply_effect(ActiveEffect::new(self.effect.clone(), duration, 0));
        }
    }

    fn handle_healing(&mut self, _healing: f64, _health_fraction: f64, _subject: &mut Subject) {}

    fn update(&mut self, _subject: &mut Subject, _health_fraction: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubjectId;

    fn make_blindness() -> OnHitDebuff {
        OnHitDebuff::new(
            "blindness".to_string(),
            vec![
                OnHitThreshold { damage: 1.0, duration_ticks: 80 },
                OnHitThreshold { damage: 2.0, duration_ticks: 160 },
            ],
        )
    }

    #[test]
    fn test_thresholds_sorted_descending() {
        let debuff = make_blindness();
        assert!((debuff.thresholds()[0].damage - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_strongest_matching_threshold_wins() {
        let debuff = make_blindness();
        assert_eq!(debuff.duration_for(5.0), Some(160));
        assert_eq!(debuff.duration_for(1.5), Some(80));
        assert_eq!(debuff.duration_for(0.5), None);
    }

    #[test]
    fn test_weak_hit_applies_nothing() {
        let mut debuff = make_blindness();
        let mut subject = Subject::server(SubjectId(1), "Alex");

        debuff.handle_damage(0.5, 0.9, &mut subject);
        assert!(!subject.has_effect("blindness"));

        debuff.handle_damage(2.0, 0.5, &mut subject);
        assert_eq!(subject.effect("blindness").map(|e| e.duration_ticks), Some(160));
    }
}
