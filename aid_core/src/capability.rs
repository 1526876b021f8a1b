//! DamageModelRegistry - Owns the damage model attached to each player

use crate::body::{BodyError, BodyParts, DamageModelLookup};
use crate::damage_model::PlayerDamageModel;
use crate::subject::Subject;
use crate::types::SubjectId;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Identifier the damage model is stored under in player save data
pub const CAPABILITY_ID: &str = "first_aid:cap_adv_dmg_mdl";

/// Errors when reading or writing an attached damage model
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("no damage model attached to subject {0}")]
    NotAttached(SubjectId),
    #[error("failed to (de)serialize damage model: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("saved body is invalid: {0}")]
    InvalidPart(#[from] BodyError),
}

/// Damage models keyed by subject
#[derive(Debug, Default)]
pub struct DamageModelRegistry {
    models: HashMap<SubjectId, PlayerDamageModel>,
    /// Names of players who finished the tutorial
    tutorial_done: HashSet<String>,
}

impl DamageModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a model to a subject, returning the one it replaces
    pub fn attach(&mut self, subject: SubjectId, model: PlayerDamageModel) -> Option<PlayerDamageModel> {
        tracing::info!(%subject, "attached damage model");
        self.models.insert(subject, model)
    }

    pub fn detach(&mut self, subject: SubjectId) -> Option<PlayerDamageModel> {
        let model = self.models.remove(&subject);
        if model.is_some() {
            tracing::info!(%subject, "detached damage model");
        }
        model
    }

    pub fn get(&self, subject: SubjectId) -> Option<&PlayerDamageModel> {
        self.models.get(&subject)
    }

    pub fn get_mut(&mut self, subject: SubjectId) -> Option<&mut PlayerDamageModel> {
        self.models.get_mut(&subject)
    }

    pub fn contains(&self, subject: SubjectId) -> bool {
        self.models.contains_key(&subject)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Tick the model of every simulated subject
    ///
    /// Subjects without a model are skipped.
    pub fn tick_all(&mut self, subjects: &mut [Subject]) {
        for subject in subjects.iter_mut() {
            if !subject.is_simulation_eligible() {
                continue;
            }
            if let Some(model) = self.models.get_mut(&subject.id) {
                model.tick(subject);
            }
        }
    }

    /// Save the persistent part of a subject's model as JSON
    pub fn serialize_model(&self, subject: SubjectId) -> Result<String, CapabilityError> {
        let model = self.get(subject).ok_or(CapabilityError::NotAttached(subject))?;
        Ok(serde_json::to_string(model.body())?)
    }

    /// Restore a subject's model from JSON written by `serialize_model`
    pub fn deserialize_model(&mut self, subject: SubjectId, data: &str) -> Result<(), CapabilityError> {
        let model = self
            .models
            .get_mut(&subject)
            .ok_or(CapabilityError::NotAttached(subject))?;
        let body: BodyParts = serde_json::from_str(data)?;
        body.validate()?;
        model.restore_body(body);
        Ok(())
    }

    pub fn mark_tutorial_done(&mut self, name: impl Into<String>) {
        self.tutorial_done.insert(name.into());
    }

    pub fn has_done_tutorial(&self, name: &str) -> bool {
        self.tutorial_done.contains(name)
    }
}

impl DamageModelLookup for DamageModelRegistry {
    fn body_of(&self, subject: SubjectId) -> Option<&BodyParts> {
        self.get(subject).map(PlayerDamageModel::body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::PartHealer;
    use crate::config::FirstAidConfig;
    use crate::types::PlayerPart;

    fn make_registry(ids: &[u64]) -> DamageModelRegistry {
        let mut registry = DamageModelRegistry::new();
        for &id in ids {
            let model = PlayerDamageModel::new(&FirstAidConfig::default()).unwrap();
            registry.attach(SubjectId(id), model);
        }
        registry
    }

    #[test]
    fn test_attach_detach() {
        let mut registry = make_registry(&[1]);
        assert!(registry.contains(SubjectId(1)));
        assert!(registry.body_of(SubjectId(1)).is_some());
        assert!(registry.body_of(SubjectId(2)).is_none());

        assert!(registry.detach(SubjectId(1)).is_some());
        assert!(registry.is_empty());
        assert!(registry.detach(SubjectId(1)).is_none());
    }

    #[test]
    fn test_serialize_round_trip_keeps_health_and_healer() {
        let mut registry = make_registry(&[1, 2]);
        let mut subject = Subject::server(SubjectId(1), "Alex");
        let model = registry.get_mut(SubjectId(1)).unwrap();
        model.apply_damage(PlayerPart::RightFoot, 1.5, &mut subject);
        model.set_healer(PlayerPart::RightFoot, PartHealer::new(1.0, 10, 2));

        let saved = registry.serialize_model(SubjectId(1)).unwrap();
        registry.deserialize_model(SubjectId(2), &saved).unwrap();

        let restored = registry.get(SubjectId(2)).unwrap().part(PlayerPart::RightFoot);
        assert!((restored.current_health - 2.5).abs() < f64::EPSILON);
        assert!(restored.active_healer.is_some());
    }

    #[test]
    fn test_missing_subject_errors() {
        let mut registry = make_registry(&[]);
        assert!(matches!(
            registry.serialize_model(SubjectId(9)),
            Err(CapabilityError::NotAttached(SubjectId(9)))
        ));
        assert!(matches!(
            registry.deserialize_model(SubjectId(9), "{}"),
            Err(CapabilityError::NotAttached(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_saved_data() {
        let mut registry = make_registry(&[1]);
        assert!(matches!(
            registry.deserialize_model(SubjectId(1), "not json"),
            Err(CapabilityError::Serialization(_))
        ));

        let mut body = registry.get(SubjectId(1)).unwrap().body().clone();
        body.part_mut(PlayerPart::Head).max_health = -1.0;
        let saved = serde_json::to_string(&body).unwrap();
        assert!(matches!(
            registry.deserialize_model(SubjectId(1), &saved),
            Err(CapabilityError::InvalidPart(BodyError::InvalidMaxHealth {
                part: PlayerPart::Head,
                ..
            }))
        ));

        // Health above max or below zero would push fractions out of [0, 1]
        let mut body = registry.get(SubjectId(1)).unwrap().body().clone();
        body.part_mut(PlayerPart::Head).current_health = 40.0;
        let saved = serde_json::to_string(&body).unwrap();
        assert!(matches!(
            registry.deserialize_model(SubjectId(1), &saved),
            Err(CapabilityError::InvalidPart(BodyError::HealthOutOfRange {
                part: PlayerPart::Head,
                ..
            }))
        ));

        let mut body = registry.get(SubjectId(1)).unwrap().body().clone();
        body.part_mut(PlayerPart::Body).current_health = -3.0;
        let saved = serde_json::to_string(&body).unwrap();
        assert!(matches!(
            registry.deserialize_model(SubjectId(1), &saved),
            Err(CapabilityError::InvalidPart(BodyError::HealthOutOfRange {
                part: PlayerPart::Body,
                ..
            }))
        ));

        // Rejected saves leave the attached model untouched
        let model = registry.get(SubjectId(1)).unwrap();
        assert!((model.part(PlayerPart::Head).health_fraction() - 1.0).abs() < f64::EPSILON);
        assert!((model.part(PlayerPart::Body).health_fraction() - 1.0).abs() < f64::EPSILON);
        assert!(!model.is_dead());
    }

    #[test]
    fn test_tick_all_skips_inactive() {
        let mut registry = make_registry(&[1, 2]);
        let mut subjects = vec![
            Subject::server(SubjectId(1), "Alex"),
            Subject::server(SubjectId(2), "Steve"),
            Subject::server(SubjectId(3), "NoModel"),
        ];
        subjects[1].active = false;

        for subject in subjects.iter_mut().take(2) {
            let model = registry.get_mut(subject.id).unwrap();
            model.apply_damage(PlayerPart::Body, 2.0, subject);
            model.set_healer(PlayerPart::Body, PartHealer::new(1.0, 1, 1));
        }

        registry.tick_all(&mut subjects);

        let body = |id| registry.get(SubjectId(id)).unwrap().part(PlayerPart::Body).current_health;
        assert!((body(1) - 5.0).abs() < f64::EPSILON);
        assert!((body(2) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tutorial_tracking() {
        let mut registry = DamageModelRegistry::new();
        assert!(!registry.has_done_tutorial("Alex"));
        registry.mark_tutorial_done("Alex");
        assert!(registry.has_done_tutorial("Alex"));
    }
}
