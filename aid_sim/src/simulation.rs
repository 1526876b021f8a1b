//! Scripted combat against a single player

use aid_core::prelude::*;
use anyhow::{ensure, Result};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Parts below this fraction get a healing item applied
const HEAL_BELOW_FRACTION: f64 = 0.5;

/// Knobs for one run
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    pub ticks: u32,
    /// Chance per tick that the player is hit
    pub hit_chance: f64,
    pub min_hit: f64,
    pub max_hit: f64,
    pub bandages: u32,
    pub plasters: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            ticks: 6000,
            hit_chance: 0.01,
            min_hit: 0.5,
            max_hit: 3.0,
            bandages: 4,
            plasters: 4,
        }
    }
}

/// Final health of one part
#[derive(Debug, Clone, Serialize)]
pub struct PartReport {
    pub part: PlayerPart,
    pub current_health: f64,
    pub max_health: f64,
}

/// Outcome of a run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub ticks_run: u32,
    pub hits: u32,
    pub damage_taken: f64,
    pub items_used: u32,
    pub death_tick: Option<u32>,
    /// Ticks each effect was active for
    pub effect_ticks: BTreeMap<String, u32>,
    pub parts: Vec<PartReport>,
    pub messages: Vec<String>,
}

impl SimulationReport {
    pub fn total_health(&self) -> (f64, f64) {
        self.parts.iter().fold((0.0, 0.0), |(cur, max), p| {
            (cur + p.current_health, max + p.max_health)
        })
    }
}

/// Run the tick loop the way a server would
pub fn run(config: &FirstAidConfig, settings: &SimulationSettings, rng: &mut impl Rng) -> Result<SimulationReport> {
    ensure!(
        (0.0..=1.0).contains(&settings.hit_chance),
        "hit chance must be between 0 and 1, got {}",
        settings.hit_chance
    );
    ensure!(
        settings.min_hit.is_finite() && settings.min_hit <= settings.max_hit && settings.max_hit.is_finite(),
        "invalid hit range {}..={}",
        settings.min_hit,
        settings.max_hit
    );

    let mut registry = DamageModelRegistry::new();
    let mut subject = Subject::server(SubjectId(1), "sim_player");
    registry.attach(subject.id, PlayerDamageModel::new(config)?);
    subject.set_item_in_hand(Hand::MainHand, Some(ItemStack::new(Item::Bandage, settings.bandages)));
    subject.set_item_in_hand(Hand::OffHand, Some(ItemStack::new(Item::Plaster, settings.plasters)));

    let mut report = SimulationReport {
        ticks_run: 0,
        hits: 0,
        damage_taken: 0.0,
        items_used: 0,
        death_tick: None,
        effect_ticks: BTreeMap::new(),
        parts: Vec::new(),
        messages: Vec::new(),
    };

    for tick in 0..settings.ticks {
        report.ticks_run = tick + 1;

        if rng.gen_bool(settings.hit_chance) {
            let part = PlayerPart::ALL[rng.gen_range(0..PlayerPart::ALL.len())];
            let amount = rng.gen_range(settings.min_hit..=settings.max_hit);
            if let Some(model) = registry.get_mut(subject.id) {
                report.damage_taken += model.apply_damage(part, amount, &mut subject);
                report.hits += 1;
                tracing::debug!(tick, %part, amount, "hit");
            }
        }

        if registry.get(subject.id).is_some_and(PlayerDamageModel::is_dead) {
            tracing::info!(tick, "player died");
            report.death_tick = Some(tick);
            break;
        }

        if let Some(message) = pick_treatment(&registry, &subject) {
            // Round-trip through the wire format like a real client request
            let message = ApplyHealingItem::decode(&message.encode())?;
            if message.handle(&mut subject, &mut registry, &config.healing)? == HealingOutcome::Applied {
                report.items_used += 1;
            }
        }

        registry.tick_all(std::slice::from_mut(&mut subject));
        subject.tick_effects();
        for effect in subject.effects() {
            *report.effect_ticks.entry(effect.effect.clone()).or_default() += 1;
        }
    }

    if let Some(model) = registry.get(subject.id) {
        report.parts = model
            .body()
            .iter()
            .map(|p| PartReport {
                part: p.part,
                current_health: p.current_health,
                max_health: p.max_health,
            })
            .collect();
    }
    report.messages = subject.messages().to_vec();
    Ok(report)
}

/// Most injured untreated part, if any is low enough and an item is at hand
fn pick_treatment(registry: &DamageModelRegistry, subject: &Subject) -> Option<ApplyHealingItem> {
    let hand = [Hand::MainHand, Hand::OffHand]
        .into_iter()
        .find(|&h| subject.item_in_hand(h).is_some_and(|s| s.item.is_healing_item()))?;
    let body = registry.get(subject.id)?.body();
    let part = body
        .iter()
        .filter(|p| p.active_healer.is_none() && p.health_fraction() < HEAL_BELOW_FRACTION)
        .min_by(|a, b| a.health_fraction().total_cmp(&b.health_fraction()))?;
    Some(ApplyHealingItem::new(part.part, hand))
}
