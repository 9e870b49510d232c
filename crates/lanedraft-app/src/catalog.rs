// Hero catalog: a serializable listing of everything the fact store knows.

use std::collections::BTreeSet;

use serde::Serialize;

use lanedraft_core::draft::hero::{DamageType, Lane, Role};
use lanedraft_core::FactStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroEntry {
    pub hero: String,
    pub roles: BTreeSet<Role>,
    pub lanes: BTreeSet<Lane>,
    pub damage_types: BTreeSet<DamageType>,
    /// Number of recorded counter relations where this hero is the attacker.
    pub counter_exposure: usize,
    pub flexibility: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCatalog {
    pub total_heroes: usize,
    pub total_counters: usize,
    pub total_synergies: usize,
    /// Sorted by hero id.
    pub heroes: Vec<HeroEntry>,
}

impl HeroCatalog {
    pub fn build(facts: &FactStore) -> Self {
        let summary = facts.summary();
        let heroes = facts
            .heroes()
            .map(|hero| HeroEntry {
                hero: hero.to_string(),
                roles: facts.roles_of(hero).clone(),
                lanes: facts.lanes_of(hero).clone(),
                damage_types: facts.damage_types_of(hero).clone(),
                counter_exposure: facts.counter_exposure(hero),
                flexibility: facts.flexibility_score(hero),
            })
            .collect();

        HeroCatalog {
            total_heroes: facts.hero_count(),
            total_counters: summary.counters,
            total_synergies: summary.synergies,
            heroes,
        }
    }

    /// Keep only entries that can play `lane`. Totals still describe the
    /// whole store.
    pub fn retain_lane(&mut self, lane: Lane) {
        self.heroes.retain(|e| e.lanes.contains(&lane));
    }
}
