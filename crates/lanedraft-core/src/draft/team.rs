// Derived facts about a team in progress: role counts, lane fill, role
// diversity, damage balance and jungle/roam pairing.

use std::collections::BTreeSet;

use serde::Serialize;

use super::hero::{DamageType, Lane, Role};
use super::pick::Pick;
use crate::facts::FactStore;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Whether the team deals both physical and magic damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageBalance {
    Balanced,
    Unbalanced,
}

/// Whether the jungle and roam picks form an accepted pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    fn from_bool(ok: bool) -> Self {
        if ok {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Role a roam pick should hold to complement the given jungle hero.
///
/// Assassin junglers want a tank; tank or fighter junglers want a support.
/// Any other jungler has no recommended partner.
pub fn recommended_roam_role(facts: &FactStore, jungle_hero: &str) -> Option<Role> {
    if facts.has_role(jungle_hero, Role::Assassin) {
        Some(Role::Tank)
    } else if facts.has_role(jungle_hero, Role::Tank) || facts.has_role(jungle_hero, Role::Fighter) {
        Some(Role::Support)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Read-only view over a team's picks, answering composition questions
/// against the fact store. Cheap to construct; holds only borrows.
#[derive(Debug, Clone, Copy)]
pub struct TeamAnalyzer<'a> {
    facts: &'a FactStore,
    team: &'a [Pick],
}

impl<'a> TeamAnalyzer<'a> {
    pub fn new(facts: &'a FactStore, team: &'a [Pick]) -> Self {
        TeamAnalyzer { facts, team }
    }

    pub fn picks(&self) -> &'a [Pick] {
        self.team
    }

    fn heroes(&self) -> impl Iterator<Item = &'a str> {
        self.team.iter().map(|p| p.hero.as_str())
    }

    /// Whether a pick with this hero id is already on the team (lane tag ignored).
    pub fn contains_hero(&self, hero: &str) -> bool {
        self.heroes().any(|h| h == hero)
    }

    /// Number of picks whose hero holds `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.heroes().filter(|h| self.facts.has_role(h, role)).count()
    }

    /// Number of picks explicitly tagged with `lane`. Untagged picks never count.
    pub fn lane_fill_count(&self, lane: Lane) -> usize {
        self.team.iter().filter(|p| p.is_tagged(lane)).count()
    }

    pub fn is_lane_filled(&self, lane: Lane) -> bool {
        self.lane_fill_count(lane) > 0
    }

    pub fn is_lane_needed(&self, lane: Lane) -> bool {
        !self.is_lane_filled(lane)
    }

    /// Union of the roles held by all picked heroes.
    pub fn role_union(&self) -> BTreeSet<Role> {
        self.heroes()
            .flat_map(|h| self.facts.roles_of(h).iter().copied())
            .collect()
    }

    pub fn unique_role_diversity(&self) -> usize {
        self.role_union().len()
    }

    /// True iff `hero` holds at least one role the team does not yet have.
    pub fn would_add_new_role(&self, hero: &str) -> bool {
        let team_roles = self.role_union();
        !self.facts.roles_of(hero).is_subset(&team_roles)
    }

    /// True iff `hero` can play `lane` and some pick is already tagged with it.
    pub fn would_duplicate_lane(&self, hero: &str, lane: Lane) -> bool {
        self.facts.has_lane(hero, lane) && self.is_lane_filled(lane)
    }

    pub fn has_damage_type(&self, dmg: DamageType) -> bool {
        self.heroes().any(|h| self.facts.has_damage_type(h, dmg))
    }

    /// Teams of zero or one pick count as balanced; otherwise the team needs
    /// at least one physical and one magic damage dealer.
    pub fn damage_balance(&self) -> DamageBalance {
        if self.team.len() <= 1
            || (self.has_damage_type(DamageType::Physical) && self.has_damage_type(DamageType::Magic))
        {
            DamageBalance::Balanced
        } else {
            DamageBalance::Unbalanced
        }
    }

    /// First hero tagged with `lane`, in pick order.
    pub fn hero_in_lane(&self, lane: Lane) -> Option<&'a str> {
        self.team
            .iter()
            .find(|p| p.is_tagged(lane))
            .map(|p| p.hero.as_str())
    }

    pub fn jungle_hero(&self) -> Option<&'a str> {
        self.hero_in_lane(Lane::Jungle)
    }

    pub fn roam_hero(&self) -> Option<&'a str> {
        self.hero_in_lane(Lane::Roam)
    }

    /// Valid when either slot is still open. With both filled, an assassin
    /// jungler needs a tank roamer and a tank or fighter jungler needs a
    /// support roamer; any other jungler is invalid.
    pub fn jungle_roam_validity(&self) -> Validity {
        let (Some(jungle), Some(roam)) = (self.jungle_hero(), self.roam_hero()) else {
            return Validity::Valid;
        };

        match recommended_roam_role(self.facts, jungle) {
            Some(role) => Validity::from_bool(self.facts.has_role(roam, role)),
            None => Validity::Invalid,
        }
    }

    /// Lanes with no tagged pick, in scan order.
    pub fn missing_lanes(&self) -> Vec<Lane> {
        Lane::ALL
            .into_iter()
            .filter(|&lane| self.is_lane_needed(lane))
            .collect()
    }
}
