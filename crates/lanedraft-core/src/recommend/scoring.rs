// Candidate priority scoring.
//
// Each candidate starts at a base priority and collects bonuses for
// countering the enemy, filling open lanes, adding role variety, completing a
// jungle/roam pairing, synergy with teammates, fixing the damage mix and
// general flexibility. A lane-duplication penalty backs up the candidate
// filter. Terms are evaluated in a fixed order and every nonzero term leaves
// a reason string.

use crate::draft::hero::{DamageType, Lane, Role};
use crate::draft::pick::Pick;
use crate::draft::team::{recommended_roam_role, TeamAnalyzer};
use crate::facts::FactStore;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

pub const BASE_PRIORITY: f64 = 10.0;
pub const COUNTER_BONUS: i32 = 20;
pub const REQUESTED_LANE_BONUS: i32 = 25;
pub const OPEN_LANE_BONUS: i32 = 20;
pub const ROLE_DIVERSITY_CEILING: i32 = 20;
pub const ROLE_DIVERSITY_DECAY: i32 = 3;
pub const JUNGLE_ROAM_BONUS: i32 = 15;
pub const SYNERGY_BONUS: i32 = 10;
pub const DAMAGE_GAP_BONUS: i32 = 8;
pub const FLEXIBILITY_MULTIPLIER: i32 = 2;
pub const LANE_DUPLICATION_PENALTY: i32 = -50;

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// Priority of a candidate and the reasons behind it, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub priority: f64,
    pub reasons: Vec<String>,
}

impl Score {
    fn base() -> Self {
        Score {
            priority: BASE_PRIORITY,
            reasons: Vec::new(),
        }
    }

    fn add(&mut self, points: i32, reason: impl FnOnce(i32) -> String) {
        if points != 0 {
            self.push(points, reason);
        }
    }

    /// Record a term and its reason even when it contributes nothing.
    fn push(&mut self, points: i32, reason: impl FnOnce(i32) -> String) {
        self.priority += f64::from(points);
        self.reasons.push(reason(points));
    }
}

/// Score `hero` as the next pick for `requested_lane`.
///
/// Deterministic and side-effect free; the result is unclamped and may be
/// negative.
pub fn score_hero(
    facts: &FactStore,
    hero: &str,
    enemy: &[String],
    team: &[Pick],
    requested_lane: Lane,
) -> Score {
    let analyzer = TeamAnalyzer::new(facts, team);
    let mut score = Score::base();

    score.add(counter_bonus(facts, hero, enemy), |p| {
        format!("Counter pick against enemy (+{p})")
    });
    score.add(needed_lane_bonus(facts, &analyzer, hero, requested_lane), |p| {
        format!("Fills a needed lane (+{p})")
    });
    score.add(role_diversity_bonus(&analyzer, hero), |p| {
        format!("Adds role variety (+{p})")
    });
    score.add(jungle_roam_bonus(facts, &analyzer, hero, requested_lane), |p| {
        format!("Good jungle-roam combination (+{p})")
    });
    score.add(synergy_bonus(facts, &analyzer, hero), |p| {
        format!("Good synergy with team (+{p})")
    });
    score.add(damage_balance_bonus(facts, &analyzer, hero), |p| {
        format!("Balances damage types (+{p})")
    });
    score.push(flexibility_bonus(facts, hero), |p| format!("Flexible hero (+{p})"));
    score.add(lane_duplication_penalty(&analyzer, hero, requested_lane), |p| {
        format!("WARNING: lane duplication ({p})")
    });

    score
}

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// +20 when `hero` counters at least one enemy pick.
pub fn counter_bonus(facts: &FactStore, hero: &str, enemy: &[String]) -> i32 {
    if enemy.iter().any(|e| facts.is_counter(hero, e)) {
        COUNTER_BONUS
    } else {
        0
    }
}

/// +25 when `hero` can take the requested lane and it is still open.
/// Otherwise +20 for the first open lane (scan order) the hero can play.
pub fn needed_lane_bonus(
    facts: &FactStore,
    team: &TeamAnalyzer<'_>,
    hero: &str,
    requested_lane: Lane,
) -> i32 {
    if facts.has_lane(hero, requested_lane) && team.is_lane_needed(requested_lane) {
        return REQUESTED_LANE_BONUS;
    }

    let fills_open_lane = Lane::ALL
        .into_iter()
        .any(|lane| facts.has_lane(hero, lane) && team.is_lane_needed(lane));
    if fills_open_lane {
        OPEN_LANE_BONUS
    } else {
        0
    }
}

/// `max(0, 20 - 3 * diversity)` when `hero` brings a role the team lacks,
/// where diversity is measured before adding the hero.
pub fn role_diversity_bonus(team: &TeamAnalyzer<'_>, hero: &str) -> i32 {
    if !team.would_add_new_role(hero) {
        return 0;
    }
    let diversity = i32::try_from(team.unique_role_diversity()).unwrap_or(i32::MAX);
    ROLE_DIVERSITY_CEILING
        .saturating_sub(ROLE_DIVERSITY_DECAY.saturating_mul(diversity))
        .max(0)
}

/// +15 when `hero` completes a recommended jungle/roam pairing for the
/// requested lane. Only the requested lane is considered, never the hero's
/// other lanes.
pub fn jungle_roam_bonus(
    facts: &FactStore,
    team: &TeamAnalyzer<'_>,
    hero: &str,
    requested_lane: Lane,
) -> i32 {
    let pairs = match requested_lane {
        Lane::Roam => team
            .jungle_hero()
            .and_then(|jungle| recommended_roam_role(facts, jungle))
            .is_some_and(|role| facts.has_role(hero, role)),
        Lane::Jungle => team.roam_hero().is_some_and(|roam| {
            (facts.has_role(roam, Role::Tank) && facts.has_role(hero, Role::Assassin))
                || (facts.has_role(roam, Role::Support)
                    && (facts.has_role(hero, Role::Tank) || facts.has_role(hero, Role::Fighter)))
        }),
        Lane::Gold | Lane::Mid | Lane::Exp => false,
    };

    if pairs {
        JUNGLE_ROAM_BONUS
    } else {
        0
    }
}

/// +10 when `hero` has a synergy pair with any current teammate.
pub fn synergy_bonus(facts: &FactStore, team: &TeamAnalyzer<'_>, hero: &str) -> i32 {
    let has_partner = team
        .picks()
        .iter()
        .any(|p| facts.is_synergy(hero, &p.hero));
    if has_partner {
        SYNERGY_BONUS
    } else {
        0
    }
}

/// +8 for each of magic and physical that the team lacks and `hero` deals.
pub fn damage_balance_bonus(facts: &FactStore, team: &TeamAnalyzer<'_>, hero: &str) -> i32 {
    [DamageType::Magic, DamageType::Physical]
        .into_iter()
        .filter(|&dmg| !team.has_damage_type(dmg) && facts.has_damage_type(hero, dmg))
        .map(|_| DAMAGE_GAP_BONUS)
        .sum()
}

/// Twice the hero's flexibility score (distinct roles + distinct lanes).
pub fn flexibility_bonus(facts: &FactStore, hero: &str) -> i32 {
    let flex = i32::try_from(facts.flexibility_score(hero)).unwrap_or(i32::MAX);
    FLEXIBILITY_MULTIPLIER.saturating_mul(flex)
}

/// -50 if taking `hero` at the requested lane would stack two picks there.
pub fn lane_duplication_penalty(team: &TeamAnalyzer<'_>, hero: &str, requested_lane: Lane) -> i32 {
    if team.would_duplicate_lane(hero, requested_lane) {
        LANE_DUPLICATION_PENALTY
    } else {
        0
    }
}
