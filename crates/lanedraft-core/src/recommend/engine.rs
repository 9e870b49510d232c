// Recommendation orchestration.
//
// Two modes, chosen from the draft state:
// - Opening pick (no enemy and no team picks): rank safe blind picks by
//   flexibility alone.
// - In-progress draft: filter available heroes for the requested lane, score
//   each one, and attach a team analysis and enemy threat report.
//
// Both modes sort by descending priority and break ties by ascending hero id,
// so results never depend on hash iteration order.

use std::cmp::Ordering;

use tracing::debug;

use crate::draft::hero::{Lane, Role};
use crate::draft::pick::Pick;
use crate::draft::state::DraftState;
use crate::draft::team::TeamAnalyzer;
use crate::facts::FactStore;
use crate::protocol::{
    DraftRequest, DraftResponse, EnemyThreat, HeroRecommendation, LaneValidation, TeamAnalysis,
};
use crate::recommend::scoring::score_hero;

/// Number of recommendations returned when no other limit is configured.
pub const DEFAULT_TOP_N: usize = 5;

/// Opening candidates need at least this many distinct roles plus lanes.
pub const OPENING_MIN_FLEXIBILITY: usize = 3;

/// Opening candidates recorded as countering more heroes than this are too
/// situational for a blind pick.
pub const OPENING_MAX_COUNTER_EXPOSURE: usize = 2;

/// Produces ranked pick recommendations against a shared fact store.
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    facts: &'a FactStore,
    top_n: usize,
}

impl<'a> Recommender<'a> {
    pub fn new(facts: &'a FactStore) -> Self {
        Recommender {
            facts,
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Limit the number of returned recommendations.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Entry point for a wire-level request.
    pub fn recommend(&self, request: &DraftRequest) -> DraftResponse {
        self.get_recommendation(&DraftState::from_request(request))
    }

    /// Dispatch to opening or in-progress mode and assemble the response.
    pub fn get_recommendation(&self, state: &DraftState) -> DraftResponse {
        if state.is_opening() {
            DraftResponse {
                recommendations: self.opening_picks(state),
                team_analysis: None,
                enemy_threats: None,
            }
        } else {
            DraftResponse {
                recommendations: self.draft_picks(state),
                team_analysis: Some(self.analyze_team(&state.team)),
                enemy_threats: Some(self.enemy_threats(&state.enemy)),
            }
        }
    }

    /// Blind-pick candidates: unbanned, able to play the requested lane,
    /// flexible enough and not too situational. Priority is the flexibility
    /// score itself.
    pub fn opening_picks(&self, state: &DraftState) -> Vec<HeroRecommendation> {
        let Some(lane) = state.requested_lane else {
            debug!("Opening pick requested for an unknown lane; no candidates");
            return Vec::new();
        };

        let candidates: Vec<HeroRecommendation> = self
            .facts
            .heroes()
            .filter(|hero| !state.is_banned(hero))
            .filter(|hero| self.facts.has_lane(hero, lane))
            .filter_map(|hero| {
                let flex = self.facts.flexibility_score(hero);
                let exposure = self.facts.counter_exposure(hero);
                if flex < OPENING_MIN_FLEXIBILITY || exposure > OPENING_MAX_COUNTER_EXPOSURE {
                    return None;
                }
                Some(HeroRecommendation {
                    hero: hero.to_string(),
                    priority: flex as f64,
                    reasons: vec![format!("Flexible hero (score: {flex})")],
                })
            })
            .collect();

        debug!("Opening pick for {}: {} candidates", lane, candidates.len());
        rank(candidates, self.top_n)
    }

    /// In-progress candidates: not banned, not picked by either side, able to
    /// play the requested lane without stacking it, scored in full.
    pub fn draft_picks(&self, state: &DraftState) -> Vec<HeroRecommendation> {
        let Some(lane) = state.requested_lane else {
            debug!("Draft pick requested for an unknown lane; no candidates");
            return Vec::new();
        };

        let team = TeamAnalyzer::new(self.facts, &state.team);
        let candidates: Vec<HeroRecommendation> = self
            .facts
            .heroes()
            .filter(|hero| !state.is_banned(hero) && !state.is_enemy(hero))
            .filter(|hero| !team.contains_hero(hero))
            .filter(|hero| self.facts.has_lane(hero, lane))
            .filter(|hero| !team.would_duplicate_lane(hero, lane))
            .map(|hero| {
                let score = score_hero(self.facts, hero, &state.enemy, &state.team, lane);
                HeroRecommendation {
                    hero: hero.to_string(),
                    priority: score.priority,
                    reasons: score.reasons,
                }
            })
            .collect();

        debug!(
            "Draft pick for {} ({} enemy, {} team): {} candidates",
            lane,
            state.enemy.len(),
            state.team.len(),
            candidates.len()
        );
        rank(candidates, self.top_n)
    }

    /// Composition summary of `team`.
    pub fn analyze_team(&self, team: &[Pick]) -> TeamAnalysis {
        let analyzer = TeamAnalyzer::new(self.facts, team);
        let missing_lanes = analyzer.missing_lanes();

        TeamAnalysis {
            role_counts: Role::ALL
                .into_iter()
                .map(|role| (role, analyzer.role_count(role)))
                .collect(),
            lane_counts: Lane::ALL
                .into_iter()
                .map(|lane| (lane, analyzer.lane_fill_count(lane)))
                .collect(),
            role_diversity: analyzer.unique_role_diversity(),
            damage_balance: analyzer.damage_balance(),
            jungle_roam_valid: analyzer.jungle_roam_validity(),
            lane_validation: LaneValidation {
                valid: missing_lanes.is_empty(),
                missing_lanes: missing_lanes.clone(),
            },
            missing_lanes,
        }
    }

    /// For each enemy pick, every hero recorded as countering it.
    pub fn enemy_threats(&self, enemy: &[String]) -> Vec<EnemyThreat> {
        enemy
            .iter()
            .map(|e| EnemyThreat {
                enemy: e.clone(),
                counters: self.facts.counters_of(e).to_vec(),
            })
            .collect()
    }
}

/// Sort descending by priority, ascending by hero id on ties, and keep the
/// first `top_n`.
fn rank(mut recs: Vec<HeroRecommendation>, top_n: usize) -> Vec<HeroRecommendation> {
    recs.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.hero.cmp(&b.hero))
    });
    recs.truncate(top_n);
    recs
}
