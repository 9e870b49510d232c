// Request and response shapes exchanged with the calling layer.
//
// Field names are camelCase on the wire. `requestedLane` is kept as a raw
// string so that an unrecognized value still reaches the engine, where it
// behaves as a lane no hero can play.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::draft::hero::{Lane, Role};
use crate::draft::team::{DamageBalance, Validity};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    /// Banned hero ids.
    #[serde(default)]
    pub banned: Vec<String>,
    /// Enemy picks (hero ids, no lane tags).
    #[serde(default)]
    pub enemy: Vec<String>,
    /// Team picks in pick order, "hero" or "hero-lane".
    #[serde(default)]
    pub team: Vec<String>,
    /// Lane the next pick should fill.
    #[serde(alias = "user_lane")]
    pub requested_lane: String,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroRecommendation {
    pub hero: String,
    pub priority: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneValidation {
    pub valid: bool,
    pub missing_lanes: Vec<Lane>,
}

/// Composition summary of the requesting team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    /// Every role, including those with a zero count.
    pub role_counts: BTreeMap<Role, usize>,
    /// Every lane, counting explicit lane tags only.
    pub lane_counts: BTreeMap<Lane, usize>,
    pub role_diversity: usize,
    pub missing_lanes: Vec<Lane>,
    pub damage_balance: DamageBalance,
    pub jungle_roam_valid: Validity,
    pub lane_validation: LaneValidation,
}

/// Heroes recorded as countering one enemy pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnemyThreat {
    pub enemy: String,
    pub counters: Vec<String>,
}

/// Engine output. Opening picks carry only `recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub recommendations: Vec<HeroRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_analysis: Option<TeamAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enemy_threats: Option<Vec<EnemyThreat>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_missing_lists() {
        let req: DraftRequest = serde_json::from_str(r#"{"requestedLane":"gold"}"#).unwrap();
        assert!(req.banned.is_empty());
        assert!(req.enemy.is_empty());
        assert!(req.team.is_empty());
        assert_eq!(req.requested_lane, "gold");
    }

    #[test]
    fn request_accepts_user_lane_alias() {
        let req: DraftRequest = serde_json::from_str(
            r#"{"banned":["akai"],"enemy":["fanny"],"team":["angela-roam"],"user_lane":"mid"}"#,
        )
        .unwrap();
        assert_eq!(req.banned, vec!["akai"]);
        assert_eq!(req.team, vec!["angela-roam"]);
        assert_eq!(req.requested_lane, "mid");
    }

    #[test]
    fn request_keeps_unknown_lane_verbatim() {
        let req: DraftRequest = serde_json::from_str(r#"{"requestedLane":"top"}"#).unwrap();
        assert_eq!(req.requested_lane, "top");
    }

    #[test]
    fn opening_response_omits_analysis() {
        let resp = DraftResponse {
            recommendations: vec![HeroRecommendation {
                hero: "miya".into(),
                priority: 3.0,
                reasons: vec!["Flexible hero (score: 3)".into()],
            }],
            team_analysis: None,
            enemy_threats: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("teamAnalysis").is_none());
        assert!(json.get("enemyThreats").is_none());
        assert_eq!(json["recommendations"][0]["hero"], "miya");
    }

    #[test]
    fn team_analysis_serializes_camel_case_with_enum_keys() {
        let analysis = TeamAnalysis {
            role_counts: Role::ALL.into_iter().map(|r| (r, 0)).collect(),
            lane_counts: Lane::ALL.into_iter().map(|l| (l, 0)).collect(),
            role_diversity: 0,
            missing_lanes: Lane::ALL.to_vec(),
            damage_balance: DamageBalance::Balanced,
            jungle_roam_valid: Validity::Valid,
            lane_validation: LaneValidation {
                valid: false,
                missing_lanes: Lane::ALL.to_vec(),
            },
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["roleCounts"]["marksman"], 0);
        assert_eq!(json["laneCounts"]["exp"], 0);
        assert_eq!(json["damageBalance"], "balanced");
        assert_eq!(json["jungleRoamValid"], "valid");
        assert_eq!(json["laneValidation"]["missingLanes"][0], "gold");
    }
}
