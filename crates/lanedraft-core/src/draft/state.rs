// Request-scoped draft state: bans, enemy picks, team picks, requested lane.

use super::hero::Lane;
use super::pick::{parse_team, Pick};
use crate::protocol::DraftRequest;

/// The draft as seen by one recommendation request. Built per call and
/// discarded afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftState {
    pub banned: Vec<String>,
    pub enemy: Vec<String>,
    /// Team picks in pick order. Duplicates are kept as given.
    pub team: Vec<Pick>,
    /// `None` when the requested lane is not one of the five lanes; no hero
    /// can fill it, so every candidate pool comes out empty.
    pub requested_lane: Option<Lane>,
}

impl DraftState {
    pub fn from_request(request: &DraftRequest) -> Self {
        DraftState {
            banned: request.banned.clone(),
            enemy: request.enemy.clone(),
            team: parse_team(&request.team),
            requested_lane: Lane::from_str_lane(&request.requested_lane),
        }
    }

    /// A draft with no enemy and no team picks yet is an opening pick.
    pub fn is_opening(&self) -> bool {
        self.enemy.is_empty() && self.team.is_empty()
    }

    pub fn is_banned(&self, hero: &str) -> bool {
        self.banned.iter().any(|b| b == hero)
    }

    pub fn is_enemy(&self, hero: &str) -> bool {
        self.enemy.iter().any(|e| e == hero)
    }
}
