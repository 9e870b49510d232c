// Closed hero attribute categories: roles, lanes and damage types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Combat role a hero can fill. A hero may hold several roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Fighter,
    Assassin,
    Mage,
    Marksman,
    Support,
}

impl Role {
    /// All roles in canonical order.
    pub const ALL: [Role; 6] = [
        Role::Tank,
        Role::Fighter,
        Role::Assassin,
        Role::Mage,
        Role::Marksman,
        Role::Support,
    ];

    /// Parse a role identifier as it appears in fact sources ("tank", "mage", ...).
    /// Matching is exact; anything else yields `None`.
    pub fn from_str_role(s: &str) -> Option<Self> {
        match s {
            "tank" => Some(Role::Tank),
            "fighter" => Some(Role::Fighter),
            "assassin" => Some(Role::Assassin),
            "mage" => Some(Role::Mage),
            "marksman" => Some(Role::Marksman),
            "support" => Some(Role::Support),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Fighter => "fighter",
            Role::Assassin => "assassin",
            Role::Mage => "mage",
            Role::Marksman => "marksman",
            Role::Support => "support",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Lane
// ---------------------------------------------------------------------------

/// One of the five map lanes a team must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Gold,
    Jungle,
    Roam,
    Mid,
    Exp,
}

impl Lane {
    /// All lanes in the fixed scan order used by scoring and analysis:
    /// gold, jungle, roam, mid, exp.
    pub const ALL: [Lane; 5] = [Lane::Gold, Lane::Jungle, Lane::Roam, Lane::Mid, Lane::Exp];

    /// Parse a lane identifier ("gold", "jungle", "roam", "mid", "exp").
    pub fn from_str_lane(s: &str) -> Option<Self> {
        match s {
            "gold" => Some(Lane::Gold),
            "jungle" => Some(Lane::Jungle),
            "roam" => Some(Lane::Roam),
            "mid" => Some(Lane::Mid),
            "exp" => Some(Lane::Exp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Gold => "gold",
            Lane::Jungle => "jungle",
            Lane::Roam => "roam",
            Lane::Mid => "mid",
            Lane::Exp => "exp",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Damage type
// ---------------------------------------------------------------------------

/// Kind of damage a hero deals. Only `Physical` and `Magic` feed into
/// damage-balance checks; `True` is carried but never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageType {
    Physical,
    Magic,
    True,
}

impl DamageType {
    pub fn from_str_damage(s: &str) -> Option<Self> {
        match s {
            "physical" => Some(DamageType::Physical),
            "magic" => Some(DamageType::Magic),
            "true" => Some(DamageType::True),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magic => "magic",
            DamageType::True => "true",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
