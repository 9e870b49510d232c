// Team pick tokens of the form "hero" or "hero-lane".

use std::fmt;

use super::hero::Lane;

/// A single teammate pick, optionally tagged with the lane it occupies.
///
/// The lane tag is informational: it records where the teammate is slotted and
/// is never checked against the hero's playable lanes. A tag that is not one of
/// the five lanes is kept verbatim but never fills a lane slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub hero: String,
    pub lane_tag: Option<String>,
}

impl Pick {
    /// Split a token on its first `-`. "angela-roam" -> (angela, Some(roam)),
    /// "angela" -> (angela, None).
    pub fn parse(token: &str) -> Self {
        match token.split_once('-') {
            Some((hero, lane)) => Pick {
                hero: hero.to_string(),
                lane_tag: Some(lane.to_string()),
            },
            None => Pick {
                hero: token.to_string(),
                lane_tag: None,
            },
        }
    }

    /// The tagged lane, if the tag names one of the five lanes.
    pub fn lane(&self) -> Option<Lane> {
        self.lane_tag.as_deref().and_then(Lane::from_str_lane)
    }

    /// Whether this pick is explicitly tagged with `lane`.
    pub fn is_tagged(&self, lane: Lane) -> bool {
        self.lane() == Some(lane)
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lane_tag {
            Some(lane) => write!(f, "{}-{}", self.hero, lane),
            None => write!(f, "{}", self.hero),
        }
    }
}

/// Parse every token of a team list, preserving pick order.
pub fn parse_team(tokens: &[String]) -> Vec<Pick> {
    tokens.iter().map(|t| Pick::parse(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_pick() {
        let pick = Pick::parse("tigreal");
        assert_eq!(pick.hero, "tigreal");
        assert_eq!(pick.lane_tag, None);
        assert_eq!(pick.lane(), None);
    }

    #[test]
    fn tagged_pick() {
        let pick = Pick::parse("angela-roam");
        assert_eq!(pick.hero, "angela");
        assert_eq!(pick.lane(), Some(Lane::Roam));
        assert!(pick.is_tagged(Lane::Roam));
        assert!(!pick.is_tagged(Lane::Mid));
    }

    #[test]
    fn splits_on_first_dash_only() {
        let pick = Pick::parse("harith-mid-extra");
        assert_eq!(pick.hero, "harith");
        assert_eq!(pick.lane_tag.as_deref(), Some("mid-extra"));
        assert_eq!(pick.lane(), None);
    }

    #[test]
    fn unknown_tag_is_kept_but_fills_nothing() {
        let pick = Pick::parse("layla-top");
        assert_eq!(pick.lane_tag.as_deref(), Some("top"));
        assert!(Lane::ALL.iter().all(|&l| !pick.is_tagged(l)));
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(Pick::parse("akai-jungle").to_string(), "akai-jungle");
        assert_eq!(Pick::parse("akai").to_string(), "akai");
    }

    #[test]
    fn parse_team_preserves_order() {
        let tokens = vec!["a-gold".to_string(), "b".to_string(), "c-mid".to_string()];
        let team = parse_team(&tokens);
        let heroes: Vec<&str> = team.iter().map(|p| p.hero.as_str()).collect();
        assert_eq!(heroes, vec!["a", "b", "c"]);
    }
}
