// Hero fact store: parsing of declarative fact sources and read-only lookups.
//
// Sources hold one declaration per line, `predicate(arg1, arg2, ...).`.
// Recognized predicates are hero/1, role-of/2, lane-of/2, damage-type-of/2,
// counters/2 (attacker, victim) and synergy/2 (unordered pair). Any other
// line is skipped without error. Once built, a store is never mutated.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::draft::hero::{DamageType, Lane, Role};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("fact source not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read fact source {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Parsed declarations
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
enum Fact<'a> {
    Hero(&'a str),
    RoleOf(&'a str, Role),
    LaneOf(&'a str, Lane),
    DamageTypeOf(&'a str, DamageType),
    Counters(&'a str, &'a str),
    Synergy(&'a str, &'a str),
}

#[derive(Debug, PartialEq)]
enum Line<'a> {
    Fact(Fact<'a>),
    /// Blank line or `%` comment.
    Blank,
    /// Anything else: unknown predicate, wrong arity, bad enum value.
    Skipped,
}

fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('%') {
        return Line::Blank;
    }
    match parse_fact(line) {
        Some(fact) => Line::Fact(fact),
        None => Line::Skipped,
    }
}

fn parse_fact(line: &str) -> Option<Fact<'_>> {
    let body = line.strip_suffix(").")?;
    let (predicate, args) = body.split_once('(')?;
    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    if args.iter().any(|a| a.is_empty()) {
        return None;
    }

    match (predicate, args.as_slice()) {
        ("hero", &[hero]) => Some(Fact::Hero(hero)),
        ("role-of", &[hero, role]) => Role::from_str_role(role).map(|r| Fact::RoleOf(hero, r)),
        ("lane-of", &[hero, lane]) => Lane::from_str_lane(lane).map(|l| Fact::LaneOf(hero, l)),
        ("damage-type-of", &[hero, dmg]) => {
            DamageType::from_str_damage(dmg).map(|d| Fact::DamageTypeOf(hero, d))
        }
        ("counters", &[attacker, victim]) => Some(Fact::Counters(attacker, victim)),
        ("synergy", &[a, b]) => Some(Fact::Synergy(a, b)),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Load summary
// ---------------------------------------------------------------------------

/// Counts of what a load produced, including lines that were skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub heroes: usize,
    pub role_memberships: usize,
    pub lane_memberships: usize,
    pub damage_memberships: usize,
    pub counters: usize,
    pub synergies: usize,
    /// Non-blank, non-comment lines that matched no recognized declaration.
    pub skipped_lines: usize,
}

// ---------------------------------------------------------------------------
// FactStore
// ---------------------------------------------------------------------------

static NO_ROLES: BTreeSet<Role> = BTreeSet::new();
static NO_LANES: BTreeSet<Lane> = BTreeSet::new();
static NO_DAMAGE: BTreeSet<DamageType> = BTreeSet::new();

/// Immutable hero relations. Built once, then shared read-only (it is
/// `Send + Sync`, so an `Arc<FactStore>` can serve any number of threads).
#[derive(Debug, Default)]
pub struct FactStore {
    heroes: BTreeSet<String>,
    roles: HashMap<String, BTreeSet<Role>>,
    lanes: HashMap<String, BTreeSet<Lane>>,
    damage_types: HashMap<String, BTreeSet<DamageType>>,
    /// attacker -> victims, for exact directed lookups.
    counters_by_attacker: HashMap<String, HashSet<String>>,
    /// attacker -> number of recorded relations (duplicates included).
    counter_exposure: HashMap<String, usize>,
    /// victim -> attackers in declaration order.
    counters_by_victim: HashMap<String, Vec<String>>,
    /// Both directions of every synergy pair.
    synergy: HashMap<String, HashSet<String>>,
    summary: LoadSummary,
}

impl FactStore {
    /// Read every source file and build the store.
    ///
    /// Every listed source is required: a missing or unreadable file fails the
    /// whole load. Malformed lines inside a readable file are skipped and only
    /// counted in [`LoadSummary::skipped_lines`].
    pub fn load<P: AsRef<Path>>(sources: &[P]) -> Result<Self, DataLoadError> {
        let mut store = FactStore::default();

        for source in sources {
            let path = source.as_ref();
            let text = read_source(path)?;
            let before = store.summary;
            store.ingest(&text);
            let after = store.summary;
            info!(
                "Loaded {}: {} heroes, {} roles, {} lanes, {} damage types, {} counters, {} synergies",
                path.display(),
                after.heroes - before.heroes,
                after.role_memberships - before.role_memberships,
                after.lane_memberships - before.lane_memberships,
                after.damage_memberships - before.damage_memberships,
                after.counters - before.counters,
                after.synergies - before.synergies,
            );
        }

        if store.summary.skipped_lines > 0 {
            warn!(
                "{} fact line(s) did not match a recognized declaration and were skipped",
                store.summary.skipped_lines
            );
        }

        Ok(store)
    }

    /// Build a store from in-memory source texts.
    pub fn from_sources<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut store = FactStore::default();
        for text in sources {
            store.ingest(text);
        }
        store
    }

    fn ingest(&mut self, text: &str) {
        for raw in text.lines() {
            match classify_line(raw) {
                Line::Fact(fact) => self.insert(fact),
                Line::Blank => {}
                Line::Skipped => self.summary.skipped_lines += 1,
            }
        }
    }

    fn insert(&mut self, fact: Fact<'_>) {
        match fact {
            Fact::Hero(hero) => {
                if self.heroes.insert(hero.to_string()) {
                    self.summary.heroes += 1;
                }
            }
            Fact::RoleOf(hero, role) => {
                if self.roles.entry(hero.to_string()).or_default().insert(role) {
                    self.summary.role_memberships += 1;
                }
            }
            Fact::LaneOf(hero, lane) => {
                if self.lanes.entry(hero.to_string()).or_default().insert(lane) {
                    self.summary.lane_memberships += 1;
                }
            }
            Fact::DamageTypeOf(hero, dmg) => {
                if self.damage_types.entry(hero.to_string()).or_default().insert(dmg) {
                    self.summary.damage_memberships += 1;
                }
            }
            Fact::Counters(attacker, victim) => {
                self.counters_by_attacker
                    .entry(attacker.to_string())
                    .or_default()
                    .insert(victim.to_string());
                *self.counter_exposure.entry(attacker.to_string()).or_insert(0) += 1;
                self.counters_by_victim
                    .entry(victim.to_string())
                    .or_default()
                    .push(attacker.to_string());
                self.summary.counters += 1;
            }
            Fact::Synergy(a, b) => {
                self.synergy.entry(a.to_string()).or_default().insert(b.to_string());
                self.synergy.entry(b.to_string()).or_default().insert(a.to_string());
                self.summary.synergies += 1;
            }
        }
    }

    // -- Queries ------------------------------------------------------------

    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    pub fn has_hero(&self, hero: &str) -> bool {
        self.heroes.contains(hero)
    }

    /// All declared heroes, ascending by identifier.
    pub fn heroes(&self) -> impl Iterator<Item = &str> {
        self.heroes.iter().map(String::as_str)
    }

    pub fn hero_count(&self) -> usize {
        self.heroes.len()
    }

    pub fn roles_of(&self, hero: &str) -> &BTreeSet<Role> {
        self.roles.get(hero).unwrap_or(&NO_ROLES)
    }

    pub fn lanes_of(&self, hero: &str) -> &BTreeSet<Lane> {
        self.lanes.get(hero).unwrap_or(&NO_LANES)
    }

    pub fn damage_types_of(&self, hero: &str) -> &BTreeSet<DamageType> {
        self.damage_types.get(hero).unwrap_or(&NO_DAMAGE)
    }

    pub fn has_role(&self, hero: &str, role: Role) -> bool {
        self.roles_of(hero).contains(&role)
    }

    pub fn has_lane(&self, hero: &str, lane: Lane) -> bool {
        self.lanes_of(hero).contains(&lane)
    }

    pub fn has_damage_type(&self, hero: &str, dmg: DamageType) -> bool {
        self.damage_types_of(hero).contains(&dmg)
    }

    /// Whether `attacker` is recorded as countering `victim` (directed).
    pub fn is_counter(&self, attacker: &str, victim: &str) -> bool {
        self.counters_by_attacker
            .get(attacker)
            .is_some_and(|victims| victims.contains(victim))
    }

    /// Whether `a` and `b` form a synergy pair, in either declared order.
    pub fn is_synergy(&self, a: &str, b: &str) -> bool {
        self.synergy.get(a).is_some_and(|partners| partners.contains(b))
    }

    /// Heroes recorded as countering `victim`, in declaration order.
    pub fn counters_of(&self, victim: &str) -> &[String] {
        self.counters_by_victim
            .get(victim)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of counter relations in which `hero` is the attacker.
    pub fn counter_exposure(&self, hero: &str) -> usize {
        self.counter_exposure.get(hero).copied().unwrap_or(0)
    }

    /// Distinct role count plus distinct lane count.
    pub fn flexibility_score(&self, hero: &str) -> usize {
        self.roles_of(hero).len() + self.lanes_of(hero).len()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_source(path: &Path) -> Result<String, DataLoadError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DataLoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DataLoadError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
% heroes
hero(tigreal).
hero(fanny).
hero(lylia).

role-of(tigreal, tank).
role-of(fanny, assassin).
role-of(lylia, mage).
lane-of(tigreal, roam).
lane-of(fanny, jungle).
lane-of(lylia, mid).
lane-of(lylia, gold).
damage-type-of(tigreal, physical).
damage-type-of(lylia, magic).
counters(tigreal, fanny).
counters(saber, fanny).
synergy(tigreal, lylia).
";

    #[test]
    fn parses_each_predicate() {
        let store = FactStore::from_sources([SAMPLE]);
        assert_eq!(store.hero_count(), 3);
        assert!(store.has_hero("fanny"));
        assert!(store.has_role("tigreal", Role::Tank));
        assert!(store.has_lane("lylia", Lane::Gold));
        assert!(store.has_damage_type("lylia", DamageType::Magic));
        assert!(store.is_counter("tigreal", "fanny"));
        assert!(store.is_synergy("tigreal", "lylia"));
    }

    #[test]
    fn counter_lookup_is_directed() {
        let store = FactStore::from_sources([SAMPLE]);
        assert!(store.is_counter("tigreal", "fanny"));
        assert!(!store.is_counter("fanny", "tigreal"));
    }

    #[test]
    fn synergy_lookup_is_symmetric() {
        let store = FactStore::from_sources([SAMPLE]);
        assert!(store.is_synergy("lylia", "tigreal"));
        assert!(!store.is_synergy("lylia", "fanny"));
    }

    #[test]
    fn dangling_references_are_inert() {
        let store = FactStore::from_sources([SAMPLE]);
        // saber is never declared as a hero, but the relation is recorded.
        assert!(!store.has_hero("saber"));
        assert_eq!(store.counters_of("fanny"), &["tigreal".to_string(), "saber".to_string()]);
        assert!(store.heroes().all(|h| h != "saber"));
    }

    #[test]
    fn malformed_lines_are_skipped_and_counted() {
        let text = "\
hero(ok).
hero(a, b).
role-of(ok).
role-of(ok, healer).
lane-of(ok, top).
unknown(ok).
hero(missing_dot)
hero().

% comment
";
        let store = FactStore::from_sources([text]);
        assert_eq!(store.hero_count(), 1);
        assert!(store.roles_of("ok").is_empty());
        assert!(store.lanes_of("ok").is_empty());
        assert_eq!(store.summary().skipped_lines, 7);
    }

    #[test]
    fn arguments_are_trimmed() {
        let store = FactStore::from_sources(["  role-of(  hayabusa ,assassin  ).  "]);
        assert!(store.has_role("hayabusa", Role::Assassin));
    }

    #[test]
    fn memberships_are_sets() {
        let text = "role-of(x, tank).\nrole-of(x, tank).\nlane-of(x, roam).\n";
        let store = FactStore::from_sources([text]);
        assert_eq!(store.roles_of("x").len(), 1);
        assert_eq!(store.flexibility_score("x"), 2);
        assert_eq!(store.summary().role_memberships, 1);
    }

    #[test]
    fn counter_exposure_counts_duplicates() {
        let text = "counters(a, b).\ncounters(a, b).\ncounters(a, c).\n";
        let store = FactStore::from_sources([text]);
        assert_eq!(store.counter_exposure("a"), 3);
        assert_eq!(store.counter_exposure("b"), 0);
    }

    #[test]
    fn heroes_iterate_in_id_order() {
        let store = FactStore::from_sources(["hero(zilong).\nhero(alucard).\nhero(miya).\n"]);
        let heroes: Vec<&str> = store.heroes().collect();
        assert_eq!(heroes, vec!["alucard", "miya", "zilong"]);
    }

    #[test]
    fn unknown_hero_has_empty_memberships() {
        let store = FactStore::from_sources([SAMPLE]);
        assert!(store.roles_of("nobody").is_empty());
        assert!(store.lanes_of("nobody").is_empty());
        assert!(store.damage_types_of("nobody").is_empty());
        assert_eq!(store.flexibility_score("nobody"), 0);
        assert!(store.counters_of("nobody").is_empty());
    }

    #[test]
    fn load_missing_source_is_not_found() {
        let missing = std::env::temp_dir().join("lanedraft_facts_missing/hero.pl");
        let err = FactStore::load(&[missing]).unwrap_err();
        match err {
            DataLoadError::NotFound { path } => assert!(path.ends_with("hero.pl")),
            other => panic!("expected NotFound, got: {other}"),
        }
    }

    #[test]
    fn load_reads_multiple_sources() {
        let dir = std::env::temp_dir().join("lanedraft_facts_load_multi");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("hero.pl"), "hero(miya).\n").unwrap();
        std::fs::write(dir.join("lane.pl"), "lane-of(miya, gold).\nbogus.\n").unwrap();

        let store = FactStore::load(&[dir.join("hero.pl"), dir.join("lane.pl")]).unwrap();
        assert!(store.has_hero("miya"));
        assert!(store.has_lane("miya", Lane::Gold));
        assert_eq!(store.summary().skipped_lines, 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn store_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FactStore>();
    }
}
