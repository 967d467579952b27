use crate::battle::engine::start_battle;
use crate::battle::state::BattleState;
use crate::config::BattleConfig;
use crate::errors::{BattleEngineError, BattleResult};
use crate::personas::find_gym_leader;
use crate::player::Team;
use crate::pokemon::{Combatant, CombatantTemplate};
use rand::Rng;
use std::collections::BTreeMap;
use std::sync::LazyLock;

const ROSTER_DATA: &str = include_str!("../data/roster.ron");

// Lazy-loaded roster, keyed by Pokédex id
static ROSTER: LazyLock<BattleResult<BTreeMap<u32, CombatantTemplate>>> =
    LazyLock::new(|| parse_roster(ROSTER_DATA));

/// Parse a RON list of combatant templates into a map keyed by id.
pub fn parse_roster(content: &str) -> BattleResult<BTreeMap<u32, CombatantTemplate>> {
    let templates: Vec<CombatantTemplate> =
        ron::from_str(content).map_err(|e| BattleEngineError::RosterData(e.to_string()))?;

    let mut roster = BTreeMap::new();
    for template in templates {
        let id = template.id;
        if roster.insert(id, template).is_some() {
            return Err(BattleEngineError::RosterData(format!("duplicate id #{}", id)));
        }
    }
    Ok(roster)
}

fn roster() -> BattleResult<&'static BTreeMap<u32, CombatantTemplate>> {
    ROSTER.as_ref().map_err(Clone::clone)
}

/// Get the raw template for a Pokédex id
pub fn get_template(id: u32) -> BattleResult<&'static CombatantTemplate> {
    roster()?.get(&id).ok_or(BattleEngineError::UnknownSpecies(id))
}

/// Every id in the roster, ascending
pub fn roster_ids() -> BattleResult<Vec<u32>> {
    Ok(roster()?.keys().copied().collect())
}

/// Build a battle-ready team from Pokédex ids, lead first.
/// Ids past `config.max_team_size` are dropped.
pub fn create_team(ids: &[u32], config: &BattleConfig) -> BattleResult<Team> {
    let members = ids
        .iter()
        .take(config.max_team_size)
        .map(|&id| Combatant::from_template(get_template(id)?, config))
        .collect::<BattleResult<Vec<_>>>()?;
    Team::new(members)
}

/// Start a battle against one of the gym leaders.
pub fn create_gym_battle(
    player_ids: &[u32],
    leader_id: &str,
    config: &BattleConfig,
) -> BattleResult<BattleState> {
    let leader = find_gym_leader(leader_id)?;
    let player_team = create_team(player_ids, config)?;
    let opponent_team = create_team(&leader.team, config)?;
    start_battle(player_team, opponent_team, Some(leader))
}

/// Start a battle against a random team of comparable size: at least
/// `config.min_random_team_size` members, more if the player brings more.
/// Members are drawn independently, so repeats are possible.
pub fn create_random_battle<R: Rng + ?Sized>(
    player_ids: &[u32],
    config: &BattleConfig,
    rng: &mut R,
) -> BattleResult<BattleState> {
    let player_team = create_team(player_ids, config)?;

    let pool = roster_ids()?;
    if pool.is_empty() {
        return Err(BattleEngineError::RosterData("roster is empty".to_string()));
    }
    let opponent_size = config
        .min_random_team_size
        .max(player_team.len())
        .min(config.max_team_size);
    let opponent_ids: Vec<u32> = (0..opponent_size)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();
    tracing::debug!(?opponent_ids, "random opponent team drawn");

    let opponent_team = create_team(&opponent_ids, config)?;
    start_battle(player_team, opponent_team, None)
}
