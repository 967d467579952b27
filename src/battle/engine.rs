use crate::battle::ai::{Behavior, GreedyTypeAI};
use crate::battle::calculators::calculate_attack_outcome;
use crate::battle::commands::{execute_command_batch, BattleCommand};
use crate::battle::state::{BattleEvent, BattleState, EventBus, TurnRng};
use crate::errors::{BattleEngineError, BattleResult};
use crate::personas::GymLeader;
use crate::player::{Side, Team};

/// Trainer label used when the opponent sends out a replacement mid-battle.
const OPPONENT_LABEL: &str = "Opponent";

/// Build the initial state of a battle: both leads out, turn 1, and the
/// opening narration in the log.
pub fn start_battle(
    player_team: Team,
    opponent_team: Team,
    persona: Option<&GymLeader>,
) -> BattleResult<BattleState> {
    let mut state = BattleState::new(player_team, opponent_team);
    state.persona_id = persona.map(|leader| leader.id.to_string());

    let trainer = match persona {
        Some(leader) => format!("Gym Leader {}", leader.name),
        None => OPPONENT_LABEL.to_string(),
    };
    let opponent_lead = conscious_lead(&state, Side::Opponent)?;
    let player_lead = conscious_lead(&state, Side::Player)?;

    let commands = vec![
        BattleCommand::EmitEvent(BattleEvent::BattleStarted),
        BattleCommand::EmitEvent(BattleEvent::OpponentSentOut {
            trainer,
            pokemon: opponent_lead,
        }),
        BattleCommand::EmitEvent(BattleEvent::PlayerSentOut {
            pokemon: player_lead,
        }),
    ];
    execute_command_batch(commands, &mut state, &mut EventBus::new())?;

    tracing::info!(
        player_team_size = state.player_team.len(),
        opponent_team_size = state.opponent_team.len(),
        persona = state.persona_id.as_deref().unwrap_or("none"),
        "battle started"
    );
    Ok(state)
}

/// Main entry point for turn resolution, using the greedy opponent.
/// See [`apply_player_move_with`].
pub fn apply_player_move(
    battle_state: &mut BattleState,
    move_name: &str,
    rng: &mut TurnRng,
) -> BattleResult<EventBus> {
    apply_player_move_with(battle_state, move_name, rng, &GreedyTypeAI::new())
}

/// Resolve one turn: the player's move, then (if the target is still
/// standing) one counter-attack chosen by `opponent_ai`.
///
/// Returns the events of the turn; their narration is also appended to
/// `battle_state.log`. On a precondition failure nothing is mutated.
pub fn apply_player_move_with(
    battle_state: &mut BattleState,
    move_name: &str,
    rng: &mut TurnRng,
    opponent_ai: &dyn Behavior,
) -> BattleResult<EventBus> {
    validate_player_move(battle_state, move_name)?;

    let mut bus = EventBus::new();

    // 1. Player attack
    execute_attack(battle_state, Side::Player, move_name, rng, &mut bus)?;

    // 2. Counter-attack, only if the target survived
    if !check_for_faint(battle_state, Side::Opponent, &mut bus)? {
        let opponent_move = choose_opponent_move(battle_state, opponent_ai)?;
        execute_attack(battle_state, Side::Opponent, &opponent_move, rng, &mut bus)?;
        check_for_faint(battle_state, Side::Player, &mut bus)?;
    }

    // 3. The turn counter moves on however the turn ended
    finalize_turn(battle_state, &mut bus)?;

    Ok(bus)
}

/// Checks every precondition before any state is touched.
pub fn validate_player_move(battle_state: &BattleState, move_name: &str) -> BattleResult<()> {
    if battle_state.is_finished() {
        tracing::warn!(move_name, "move submitted after the battle finished");
        return Err(BattleEngineError::BattleFinished);
    }

    for side in [Side::Player, Side::Opponent] {
        let active = battle_state.team(side).active().ok_or_else(|| no_active(side))?;
        if active.is_fainted() {
            return Err(BattleEngineError::InconsistentState(format!(
                "{}'s active combatant {} has no HP left",
                side, active.name
            )));
        }
        if active.stats.defense < 1 {
            return Err(BattleEngineError::InvalidArgument(format!(
                "{} has a defense stat of 0",
                active.name
            )));
        }
    }

    let player = battle_state
        .player_team
        .active()
        .ok_or_else(|| no_active(Side::Player))?;
    if player.find_move(move_name).is_none() {
        tracing::warn!(pokemon = %player.name, move_name, "rejected unknown move");
        return Err(BattleEngineError::InvalidMove {
            pokemon: player.name.clone(),
            move_name: move_name.to_string(),
        });
    }

    Ok(())
}

fn choose_opponent_move(
    battle_state: &BattleState,
    opponent_ai: &dyn Behavior,
) -> BattleResult<String> {
    let opponent = battle_state
        .opponent_team
        .active()
        .ok_or_else(|| no_active(Side::Opponent))?;

    opponent_ai
        .choose_move(Side::Opponent, battle_state)
        .and_then(|index| opponent.moves.get(index))
        .or_else(|| opponent.moves.first())
        .map(|slot| slot.name.clone())
        .ok_or_else(|| BattleEngineError::NoMoves(opponent.name.clone()))
}

fn execute_attack(
    battle_state: &mut BattleState,
    attacker: Side,
    move_name: &str,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> BattleResult<()> {
    let commands = calculate_attack_outcome(battle_state, attacker, move_name, rng)?;
    execute_command_batch(commands, battle_state, bus)?;
    Ok(())
}

/// Handle a fainted active combatant on `side`: send out the next conscious
/// member in list order, or end the battle if there is none. Returns true if
/// a faint happened.
fn check_for_faint(
    battle_state: &mut BattleState,
    side: Side,
    bus: &mut EventBus,
) -> BattleResult<bool> {
    let team = battle_state.team(side);
    let fainted = team.active().ok_or_else(|| no_active(side))?;
    if !fainted.is_fainted() {
        return Ok(false);
    }

    let mut commands = vec![BattleCommand::EmitEvent(BattleEvent::PokemonFainted {
        side,
        pokemon: fainted.name.clone(),
    })];

    match team.next_in_line() {
        Some(next) => {
            let sent_out = match side {
                Side::Opponent => BattleEvent::OpponentSentOut {
                    trainer: OPPONENT_LABEL.to_string(),
                    pokemon: next.name.clone(),
                },
                Side::Player => BattleEvent::PlayerSentOut {
                    pokemon: next.name.clone(),
                },
            };
            commands.push(BattleCommand::SendOutNext { target: side });
            commands.push(BattleCommand::EmitEvent(sent_out));
        }
        None => {
            let winner = side.opponent();
            tracing::info!(%winner, turn = battle_state.turn_number, "battle finished");
            commands.push(BattleCommand::EndBattle { winner });
            commands.push(BattleCommand::EmitEvent(BattleEvent::BattleEnded { winner }));
        }
    }

    execute_command_batch(commands, battle_state, bus)?;
    Ok(true)
}

fn finalize_turn(battle_state: &mut BattleState, bus: &mut EventBus) -> BattleResult<()> {
    let turn_number = battle_state.turn_number;
    let commands = vec![
        BattleCommand::IncrementTurnNumber,
        BattleCommand::EmitEvent(BattleEvent::TurnEnded { turn_number }),
    ];
    execute_command_batch(commands, battle_state, bus)?;
    tracing::debug!(turn_number, finished = battle_state.is_finished(), "turn resolved");
    Ok(())
}

/// A battle may only open with leads that can still fight.
fn conscious_lead(battle_state: &BattleState, side: Side) -> BattleResult<String> {
    let lead = battle_state.team(side).active().ok_or_else(|| no_active(side))?;
    if lead.is_fainted() {
        return Err(BattleEngineError::InvalidArgument(format!(
            "{}'s lead {} has no HP left",
            side, lead.name
        )));
    }
    Ok(lead.name.clone())
}

fn no_active(side: Side) -> BattleEngineError {
    BattleEngineError::InconsistentState(format!("no active combatant for {}", side))
}
