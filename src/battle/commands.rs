use crate::battle::state::{BattleEvent, BattleState, EventBus, GameState};
use crate::errors::BattleEngineError;
use crate::player::Side;

/// Atomic commands representing final state changes
#[derive(Debug, Clone, PartialEq)]
pub enum BattleCommand {
    // Combatant modifications
    DealDamage { target: Side, amount: u32 },
    SendOutNext { target: Side },

    // Direct state changes
    EndBattle { winner: Side },
    IncrementTurnNumber,

    // Narration
    EmitEvent(BattleEvent),
}

/// Error types for command execution
#[derive(Debug, PartialEq)]
pub enum ExecutionError {
    NoActiveCombatant(Side),
    NoReplacement(Side),
    BattleAlreadyFinished,
}

impl From<ExecutionError> for BattleEngineError {
    fn from(err: ExecutionError) -> Self {
        let details = match err {
            ExecutionError::NoActiveCombatant(side) => format!("no active combatant for {}", side),
            ExecutionError::NoReplacement(side) => {
                format!("{} has no member left to send out", side)
            }
            ExecutionError::BattleAlreadyFinished => "battle already finished".to_string(),
        };
        BattleEngineError::InconsistentState(details)
    }
}

/// Apply one command to the state. Events are pushed to the bus and their
/// narration appended to the battle log.
pub fn execute_command(
    command: BattleCommand,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    match command {
        BattleCommand::DealDamage { target, amount } => {
            let pokemon = state
                .team_mut(target)
                .active_mut()
                .ok_or(ExecutionError::NoActiveCombatant(target))?;
            pokemon.take_damage(amount);
        }
        BattleCommand::SendOutNext { target } => {
            if !state.team_mut(target).advance() {
                return Err(ExecutionError::NoReplacement(target));
            }
        }
        BattleCommand::EndBattle { winner } => {
            if state.is_finished() {
                return Err(ExecutionError::BattleAlreadyFinished);
            }
            state.game_state = GameState::Finished;
            state.winner = Some(winner);
        }
        BattleCommand::IncrementTurnNumber => {
            state.turn_number += 1;
        }
        BattleCommand::EmitEvent(event) => {
            if let Some(line) = event.format() {
                state.log.push(line);
            }
            bus.push(event);
        }
    }
    Ok(())
}

/// Apply commands in order, stopping at the first failure.
pub fn execute_command_batch(
    commands: Vec<BattleCommand>,
    state: &mut BattleState,
    bus: &mut EventBus,
) -> Result<(), ExecutionError> {
    for command in commands {
        execute_command(command, state, bus)?;
    }
    Ok(())
}
