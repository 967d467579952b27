//! A module for defining AI behaviors for battle opponents.

use crate::battle::state::BattleState;
use crate::player::Side;
use ordered_float::OrderedFloat;
use schema::PokemonType;

/// A trait for any system that can decide which move a side uses.
pub trait Behavior {
    /// Inspects the battle state and returns the index of the move the given
    /// side's active combatant should use, or None if it cannot act.
    fn choose_move(&self, side: Side, battle_state: &BattleState) -> Option<usize>;
}

/// Picks the move with the highest type effectiveness against the current target.
///
/// Moves carry no type of their own, so every move scores the attacker's first
/// type and the choice falls through to the first move in the list.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyTypeAI;

impl GreedyTypeAI {
    pub fn new() -> Self {
        Self
    }

    fn score_move(&self, _move_index: usize, side: Side, state: &BattleState) -> f64 {
        let attacker = match state.team(side).active() {
            Some(p) => p,
            None => return 0.0,
        };
        let defender = match state.team(side.opponent()).active() {
            Some(p) => p,
            None => return 0.0, // Cannot score if there is no target.
        };

        PokemonType::effectiveness(attacker.attack_type(), &defender.types)
    }
}

impl Behavior for GreedyTypeAI {
    fn choose_move(&self, side: Side, battle_state: &BattleState) -> Option<usize> {
        let attacker = battle_state.team(side).active()?;

        // max_by_key keeps the last maximum, so walk the list backwards to let
        // the earliest move win ties.
        (0..attacker.moves.len())
            .rev()
            .map(|index| (index, self.score_move(index, side, battle_state)))
            .max_by_key(|(_, score)| OrderedFloat(*score))
            .map(|(index, _)| index)
    }
}
