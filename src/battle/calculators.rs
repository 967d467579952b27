use crate::battle::commands::BattleCommand;
use crate::battle::state::{BattleEvent, BattleState, TurnRng};
use crate::errors::{BattleEngineError, BattleResult};
use crate::player::Side;
use schema::PokemonType;

/// Combatant level assumed by the damage formula. Levels are not modelled.
pub const LEVEL: f64 = 50.0;

/// Move power the formula falls back to when a caller has none.
pub const DEFAULT_MOVE_POWER: u32 = 40;

/// Every move used in battle hits with this power.
pub const BATTLE_MOVE_POWER: u32 = 60;

/// Damage = floor((((2 * Level / 5 + 2) * Power * A/D) / 50 + 2) * Effectiveness * Roll)
///
/// The roll comes from `rng` and lies in `[0.85, 1.0]`. One roll is consumed
/// per call, even when `effectiveness` is 0 and the result is 0 regardless.
pub fn calculate_damage(
    attack: u32,
    defense: u32,
    move_power: u32,
    effectiveness: f64,
    rng: &mut TurnRng,
) -> BattleResult<u32> {
    if defense < 1 {
        return Err(BattleEngineError::InvalidArgument(format!(
            "defense stat must be at least 1, got {}",
            defense
        )));
    }

    let roll = rng.next_roll("damage roll");
    if effectiveness == 0.0 {
        return Ok(0);
    }

    let level_factor = 2.0 * LEVEL / 5.0 + 2.0;
    let stat_ratio = attack as f64 / defense as f64;
    let base_damage = (level_factor * move_power as f64 * stat_ratio) / 50.0 + 2.0;
    Ok((base_damage * effectiveness * roll).floor() as u32)
}

/// Calculate the outcome of one attack by `attacker`'s active combatant.
///
/// Reads the state only; the returned commands carry the narration and the
/// damage to apply. Fainting is decided after the damage lands.
pub fn calculate_attack_outcome(
    state: &BattleState,
    attacker: Side,
    move_name: &str,
    rng: &mut TurnRng,
) -> BattleResult<Vec<BattleCommand>> {
    let attacker_pokemon = state.team(attacker).active().ok_or_else(|| {
        BattleEngineError::InconsistentState(format!("no active combatant for {}", attacker))
    })?;
    let defender = attacker.opponent();
    let defender_pokemon = state.team(defender).active().ok_or_else(|| {
        BattleEngineError::InconsistentState(format!("no active combatant for {}", defender))
    })?;

    let move_type = attacker_pokemon.attack_type();
    let effectiveness = PokemonType::effectiveness(move_type, &defender_pokemon.types);
    let damage = calculate_damage(
        attacker_pokemon.stats.attack,
        defender_pokemon.stats.defense,
        BATTLE_MOVE_POWER,
        effectiveness,
        rng,
    )?;
    let remaining_hp = defender_pokemon.current_hp().saturating_sub(damage);

    tracing::debug!(
        %attacker,
        attacker_pokemon = %attacker_pokemon.name,
        defender_pokemon = %defender_pokemon.name,
        %move_type,
        effectiveness,
        damage,
        "attack resolved"
    );

    Ok(vec![
        BattleCommand::EmitEvent(BattleEvent::MoveUsed {
            side: attacker,
            pokemon: attacker_pokemon.name.clone(),
            move_name: move_name.to_string(),
        }),
        BattleCommand::DealDamage {
            target: defender,
            amount: damage,
        },
        BattleCommand::EmitEvent(BattleEvent::AttackTypeEffectiveness {
            multiplier: effectiveness,
            defender: defender_pokemon.name.clone(),
        }),
        BattleCommand::EmitEvent(BattleEvent::DamageDealt {
            target: defender_pokemon.name.clone(),
            damage,
            remaining_hp,
        }),
    ])
}
