// In: src/lib.rs

//! Pokédex Battle Core
//!
//! Type-effectiveness resolution, a level-50 damage formula and a
//! deterministic-when-scripted turn engine for one-on-one team battles.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod personas;
pub mod player;
pub mod pokemon;
pub mod teams;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// The type chart and stat definitions.
pub use schema::{get_type_effectiveness, BaseStats, PokemonType, StatType, TypeMatchup};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::ai::{Behavior, GreedyTypeAI};
pub use battle::calculators::calculate_damage;
pub use battle::engine::{apply_player_move, apply_player_move_with, start_battle};
pub use battle::state::{BattleEvent, BattleState, EventBus, GameState, TurnRng};

// Core runtime types for a battle.
pub use player::{Side, Team};
pub use pokemon::{Combatant, CombatantTemplate, MoveSlot, StatEntry};

// Demo surfaces.
pub use config::BattleConfig;
pub use personas::{find_gym_leader, get_gym_leaders, GymLeader};
pub use teams::{create_gym_battle, create_random_battle, create_team};

// Crate-specific error and result types.
pub use errors::{BattleEngineError, BattleResult};
