use crate::player::{Side, Team};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum GameState {
    InProgress,
    Finished,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted,

    // Send-outs
    OpponentSentOut {
        trainer: String,
        pokemon: String,
    },
    PlayerSentOut {
        pokemon: String,
    },

    // Attacks
    MoveUsed {
        side: Side,
        pokemon: String,
        move_name: String,
    },
    AttackTypeEffectiveness {
        multiplier: f64,
        defender: String,
    },
    DamageDealt {
        target: String,
        damage: u32,
        remaining_hp: u32,
    },
    PokemonFainted {
        side: Side,
        pokemon: String,
    },

    // Turn and battle end
    TurnEnded {
        turn_number: u32,
    },
    BattleEnded {
        winner: Side,
    },
}

impl BattleEvent {
    /// Formats the event into a narration line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted => Some("Battle started!".to_string()),
            BattleEvent::OpponentSentOut { trainer, pokemon } => {
                Some(format!("{} sent out {}!", trainer, pokemon))
            }
            BattleEvent::PlayerSentOut { pokemon } => Some(format!("Go, {}!", pokemon)),

            BattleEvent::MoveUsed {
                pokemon, move_name, ..
            } => Some(format!(
                "{} used {}!",
                pokemon,
                Self::format_move_name(move_name)
            )),
            BattleEvent::AttackTypeEffectiveness {
                multiplier,
                defender,
            } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 && m > 0.0 => Some("It's not very effective...".to_string()),
                m if m == 0.0 => Some(format!("It had no effect on {}...", defender)),
                _ => None, // Normal effectiveness, no message
            },
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("It dealt {} damage to {}!", damage, target))
            }
            BattleEvent::PokemonFainted { pokemon, .. } => Some(format!("{} fainted!", pokemon)),

            BattleEvent::TurnEnded { .. } => None,
            BattleEvent::BattleEnded { winner } => match winner {
                Side::Player => Some("You defeated the opponent!".to_string()),
                Side::Opponent => Some("You were defeated by the opponent...".to_string()),
            },
        }
    }

    /// Move names arrive hyphenated ("thunder-punch"); only the first hyphen becomes a space.
    fn format_move_name(move_name: &str) -> String {
        move_name.replacen('-', " ", 1)
    }
}

/// Event bus for collecting the events of one engine call.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Formatted narration for every non-silent event, in order.
    pub fn narration(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Lowest damage roll.
pub const MIN_DAMAGE_ROLL: f64 = 0.85;
/// Highest damage roll.
pub const MAX_DAMAGE_ROLL: f64 = 1.0;

/// Source of damage rolls: either live randomness or a scripted list for tests.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Option<Vec<f64>>,
    index: usize,
}

impl TurnRng {
    /// Draw each roll uniformly from `[0.85, 1.0]`.
    pub fn new_random() -> Self {
        Self {
            outcomes: None,
            index: 0,
        }
    }

    /// Replay the given rolls in order, clamped into `[0.85, 1.0]`.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            outcomes: Some(outcomes),
            index: 0,
        }
    }

    pub fn next_roll(&mut self, reason: &str) -> f64 {
        let Some(outcomes) = &self.outcomes else {
            use rand::Rng;
            return rand::rng().random_range(MIN_DAMAGE_ROLL..=MAX_DAMAGE_ROLL);
        };

        let Some(outcome) = outcomes.get(self.index).copied() else {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more scripted rolls.",
                reason
            );
        };
        tracing::trace!(outcome, reason, "scripted damage roll consumed");
        self.index += 1;
        outcome.clamp(MIN_DAMAGE_ROLL, MAX_DAMAGE_ROLL)
    }
}

impl Default for TurnRng {
    fn default() -> Self {
        Self::new_random()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleState {
    pub player_team: Team,
    pub opponent_team: Team,
    pub turn_number: u32,
    pub log: Vec<String>,
    pub game_state: GameState,
    pub winner: Option<Side>,
    /// Gym leader being challenged, if any.
    pub persona_id: Option<String>,
}

impl BattleState {
    /// A fresh in-progress battle on turn 1 with an empty log.
    pub fn new(player_team: Team, opponent_team: Team) -> Self {
        Self {
            player_team,
            opponent_team,
            turn_number: 1,
            log: Vec::new(),
            game_state: GameState::InProgress,
            winner: None,
            persona_id: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.game_state == GameState::Finished
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Player => &self.player_team,
            Side::Opponent => &self.opponent_team,
        }
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        match side {
            Side::Player => &mut self.player_team,
            Side::Opponent => &mut self.opponent_team,
        }
    }
}

impl std::fmt::Display for BattleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Turn {} ===", self.turn_number)?;
        if let Some(opponent) = self.opponent_team.active() {
            writeln!(f, "Opponent: {}", opponent)?;
        }
        if let Some(player) = self.player_team.active() {
            writeln!(f, "You:      {}", player)?;
        }
        match self.winner {
            Some(Side::Player) => writeln!(f, "Victory!"),
            Some(Side::Opponent) => writeln!(f, "Defeat"),
            None => Ok(()),
        }
    }
}
