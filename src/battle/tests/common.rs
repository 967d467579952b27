use crate::battle::state::{BattleState, TurnRng};
use crate::errors::BattleResult;
use crate::player::Team;
use crate::pokemon::{Combatant, MoveSlot};
use schema::{BaseStats, PokemonType};

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```ignore
/// let pikachu = TestCombatantBuilder::new("pikachu")
///     .with_types(&["electric"])
///     .with_hp(20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    types: Vec<PokemonType>,
    attack: u32,
    defense: u32,
    max_hp: u32,
    current_hp: Option<u32>,
    moves: Vec<String>,
}

impl TestCombatantBuilder {
    /// Normal type, 100 attack and defense, 300 max HP, knows tackle.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: vec![PokemonType::Normal],
            attack: 100,
            defense: 100,
            max_hp: 300,
            current_hp: None,
            moves: vec!["tackle".to_string()],
        }
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|name| PokemonType::from_name(name)).collect();
        self
    }

    pub fn with_stats(mut self, attack: u32, defense: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    /// Sets the current HP. Max HP is raised to match if needed.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self.max_hp = self.max_hp.max(hp);
        self
    }

    pub fn with_max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = max_hp;
        self
    }

    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn build(self) -> Combatant {
        let stats = BaseStats {
            attack: self.attack,
            defense: self.defense,
            ..BaseStats::uniform(80)
        };
        let moves = self.moves.into_iter().map(MoveSlot::new).collect();
        let combatant = assert_ok(Combatant::new(
            0,
            self.name,
            self.types,
            stats,
            self.max_hp,
            moves,
        ));

        match self.current_hp {
            Some(hp) => combatant.with_current_hp(hp),
            None => combatant,
        }
    }
}

/// Creates a battle state from two member lists, leads first.
pub fn create_test_battle(player: Vec<Combatant>, opponent: Vec<Combatant>) -> BattleState {
    let player_team = assert_ok(Team::new(player));
    let opponent_team = assert_ok(Team::new(opponent));
    BattleState::new(player_team, opponent_team)
}

/// Every roll at the top of the range.
pub fn max_rolls() -> TurnRng {
    TurnRng::new_for_test(vec![1.0; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
