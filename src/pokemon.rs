use crate::config::BattleConfig;
use crate::errors::{BattleEngineError, BattleResult};
use schema::{BaseStats, PokemonType, StatType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveSlot {
    pub name: String,
}

impl MoveSlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One `{ name, base_stat }` entry as the external species API reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u32,
}

/// Raw species data before it is shaped into a battle-ready [`Combatant`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CombatantTemplate {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprite: String,
    pub types: Vec<PokemonType>,
    pub stats: Vec<StatEntry>,
    pub moves: Vec<String>,
}

impl CombatantTemplate {
    /// Look up a stat by its external name. Unknown names are ignored.
    pub fn base_stat(&self, stat: StatType) -> Option<u32> {
        self.stats
            .iter()
            .find(|entry| entry.name.parse::<StatType>().ok() == Some(stat))
            .map(|entry| entry.base_stat)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: u32,
    pub name: String,
    pub sprite: String,
    pub types: Vec<PokemonType>,
    pub stats: BaseStats,
    pub moves: Vec<MoveSlot>,
    current_hp: u32,
    max_hp: u32,
}

impl Combatant {
    /// Build a combatant at full health.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        types: Vec<PokemonType>,
        stats: BaseStats,
        max_hp: u32,
        moves: Vec<MoveSlot>,
    ) -> BattleResult<Self> {
        let name = name.into();
        if moves.is_empty() {
            return Err(BattleEngineError::NoMoves(name));
        }
        if max_hp == 0 {
            return Err(BattleEngineError::InvalidArgument(format!(
                "{} must have a positive max HP",
                name
            )));
        }
        let types = if types.is_empty() {
            vec![PokemonType::Typeless]
        } else {
            types
        };

        Ok(Self {
            id,
            name,
            sprite: String::new(),
            types,
            stats,
            moves,
            current_hp: max_hp,
            max_hp,
        })
    }

    /// Shape raw species data the way the simulator does for a level-50 battle:
    /// max HP from the base HP stat, fallbacks for missing stats, first few moves.
    /// A stat reported as 0 counts as missing.
    pub fn from_template(
        template: &CombatantTemplate,
        config: &BattleConfig,
    ) -> BattleResult<Self> {
        let reported = |stat: StatType| template.base_stat(stat).filter(|value| *value > 0);
        let stat = |stat: StatType| reported(stat).unwrap_or(config.fallback_stat);
        let base_hp = reported(StatType::Hp);
        let stats = BaseStats {
            hp: base_hp.unwrap_or(config.fallback_hp),
            attack: stat(StatType::Attack),
            defense: stat(StatType::Defense),
            sp_attack: stat(StatType::SpecialAttack),
            sp_defense: stat(StatType::SpecialDefense),
            speed: stat(StatType::Speed),
        };
        let moves = template
            .moves
            .iter()
            .take(config.max_moves)
            .map(MoveSlot::new)
            .collect();

        let mut combatant = Self::new(
            template.id,
            template.name.clone(),
            template.types.clone(),
            stats,
            config.max_hp_for(base_hp),
            moves,
        )?;
        combatant.sprite = template.sprite.clone();
        Ok(combatant)
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Set HP directly, clamped to `0..=max_hp`.
    pub fn set_current_hp(&mut self, hp: u32) {
        self.current_hp = hp.min(self.max_hp);
    }

    /// Builder-style variant of [`Combatant::set_current_hp`].
    pub fn with_current_hp(mut self, hp: u32) -> Self {
        self.set_current_hp(hp);
        self
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Apply damage, flooring HP at 0. Returns true if this left the combatant fainted.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.is_fainted()
    }

    /// Every move is treated as having the combatant's first type.
    pub fn attack_type(&self) -> PokemonType {
        self.types.first().copied().unwrap_or(PokemonType::Typeless)
    }

    pub fn find_move(&self, move_name: &str) -> Option<usize> {
        self.moves.iter().position(|slot| slot.name == move_name)
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let types: Vec<String> = self.types.iter().map(|t| t.to_string()).collect();
        write!(
            f,
            "{} ({}) HP: {}/{}",
            self.name,
            types.join("/"),
            self.current_hp,
            self.max_hp
        )?;
        if f.alternate() {
            let moves: Vec<&str> = self.moves.iter().map(|m| m.name.as_str()).collect();
            write!(
                f,
                "\n  ATK: {} DEF: {}\n  Moves: {}",
                self.stats.attack,
                self.stats.defense,
                moves.join(", ")
            )?;
        }
        Ok(())
    }
}
