use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// The 18 elemental types, plus `Typeless` for anything the chart does not know.
///
/// Parsing is ASCII case-insensitive. Type names arrive from loosely validated
/// external data, so an unrecognised name becomes `Typeless` instead of an error,
/// and `Typeless` is neutral both when attacking and when defending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
    Typeless,
}

/// The three defender sets listed for one attacking type.
/// Defenders in none of the sets take neutral damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMatchup {
    /// x2
    pub super_effective: &'static [PokemonType],
    /// x0.5
    pub not_very_effective: &'static [PokemonType],
    /// x0, wins over anything else listed for the same defender
    pub ineffective: &'static [PokemonType],
}

const fn matchup(
    super_effective: &'static [PokemonType],
    not_very_effective: &'static [PokemonType],
    ineffective: &'static [PokemonType],
) -> TypeMatchup {
    TypeMatchup {
        super_effective,
        not_very_effective,
        ineffective,
    }
}

use self::PokemonType as T;

/// Attacking-type chart, indexed in `PokemonType` declaration order.
/// Matches the simulator's chart entry for entry; it is not the canonical game chart.
#[rustfmt::skip]
static TYPE_CHART: [TypeMatchup; 18] = [
    // Normal
    matchup(&[], &[T::Rock, T::Steel], &[T::Ghost]),
    // Fire
    matchup(&[T::Grass, T::Ice, T::Bug, T::Steel], &[T::Fire, T::Water, T::Rock, T::Dragon], &[]),
    // Water
    matchup(&[T::Fire, T::Ground, T::Rock], &[T::Water, T::Grass, T::Dragon], &[]),
    // Grass
    matchup(
        &[T::Water, T::Ground, T::Rock],
        &[T::Fire, T::Grass, T::Poison, T::Flying, T::Bug, T::Dragon, T::Steel],
        &[],
    ),
    // Electric
    matchup(&[T::Water, T::Flying], &[T::Electric, T::Grass, T::Dragon], &[T::Ground]),
    // Ice
    matchup(
        &[T::Grass, T::Ground, T::Flying, T::Dragon],
        &[T::Fire, T::Water, T::Ice, T::Steel],
        &[],
    ),
    // Fighting
    matchup(
        &[T::Normal, T::Ice, T::Rock, T::Dark, T::Steel],
        &[T::Poison, T::Flying, T::Psychic, T::Bug, T::Fairy],
        &[T::Ghost],
    ),
    // Poison
    matchup(&[T::Grass, T::Fairy], &[T::Poison, T::Ground, T::Rock, T::Ghost], &[T::Steel]),
    // Ground
    matchup(
        &[T::Fire, T::Electric, T::Poison, T::Rock, T::Steel],
        &[T::Grass, T::Bug],
        &[T::Flying],
    ),
    // Flying
    matchup(&[T::Grass, T::Fighting, T::Bug], &[T::Electric, T::Rock, T::Steel], &[]),
    // Psychic
    matchup(&[T::Fighting, T::Poison], &[T::Psychic, T::Steel], &[T::Dark]),
    // Bug
    matchup(
        &[T::Grass, T::Psychic, T::Dark],
        &[T::Fire, T::Fighting, T::Poison, T::Flying, T::Ghost, T::Steel, T::Fairy],
        &[],
    ),
    // Rock
    matchup(&[T::Fire, T::Ice, T::Flying, T::Bug], &[T::Fighting, T::Ground, T::Steel], &[]),
    // Ghost
    matchup(&[T::Psychic, T::Ghost], &[T::Dark], &[T::Normal]),
    // Dragon
    matchup(&[T::Dragon], &[T::Steel], &[T::Fairy]),
    // Dark
    matchup(&[T::Psychic, T::Ghost], &[T::Fighting, T::Dark, T::Fairy], &[]),
    // Steel
    matchup(&[T::Ice, T::Rock, T::Fairy], &[T::Fire, T::Water, T::Electric, T::Steel], &[]),
    // Fairy
    matchup(&[T::Fighting, T::Dragon, T::Dark], &[T::Fire, T::Poison, T::Steel], &[]),
];

impl PokemonType {
    /// The 18 real types, in chart order.
    pub const ALL: [PokemonType; 18] = [
        T::Normal,
        T::Fire,
        T::Water,
        T::Grass,
        T::Electric,
        T::Ice,
        T::Fighting,
        T::Poison,
        T::Ground,
        T::Flying,
        T::Psychic,
        T::Bug,
        T::Rock,
        T::Ghost,
        T::Dragon,
        T::Dark,
        T::Steel,
        T::Fairy,
    ];

    /// Lenient parse: unknown or malformed names become `Typeless`.
    pub fn from_name(name: &str) -> Self {
        name.trim().parse().unwrap_or(PokemonType::Typeless)
    }

    /// The chart row for this type when attacking. `Typeless` has none.
    pub fn matchup(self) -> Option<&'static TypeMatchup> {
        TYPE_CHART.get(self as usize)
    }

    /// Calculate type effectiveness multiplier for attacking type vs a single defending type
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        let Some(row) = attacking.matchup() else {
            return 1.0;
        };

        if row.ineffective.contains(&defending) {
            0.0
        } else if row.super_effective.contains(&defending) {
            2.0
        } else if row.not_very_effective.contains(&defending) {
            0.5
        } else {
            1.0
        }
    }

    /// Combined multiplier against every defending type: the product of the
    /// per-type factors, so dual types give 0.25, 4 or a hard 0.
    pub fn effectiveness(attacking: PokemonType, defending: &[PokemonType]) -> f64 {
        defending
            .iter()
            .map(|defender| Self::type_effectiveness(attacking, *defender))
            .product()
    }

    pub fn is_immune(attacking: PokemonType, defending: &[PokemonType]) -> bool {
        Self::effectiveness(attacking, defending) == 0.0
    }
}

impl From<String> for PokemonType {
    fn from(name: String) -> Self {
        PokemonType::from_name(&name)
    }
}

impl From<PokemonType> for String {
    fn from(pokemon_type: PokemonType) -> Self {
        pokemon_type.to_string()
    }
}

/// String-level lookup for type names taken straight from external data.
pub fn get_type_effectiveness(attack_type: &str, defending_types: &[&str]) -> f64 {
    let defenders: Vec<PokemonType> = defending_types
        .iter()
        .map(|name| PokemonType::from_name(name))
        .collect();
    PokemonType::effectiveness(PokemonType::from_name(attack_type), &defenders)
}
