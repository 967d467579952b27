use crate::errors::{BattleEngineError, BattleResult};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A gym leader the player can challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymLeader {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialty: String,
    /// Pokédex ids, lead first
    pub team: Vec<u32>,
    pub strategy: String,
}

static GYM_LEADERS: LazyLock<Vec<GymLeader>> = LazyLock::new(get_gym_leaders);

fn leader(
    id: &str,
    name: &str,
    title: &str,
    specialty: &str,
    team: &[u32],
    strategy: &str,
) -> GymLeader {
    GymLeader {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        specialty: specialty.to_string(),
        team: team.to_vec(),
        strategy: strategy.to_string(),
    }
}

/// Get every gym leader, in challenge-menu order
pub fn get_gym_leaders() -> Vec<GymLeader> {
    vec![
        leader(
            "brock",
            "Brock",
            "The Rock-Solid Pokémon Trainer",
            "Rock",
            &[74, 95], // Geodude, Onix
            "Focuses on high defense and physical moves. Vulnerable to Water and Grass types.",
        ),
        leader(
            "misty",
            "Misty",
            "The Tomboyish Mermaid",
            "Water",
            &[120, 121], // Staryu, Starmie
            "Uses fast and versatile Water-type moves. Watch out for high Special Attack.",
        ),
        leader(
            "surge",
            "Lt. Surge",
            "The Lightning American",
            "Electric",
            &[100, 125, 26], // Voltorb, Electabuzz, Raichu
            "Relies on speed and paralysis. Ground-type Pokémon are your best bet.",
        ),
        leader(
            "cynthia",
            "Cynthia",
            "Sinnoh League Champion",
            "Balanced/Mixed",
            // Spiritomb, Roserade, Lucario, Hippowdon, Milotic, Garchomp
            &[442, 407, 448, 450, 350, 445],
            "Extremely balanced team with coverage for almost every type. Garchomp is her ace.",
        ),
        leader(
            "erika",
            "Erika",
            "The Nature-Loving Princess",
            "Grass",
            &[71, 114, 45], // Victreebel, Tangela, Vileplume
            "Uses status moves like Sleep Powder and Stun Spore. Weak to Fire and Flying types.",
        ),
        leader(
            "sabrina",
            "Sabrina",
            "The Master of Psychic Pokémon",
            "Psychic",
            &[64, 122, 49, 65], // Kadabra, Mr. Mime, Venomoth, Alakazam
            "High Special Attack and Speed. Use physical moves or Dark/Ghost/Bug types.",
        ),
        leader(
            "blaine",
            "Blaine",
            "The Hot-Headed Quiz Master",
            "Fire",
            &[58, 77, 78, 59], // Growlithe, Ponyta, Rapidash, Arcanine
            "Pure offensive power with high-speed Fire types. \
             Water and Ground moves are essential.",
        ),
        leader(
            "giovanni",
            "Giovanni",
            "The Self-Proclaimed Greatest Trainer",
            "Ground",
            &[111, 112, 31, 34], // Rhyhorn, Rhydon, Nidoqueen, Nidoking
            "Heavy hitters with high HP and Attack. Watch out for Earthquake. \
             Water, Grass, and Ice are effective.",
        ),
    ]
}

/// Look up a gym leader by id (case-sensitive, e.g. "brock")
pub fn find_gym_leader(id: &str) -> BattleResult<&'static GymLeader> {
    GYM_LEADERS
        .iter()
        .find(|leader| leader.id == id)
        .ok_or_else(|| BattleEngineError::UnknownPersona(id.to_string()))
}
