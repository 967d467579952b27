use pokedex_battle::{apply_player_move, create_gym_battle, get_gym_leaders, BattleConfig, TurnRng};
use std::path::Path;

/// Starter line-up used for every demo battle.
const PLAYER_TEAM: [u32; 3] = [6, 9, 3];

/// Stop runaway battles (e.g. two mutually immune leads).
const MAX_TURNS: u32 = 200;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    let leader_id = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("brock");

    let config = match std::env::var("POKEDEX_BATTLE_CONFIG") {
        Ok(path) => match BattleConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        },
        Err(_) => BattleConfig::default(),
    };

    let mut battle_state = match create_gym_battle(&PLAYER_TEAM, leader_id, &config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error starting battle: {}", e);
            let ids: Vec<String> = get_gym_leaders().into_iter().map(|leader| leader.id).collect();
            eprintln!("Available gym leaders: {}", ids.join(", "));
            std::process::exit(1);
        }
    };

    let mut rng = TurnRng::new_random();
    while !battle_state.is_finished() && battle_state.turn_number <= MAX_TURNS {
        // Always open with the active combatant's first move
        let Some(move_name) = battle_state
            .player_team
            .active()
            .and_then(|pokemon| pokemon.moves.first())
            .map(|slot| slot.name.clone())
        else {
            break;
        };

        if let Err(e) = apply_player_move(&mut battle_state, &move_name, &mut rng) {
            eprintln!("Error resolving turn {}: {}", battle_state.turn_number, e);
            std::process::exit(1);
        }
    }

    if json {
        match serde_json::to_string_pretty(&battle_state) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing battle state: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for line in &battle_state.log {
        println!("{}", line);
    }
    println!();
    print!("{}", battle_state);
}
