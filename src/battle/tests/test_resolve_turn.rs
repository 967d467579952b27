#[cfg(test)]
mod tests {
    use crate::battle::ai::Behavior;
    use crate::battle::engine::{apply_player_move, apply_player_move_with};
    use crate::battle::state::{BattleEvent, BattleState, GameState, TurnRng};
    use crate::battle::tests::common::{create_test_battle, max_rolls, TestCombatantBuilder};
    use crate::errors::BattleEngineError;
    use crate::player::Side;
    use pretty_assertions::assert_eq;

    fn pikachu_vs_onix() -> BattleState {
        create_test_battle(
            vec![TestCombatantBuilder::new("pikachu")
                .with_moves(&["tackle", "quick-attack"])
                .build()],
            vec![TestCombatantBuilder::new("onix").build()],
        )
    }

    #[test]
    fn test_turn_with_both_sides_attacking() {
        let mut battle_state = pikachu_vs_onix();
        let mut rng = max_rolls();

        let bus = apply_player_move(&mut battle_state, "quick-attack", &mut rng).unwrap();

        // ((22 * 60 * 1) / 50 + 2) * 1.0 = 28.4
        assert_eq!(
            battle_state.log,
            vec![
                "pikachu used quick attack!",
                "It dealt 28 damage to onix!",
                "onix used tackle!",
                "It dealt 28 damage to pikachu!",
            ]
        );
        assert_eq!(battle_state.opponent_team.active().unwrap().current_hp(), 272);
        assert_eq!(battle_state.player_team.active().unwrap().current_hp(), 272);
        assert_eq!(battle_state.turn_number, 2);
        assert_eq!(battle_state.game_state, GameState::InProgress);

        assert_eq!(bus.len(), 7);
        assert_eq!(
            bus.events().last(),
            Some(&BattleEvent::TurnEnded { turn_number: 1 })
        );
        assert_eq!(bus.narration(), battle_state.log);
    }

    #[test]
    fn test_knockout_of_last_opponent_skips_counter_attack() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("pikachu").with_types(&["electric"]).build()],
            vec![TestCombatantBuilder::new("pidgey")
                .with_types(&["normal", "flying"])
                .with_hp(1)
                .build()],
        );
        // A single scripted roll: a counter-attack would exhaust it and panic
        let mut rng = TurnRng::new_for_test(vec![0.85]);

        apply_player_move(&mut battle_state, "tackle", &mut rng).unwrap();

        assert_eq!(
            battle_state.log,
            vec![
                "pikachu used tackle!",
                "It's super effective!",
                "It dealt 48 damage to pidgey!",
                "pidgey fainted!",
                "You defeated the opponent!",
            ]
        );
        assert_eq!(battle_state.game_state, GameState::Finished);
        assert_eq!(battle_state.winner, Some(Side::Player));
        assert_eq!(battle_state.player_team.active().unwrap().current_hp(), 300);
        assert_eq!(battle_state.turn_number, 2);
    }

    #[test]
    fn test_log_accumulates_across_turns() {
        let mut battle_state = pikachu_vs_onix();
        let mut rng = max_rolls();

        for _ in 0..3 {
            apply_player_move(&mut battle_state, "tackle", &mut rng).unwrap();
        }

        assert_eq!(battle_state.log.len(), 12);
        assert_eq!(battle_state.turn_number, 4);
        assert_eq!(battle_state.opponent_team.active().unwrap().current_hp(), 300 - 3 * 28);
    }

    #[test]
    fn test_unknown_move_is_rejected_without_mutation() {
        let mut battle_state = pikachu_vs_onix();
        let before = battle_state.clone();
        let mut rng = TurnRng::new_for_test(vec![]);

        let err = apply_player_move(&mut battle_state, "thunderbolt", &mut rng).unwrap_err();

        assert_eq!(
            err,
            BattleEngineError::InvalidMove {
                pokemon: "pikachu".to_string(),
                move_name: "thunderbolt".to_string(),
            }
        );
        assert_eq!(battle_state, before);
    }

    #[test]
    fn test_move_names_match_exactly() {
        let mut battle_state = pikachu_vs_onix();
        let mut rng = TurnRng::new_for_test(vec![]);

        let err = apply_player_move(&mut battle_state, "Quick Attack", &mut rng).unwrap_err();
        assert!(matches!(err, BattleEngineError::InvalidMove { .. }));
    }

    #[test]
    fn test_finished_battle_rejects_moves() {
        let mut battle_state = pikachu_vs_onix();
        battle_state.game_state = GameState::Finished;
        battle_state.winner = Some(Side::Player);
        let before = battle_state.clone();
        let mut rng = TurnRng::new_for_test(vec![]);

        let err = apply_player_move(&mut battle_state, "tackle", &mut rng).unwrap_err();

        assert_eq!(err, BattleEngineError::BattleFinished);
        assert_eq!(battle_state, before);
    }

    #[test]
    fn test_fainted_active_is_inconsistent() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("pikachu").with_hp(0).build()],
            vec![TestCombatantBuilder::new("onix").build()],
        );
        let before = battle_state.clone();
        let mut rng = TurnRng::new_for_test(vec![]);

        let err = apply_player_move(&mut battle_state, "tackle", &mut rng).unwrap_err();

        assert!(matches!(err, BattleEngineError::InconsistentState(_)));
        assert_eq!(battle_state, before);
    }

    #[test]
    fn test_zero_defense_is_rejected_before_any_damage() {
        let mut battle_state = create_test_battle(
            vec![TestCombatantBuilder::new("pikachu").build()],
            vec![TestCombatantBuilder::new("magikarp").with_stats(10, 0).build()],
        );
        let before = battle_state.clone();
        let mut rng = TurnRng::new_for_test(vec![]);

        let err = apply_player_move(&mut battle_state, "tackle", &mut rng).unwrap_err();

        assert!(matches!(err, BattleEngineError::InvalidArgument(_)));
        assert_eq!(battle_state, before);
    }

    struct LastMove;

    impl Behavior for LastMove {
        fn choose_move(&self, side: Side, battle_state: &BattleState) -> Option<usize> {
            battle_state
                .team(side)
                .active()
                .map(|pokemon| pokemon.moves.len() - 1)
        }
    }

    struct OutOfRange;

    impl Behavior for OutOfRange {
        fn choose_move(&self, _side: Side, _battle_state: &BattleState) -> Option<usize> {
            Some(99)
        }
    }

    fn onix_with_two_moves() -> BattleState {
        create_test_battle(
            vec![TestCombatantBuilder::new("pikachu").build()],
            vec![TestCombatantBuilder::new("onix")
                .with_moves(&["tackle", "rock-throw"])
                .build()],
        )
    }

    #[test]
    fn test_custom_opponent_behavior_picks_the_counter_move() {
        let mut battle_state = onix_with_two_moves();
        let mut rng = max_rolls();

        apply_player_move_with(&mut battle_state, "tackle", &mut rng, &LastMove).unwrap();

        assert_eq!(battle_state.log[2], "onix used rock throw!");
    }

    #[test]
    fn test_out_of_range_choice_falls_back_to_first_move() {
        let mut battle_state = onix_with_two_moves();
        let mut rng = max_rolls();

        apply_player_move_with(&mut battle_state, "tackle", &mut rng, &OutOfRange).unwrap();

        assert_eq!(battle_state.log[2], "onix used tackle!");
    }
}
