use super::*;

fn controller() -> SessionController<StackHistory> {
    SessionController::with_seed(StackHistory::new(), 7)
}

fn controller_with(names: &[&str]) -> SessionController<StackHistory> {
    let mut session = controller();
    for name in names {
        session.add_player(name).expect("player added");
    }
    session
}

fn names(session: &SessionController<StackHistory>) -> Vec<&str> {
    session.players().iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn initial_state_is_welcome() {
    let session = controller();
    assert_eq!(session.screen(), Screen::Welcome);
    assert!(session.players().is_empty());
    assert_eq!(session.current_round(), 0);
    assert_eq!(session.intensity(), IntensityLevel::Chill);
    assert_eq!(session.current_game_mode(), None);
    assert!(session.round_history().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn adds_players_in_call_order_with_zero_scores() {
    let session = controller_with(&["Alice", "Bob", "Charlie"]);
    assert_eq!(names(&session), ["Alice", "Bob", "Charlie"]);
    assert!(session.players().iter().all(|p| p.score == 0));
}

#[test]
fn player_ids_are_unique() {
    let session = controller_with(&["Sam", "Sam"]);
    assert_ne!(session.players()[0].id, session.players()[1].id);
}

#[test]
fn trims_names_and_ignores_blank_ones() {
    let mut session = controller();
    assert!(session.add_player("  Charlie  ").is_some());
    assert_eq!(session.add_player("   "), None);
    assert_eq!(session.add_player(""), None);
    assert_eq!(names(&session), ["Charlie"]);
}

#[test]
fn removes_players_preserving_order() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    let bob = session.players()[1].id;

    assert!(session.remove_player(bob));
    assert_eq!(names(&session), ["Alice", "Charlie"]);
}

#[test]
fn removing_unknown_player_changes_nothing() {
    let mut session = controller_with(&["Alice", "Bob"]);
    let before = session.snapshot();

    assert!(!session.remove_player(PlayerId::new()));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn removal_before_current_player_keeps_turn_on_same_player() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    session.next_player();
    session.next_player();
    assert_eq!(session.current_player().expect("current").name, "Charlie");

    let alice = session.players()[0].id;
    session.remove_player(alice);

    assert_eq!(session.current_player_index(), 1);
    assert_eq!(session.current_player().expect("current").name, "Charlie");
}

#[test]
fn removing_last_seated_current_player_wraps_to_first() {
    let mut session = controller_with(&["Alice", "Bob"]);
    session.next_player();
    let bob = session.players()[1].id;

    session.remove_player(bob);

    assert_eq!(session.current_player_index(), 0);
    assert_eq!(session.current_player().expect("current").name, "Alice");
}

#[test]
fn removing_everyone_resets_turn_pointer() {
    let mut session = controller_with(&["Alice"]);
    let alice = session.players()[0].id;
    session.remove_player(alice);
    assert_eq!(session.current_player_index(), 0);
    assert!(session.current_player().is_none());
}

#[test]
fn score_updates_are_additive() {
    let mut session = controller_with(&["Alice", "Bob"]);
    let alice = session.players()[0].id;

    assert!(session.update_player_score(alice, 10));
    assert!(session.update_player_score(alice, -5));

    assert_eq!(session.player(alice).expect("alice").score, 5);
    assert_eq!(session.players()[1].score, 0);
}

#[test]
fn scores_have_no_floor() {
    let mut session = controller_with(&["Alice"]);
    let alice = session.players()[0].id;
    session.update_player_score(alice, -3);
    assert_eq!(session.players()[0].score, -3);
}

#[test]
fn unknown_player_score_update_is_ignored() {
    let mut session = controller_with(&["Alice"]);
    assert!(!session.update_player_score(PlayerId::new(), 4));
    assert_eq!(session.players()[0].score, 0);
}

#[test]
fn start_game_resets_round_state_regardless_of_prior_state() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    session.start_game();
    session.select_game_mode(Some(GameMode::Trivia), None);
    for _ in 0..7 {
        session.next_round();
    }
    assert_eq!(session.intensity(), IntensityLevel::Medium);

    session.start_game();

    assert_eq!(session.screen(), Screen::RoundIntro);
    assert_eq!(session.current_round(), 1);
    assert_eq!(session.intensity(), IntensityLevel::Chill);
    assert_eq!(session.current_player_index(), 0);
    assert!(session.round_history().is_empty());
    assert_eq!(session.current_game_mode(), None);
    assert_eq!(session.players().len(), 3);
}

#[test]
fn intensity_escalates_at_round_boundaries() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();

    let mut seen = vec![(session.current_round(), session.intensity())];
    for _ in 0..13 {
        session.next_round();
        seen.push((session.current_round(), session.intensity()));
    }

    assert_eq!(seen[4], (5, IntensityLevel::Chill));
    assert_eq!(seen[5], (6, IntensityLevel::Medium));
    assert_eq!(seen[11], (12, IntensityLevel::Medium));
    assert_eq!(seen[12], (13, IntensityLevel::Wild));
    assert_eq!(seen[13], (14, IntensityLevel::Wild));
}

#[test]
fn next_round_cycles_players_and_moves_to_pass_phone() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    session.start_game();

    let mut indices = Vec::new();
    for _ in 0..5 {
        session.next_round();
        indices.push(session.current_player_index());
    }

    assert_eq!(indices, [1, 2, 0, 1, 2]);
    assert_eq!(session.current_round(), 6);
    assert_eq!(session.screen(), Screen::PassPhone);
}

#[test]
fn next_round_keeps_game_mode() {
    let mut session = controller_with(&["Alice", "Bob"]);
    session.start_game();
    session.select_game_mode(Some(GameMode::Trivia), None);

    session.next_round();

    assert_eq!(session.current_game_mode(), Some(GameMode::Trivia));
    assert_eq!(session.screen(), Screen::PassPhone);
}

#[test]
fn next_round_without_players_keeps_index_at_zero() {
    let mut session = controller();
    session.start_game();
    session.next_round();
    session.next_round();
    assert_eq!(session.current_round(), 3);
    assert_eq!(session.current_player_index(), 0);
    assert!(session.current_player().is_none());
}

#[test]
fn next_player_wraps_without_touching_round_or_screen() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    session.start_game();
    session.set_screen(Screen::Game);

    let mut indices = Vec::new();
    for _ in 0..4 {
        session.next_player();
        indices.push(session.current_player_index());
    }

    assert_eq!(indices, [1, 2, 0, 1]);
    assert_eq!(session.current_round(), 1);
    assert_eq!(session.intensity(), IntensityLevel::Chill);
    assert_eq!(session.screen(), Screen::Game);
}

#[test]
fn forced_selection_appends_exactly_one_entry() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();

    session.select_game_mode(Some(GameMode::Trivia), None);
    assert_eq!(session.current_game_mode(), Some(GameMode::Trivia));
    assert_eq!(session.round_history(), [GameMode::Trivia]);

    session.select_game_mode(Some(GameMode::HotSeat), None);
    assert_eq!(session.current_game_mode(), Some(GameMode::HotSeat));
    assert_eq!(session.round_history(), [GameMode::Trivia, GameMode::HotSeat]);
}

#[test]
fn selection_does_not_change_screen() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();
    session.select_game_mode(None, None);
    assert_eq!(session.screen(), Screen::RoundIntro);
}

#[test]
fn random_selection_comes_from_catalog() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();

    let mode = session.select_game_mode(None, None);

    assert!(GameMode::ALL.contains(&mode));
    assert_eq!(session.current_game_mode(), Some(mode));
    assert_eq!(session.round_history(), [mode]);
}

#[test]
fn random_selection_honours_enabled_modes() {
    let mut session = controller();
    let enabled = [GameMode::Slevens, GameMode::LiarsDice];
    for _ in 0..50 {
        let mode = session.select_game_mode(None, Some(&enabled));
        assert!(enabled.contains(&mode));
    }
    assert_eq!(session.round_history().len(), 50);
}

#[test]
fn recently_repeated_mode_is_picked_less_often() {
    let enabled = [GameMode::Trivia, GameMode::HotSeat];
    let mut trivia = 0;
    let mut hot_seat = 0;

    for seed in 0..2000 {
        let mut session = SessionController::with_seed(NoHistory, seed);
        for _ in 0..3 {
            session.select_game_mode(Some(GameMode::Trivia), None);
        }
        match session.select_game_mode(None, Some(&enabled)) {
            GameMode::Trivia => trivia += 1,
            _ => hot_seat += 1,
        }
    }

    assert!(trivia > 0, "repeats must stay possible");
    assert!(hot_seat > trivia * 4, "trivia={trivia} hot_seat={hot_seat}");
}

#[test]
fn repeated_random_selection_produces_variety() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();
    for _ in 0..3 {
        session.select_game_mode(Some(GameMode::Trivia), None);
    }

    let mut picked = Vec::new();
    for _ in 0..20 {
        picked.push(session.select_game_mode(None, None));
    }
    picked.sort_by_key(|mode| mode.as_str());
    picked.dedup();

    assert!(picked.len() > 1);
}

#[test]
fn current_player_follows_turns() {
    let mut session = controller_with(&["Alice", "Bob"]);
    assert_eq!(session.current_player().expect("current").name, "Alice");
    session.next_player();
    assert_eq!(session.current_player().expect("current").name, "Bob");
}

#[test]
fn current_player_is_none_without_players() {
    assert!(controller().current_player().is_none());
}

#[test]
fn random_player_excluding_current_picks_the_other_of_two() {
    let mut session = controller_with(&["Alice", "Bob"]);
    for _ in 0..50 {
        let picked = session.random_player(true).expect("player");
        assert_eq!(picked.name, "Bob");
    }
}

#[test]
fn random_player_never_returns_current_when_excluded() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie", "Dana"]);
    session.next_player();
    session.next_player();
    for _ in 0..200 {
        let picked = session.random_player(true).expect("player");
        assert_ne!(picked.name, "Charlie");
    }
}

#[test]
fn random_player_with_single_player_ignores_exclusion() {
    let mut session = controller_with(&["Solo"]);
    assert_eq!(session.random_player(true).expect("player").name, "Solo");
}

#[test]
fn random_player_covers_roster() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let name = session.random_player(false).expect("player").name.clone();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn random_player_is_none_without_players() {
    assert!(controller().random_player(false).is_none());
    assert!(controller().random_player(true).is_none());
}

#[test]
fn random_pair_requires_two_players() {
    let mut session = controller();
    assert!(session.random_pair().is_none());
    session.add_player("Alice");
    assert!(session.random_pair().is_none());
}

#[test]
fn random_pair_returns_distinct_players() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie"]);
    for _ in 0..100 {
        let (first, second) = session.random_pair().expect("pair");
        assert_ne!(first.id, second.id);
    }
}

#[test]
fn reset_restores_initial_state_including_roster() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();
    session.select_game_mode(Some(GameMode::Trivia), None);
    session.next_round();

    session.reset_game();

    assert_eq!(session.screen(), Screen::Welcome);
    assert!(session.players().is_empty());
    assert_eq!(session.current_round(), 0);
    assert_eq!(session.current_game_mode(), None);
    assert!(session.round_history().is_empty());
}

#[test]
fn forward_transitions_record_navigation_entries() {
    let mut session = controller_with(&["Alice"]);
    session.set_screen(Screen::Setup);
    session.start_game();
    session.confirm_game_mode(Some(GameMode::Trivia), None);
    session.set_screen(Screen::Game);
    session.next_round();
    session.switch_game();
    session.end_game();

    assert_eq!(
        session.history().entries(),
        [
            Screen::Setup,
            Screen::RoundIntro,
            Screen::PassPhone,
            Screen::Game,
            Screen::PassPhone,
            Screen::RoundIntro,
            Screen::GameOver,
        ]
    );
}

#[test]
fn replayed_transitions_do_not_record() {
    let mut session = controller_with(&["Alice"]);
    session.dispatch(SessionCommand::StartGame, TransitionSource::HistoryReplay);
    session.dispatch(
        SessionCommand::SetScreen {
            screen: Screen::Game,
        },
        TransitionSource::HistoryReplay,
    );

    assert_eq!(session.screen(), Screen::Game);
    assert!(session.history().is_empty());

    session.dispatch(SessionCommand::EndGame, TransitionSource::UserAction);
    assert_eq!(session.history().entries(), [Screen::GameOver]);
}

#[test]
fn back_from_game_returns_to_round_intro_without_recording() {
    let mut session = controller_with(&["Alice", "Bob"]);
    session.start_game();
    session.confirm_game_mode(Some(GameMode::KingsCup), None);
    session.set_screen(Screen::Game);
    let recorded = session.history().len();

    assert!(session.navigate_back());

    assert_eq!(session.screen(), Screen::RoundIntro);
    assert_eq!(session.current_round(), 1);
    assert_eq!(session.current_game_mode(), Some(GameMode::KingsCup));
    assert_eq!(session.history().len(), recorded);
}

#[test]
fn back_from_pass_phone_returns_to_round_intro() {
    let mut session = controller_with(&["Alice", "Bob"]);
    session.start_game();
    session.next_round();
    assert!(session.navigate_back());
    assert_eq!(session.screen(), Screen::RoundIntro);
    assert_eq!(session.current_round(), 2);
}

#[test]
fn back_to_welcome_keeps_roster_but_clears_the_game() {
    let mut session = controller_with(&["Alice", "Bob"]);
    let alice = session.players()[0].id;
    session.start_game();
    session.select_game_mode(Some(GameMode::Trivia), None);
    session.update_player_score(alice, 3);
    session.next_round();
    session.end_game();

    assert!(session.navigate_back());

    assert_eq!(session.screen(), Screen::Welcome);
    assert_eq!(names(&session), ["Alice", "Bob"]);
    assert_eq!(session.players()[0].score, 3);
    assert_eq!(session.current_round(), 0);
    assert_eq!(session.current_player_index(), 0);
    assert_eq!(session.current_game_mode(), None);
    assert!(session.round_history().is_empty());
}

#[test]
fn back_on_welcome_is_a_no_op() {
    let mut session = controller_with(&["Alice"]);
    assert!(!session.navigate_back());
    assert_eq!(session.screen(), Screen::Welcome);
    assert_eq!(session.players().len(), 1);
}

#[test]
fn confirm_routes_through_pass_phone_only_with_players() {
    let mut with_players = controller_with(&["Alice"]);
    with_players.start_game();
    with_players.confirm_game_mode(Some(GameMode::Wavelength), None);
    assert_eq!(with_players.screen(), Screen::PassPhone);

    let mut anonymous = controller();
    anonymous.start_game();
    anonymous.confirm_game_mode(None, None);
    assert_eq!(anonymous.screen(), Screen::Game);
    assert!(anonymous.current_game_mode().is_some());
}

#[test]
fn ending_is_offered_after_first_round_with_players() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();
    assert!(!session.can_end_game());
    session.next_round();
    assert!(session.can_end_game());

    let mut anonymous = controller();
    anonymous.start_game();
    anonymous.next_round();
    assert!(!anonymous.can_end_game());
}

#[test]
fn standings_rank_by_score_with_shared_ties() {
    let mut session = controller_with(&["Alice", "Bob", "Charlie", "Dana"]);
    let ids: Vec<PlayerId> = session.players().iter().map(|p| p.id).collect();
    session.update_player_score(ids[0], 2);
    session.update_player_score(ids[1], 5);
    session.update_player_score(ids[2], 2);
    session.update_player_score(ids[3], -1);

    let standings = session.standings();
    let rows: Vec<(usize, &str, i64)> = standings
        .iter()
        .map(|s| (s.rank, s.player.name.as_str(), s.player.score))
        .collect();

    assert_eq!(
        rows,
        [
            (1, "Bob", 5),
            (2, "Alice", 2),
            (2, "Charlie", 2),
            (4, "Dana", -1),
        ]
    );
}

#[test]
fn dispatch_routes_player_commands() {
    let mut session = controller();
    session.dispatch(
        SessionCommand::AddPlayer {
            name: " Emily ".into(),
        },
        TransitionSource::UserAction,
    );
    let emily = session.players()[0].id;
    session.dispatch(
        SessionCommand::UpdatePlayerScore {
            player_id: emily,
            delta: 7,
        },
        TransitionSource::UserAction,
    );
    session.dispatch(
        SessionCommand::SelectGameMode {
            mode: Some(GameMode::HotTakes),
            enabled_modes: None,
        },
        TransitionSource::UserAction,
    );

    assert_eq!(session.players()[0].name, "Emily");
    assert_eq!(session.players()[0].score, 7);
    assert_eq!(session.round_history(), [GameMode::HotTakes]);

    session.dispatch(
        SessionCommand::RemovePlayer { player_id: emily },
        TransitionSource::UserAction,
    );
    assert!(session.players().is_empty());
}

#[test]
fn snapshot_serializes_for_the_screen_layer() {
    let mut session = controller_with(&["Alice"]);
    session.start_game();
    session.select_game_mode(Some(GameMode::CapOrFax), None);

    let json = serde_json::to_value(session.snapshot()).expect("serialize");

    assert_eq!(json["screen"], "round-intro");
    assert_eq!(json["current_round"], 1);
    assert_eq!(json["intensity"], 1);
    assert_eq!(json["current_game_mode"], "cap-or-fax");
    assert_eq!(json["round_history"][0], "cap-or-fax");
    assert_eq!(json["players"][0]["name"], "Alice");
}

#[test]
fn same_seed_gives_same_selections() {
    let mut a = SessionController::with_seed(NoHistory, 99);
    let mut b = SessionController::with_seed(NoHistory, 99);
    let picks_a: Vec<GameMode> = (0..10).map(|_| a.select_game_mode(None, None)).collect();
    let picks_b: Vec<GameMode> = (0..10).map(|_| b.select_game_mode(None, None)).collect();
    assert_eq!(picks_a, picks_b);
}
