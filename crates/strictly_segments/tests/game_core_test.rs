//! Tests for the circle game core.

use std::time::{Duration, Instant};
use strictly_segments::{
    ClicksRequired, GameCore, PlayerCount, PlayerId, Rules, ScriptedDice, Segment,
    segment_for_angle,
};

fn dice(script: &[ClicksRequired]) -> ScriptedDice {
    ScriptedDice::new(script.to_vec())
}

#[test]
fn test_initialize_sizes_scoreboard() {
    for players in 1..=8 {
        let game = GameCore::initialize(players, dice(&[ClicksRequired::One]), Instant::now())
            .expect("positive player count");
        assert_eq!(game.scoreboard().len(), players as usize);
        assert!(game.scoreboard().scores().iter().all(|&s| s == 0));
        assert_eq!(game.render().as_flags(), [true, true, true]);
        assert!(!game.is_game_over());
        assert_eq!(game.final_scores(), None);
    }
}

#[test]
fn test_initialize_rejects_non_positive_counts() {
    for players in [0, -1, -100] {
        let result = GameCore::initialize(players, dice(&[ClicksRequired::One]), Instant::now());
        let err = result.expect_err("non-positive count must be rejected");
        assert!(err.message.contains("positive"));
    }
}

#[test]
fn test_segment_mapping_is_reversed() {
    assert_eq!(segment_for_angle(0.0), Segment::Third);
    assert_eq!(segment_for_angle(119.9), Segment::Third);
    assert_eq!(segment_for_angle(120.0), Segment::Second);
    assert_eq!(segment_for_angle(239.9), Segment::Second);
    assert_eq!(segment_for_angle(240.0), Segment::First);
    assert_eq!(segment_for_angle(359.9), Segment::First);
}

#[test]
fn test_same_click_twice_restores_segment() {
    let now = Instant::now();
    // Single player, one click per turn: each click completes a turn
    let mut game = GameCore::initialize(1, dice(&[ClicksRequired::One]), now).unwrap();

    let after_first = game.handle_click(300.0, now);
    assert_eq!(after_first.as_flags(), [false, true, true]);

    let after_second = game.handle_click(300.0, now);
    assert_eq!(after_second.as_flags(), [true, true, true]);
    assert_eq!(game.scoreboard().scores(), &[0]);
}

#[test]
fn test_scoring_turn_awards_one_and_resets() {
    let now = Instant::now();
    let mut game = GameCore::initialize(2, dice(&[ClicksRequired::Three]), now).unwrap();

    game.handle_click(10.0, now);
    game.handle_click(130.0, now);
    let render = game.handle_click(250.0, now);

    assert_eq!(render.as_flags(), [true, true, true]);
    assert_eq!(game.scoreboard().scores(), &[1, 0]);
    assert_eq!(*game.status(now).player(), PlayerId::from_index(1));
}

#[test]
fn test_non_scoring_turn_keeps_segments() {
    let now = Instant::now();
    let mut game = GameCore::initialize(2, dice(&[ClicksRequired::Two]), now).unwrap();

    game.handle_click(10.0, now);
    let render = game.handle_click(20.0, now);

    // Same arc twice: back to light, nobody scores
    assert_eq!(render.as_flags(), [true, true, true]);
    assert_eq!(game.scoreboard().total(), 0);
}

#[test]
fn test_player_rotation_is_cyclic() {
    let now = Instant::now();
    let mut game = GameCore::initialize(3, dice(&[ClicksRequired::One]), now).unwrap();

    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(game.status(now).player().number());
        game.handle_click(180.0, now);
    }
    assert_eq!(seen, vec![1, 2, 3, 1, 2, 3, 1]);
}

#[test]
fn test_status_reports_leader() {
    let now = Instant::now();
    let script = [ClicksRequired::Three, ClicksRequired::Two, ClicksRequired::Three];
    let mut game = GameCore::initialize(3, dice(&script), now).unwrap();

    // Player 1 leaves one arc dark, player 2 darkens the other two
    for angle in [10.0, 10.0, 10.0, 130.0, 250.0] {
        game.handle_click(angle, now);
    }

    let status = game.tick(now);
    assert_eq!(*status.leader(), PlayerId::from_index(1));
    assert_eq!(*status.leading_score(), 1);
    assert_eq!(status.player().number(), 3);
}

#[test]
fn test_tick_ends_idle_game() {
    let start = Instant::now();
    let mut game = GameCore::initialize(2, dice(&[ClicksRequired::Two]), start).unwrap();

    game.tick(start + Duration::from_secs(29));
    assert!(!game.is_game_over());

    game.tick(start + Duration::from_secs(30));
    assert!(game.is_game_over());
    assert_eq!(game.final_scores(), Some(&[0, 0][..]));
}

#[test]
fn test_tick_mid_turn_freezes_clicks() {
    let start = Instant::now();
    let mut game = GameCore::initialize(2, dice(&[ClicksRequired::Three]), start).unwrap();

    game.handle_click(10.0, start);
    let frozen = game.render();

    let late = start + Duration::from_secs(45);
    game.tick(late);
    assert!(game.is_game_over());

    assert_eq!(game.handle_click(130.0, late), frozen);
    assert_eq!(game.handle_click(250.0, late), frozen);
    assert_eq!(game.scoreboard().total(), 0);
}

#[test]
fn test_turn_start_after_expiry_ends_game() {
    let start = Instant::now();
    let mut game = GameCore::initialize(2, dice(&[ClicksRequired::Two]), start).unwrap();

    game.handle_click(10.0, start);
    // Mid-turn click past the deadline still lands; the next turn never opens
    let late = start + Duration::from_secs(31);
    game.handle_click(130.0, late);

    assert!(game.is_game_over());
    assert_eq!(game.render().as_flags(), [true, false, false]);
    assert_eq!(game.final_scores(), Some(&[0, 0][..]));
}

#[test]
fn test_final_scores_include_last_point() {
    let start = Instant::now();
    let mut game = GameCore::initialize(2, dice(&[ClicksRequired::Three]), start).unwrap();

    let late = start + Duration::from_secs(40);
    game.handle_click(10.0, late);
    game.handle_click(130.0, late);
    game.handle_click(250.0, late);

    assert_eq!(game.final_scores(), Some(&[1, 0][..]));
}

#[test]
fn test_custom_duration() {
    let start = Instant::now();
    let players = PlayerCount::new(2).unwrap();
    let rules = Rules::new(players, Duration::from_secs(5)).unwrap();
    let mut game = GameCore::with_rules(rules, dice(&[ClicksRequired::One]), start);

    assert_eq!(*game.status(start).remaining().seconds(), 5);
    game.tick(start + Duration::from_secs(5));
    assert!(game.is_game_over());
}

#[test]
fn test_remaining_time_counts_down() {
    let start = Instant::now();
    let mut game = GameCore::initialize(1, dice(&[ClicksRequired::One]), start).unwrap();

    let status = game.tick(start + Duration::from_millis(12_400));
    assert_eq!(*status.remaining().minutes(), 0);
    assert_eq!(*status.remaining().seconds(), 17);
}
