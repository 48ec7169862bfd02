use hotseat_battleship::{Cooldown, PlayerId, TurnCoordinator};

#[test]
fn test_new_turns_start_with_player_one() {
    let turns = TurnCoordinator::new();
    assert_eq!(turns.active(), PlayerId::One);
    assert!(!turns.swap_waiting());
}

#[test]
fn test_next_turn_flips_and_waits() {
    let mut turns = TurnCoordinator::new();
    turns.next_turn();
    assert_eq!(turns.active(), PlayerId::Two);
    assert!(turns.swap_waiting());

    assert!(turns.acknowledge_swap());
    assert!(!turns.swap_waiting());
    assert!(!turns.acknowledge_swap());

    turns.next_turn();
    assert_eq!(turns.active(), PlayerId::One);
    assert!(turns.swap_waiting());
}

#[test]
fn test_reset_returns_to_player_one() {
    let mut turns = TurnCoordinator::new();
    turns.next_turn();
    turns.reset();
    assert_eq!(turns, TurnCoordinator::default());
}

#[test]
fn test_cooldown_counts_steps() {
    let mut cooldown = Cooldown::new(2);
    assert!(cooldown.is_ready());
    cooldown.trigger();
    assert!(!cooldown.is_ready());
    cooldown.tick();
    assert!(!cooldown.is_ready());
    cooldown.tick();
    assert!(cooldown.is_ready());
    cooldown.tick();
    assert!(cooldown.is_ready());

    let mut off = Cooldown::new(0);
    off.trigger();
    assert!(off.is_ready());
}
