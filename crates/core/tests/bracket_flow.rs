use deckhand_core::{Bracket, BracketError, RenderSlot, Slot};

fn players(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn bracket(names: &[&str]) -> Bracket<String> {
    Bracket::new(players(names)).unwrap()
}

#[test]
fn empty_field_is_rejected() {
    let err = Bracket::<String>::new(Vec::new()).unwrap_err();
    assert!(matches!(err, BracketError::NoPlayers));
}

#[test]
fn single_player_is_immediately_champion() {
    let bracket = bracket(&["alice"]);
    assert!(bracket.is_complete());
    assert_eq!(bracket.champion().map(String::as_str), Some("alice"));
    assert!(bracket.current_matches().is_empty());
    assert_eq!(
        bracket.render_layers(),
        vec![vec![RenderSlot::Player("alice".to_string())]]
    );
}

#[test]
fn finished_bracket_rejects_declarations() {
    let mut bracket = bracket(&["alice"]);
    assert!(!bracket.declare_winner(&"alice".to_string()));
    assert!(!bracket.declare_loser(&"alice".to_string()));
}

#[test]
fn three_players_get_one_interleaved_bye() {
    let bracket = bracket(&["a", "b", "c"]);
    assert!(!bracket.is_complete());

    // Round 1 is padded to four slots, bye after the first player, and the
    // bye match is already resolved: one undecided match remains.
    let matches = bracket.current_matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].left, Slot::Player("b".to_string()));
    assert_eq!(matches[0].right, Slot::Player("c".to_string()));

    let layers = bracket.render_layers();
    assert_eq!(layers.len(), 3);
    assert_eq!(
        layers[0],
        vec![
            RenderSlot::Player("a".to_string()),
            RenderSlot::Bye,
            RenderSlot::Player("b".to_string()),
            RenderSlot::Player("c".to_string()),
        ]
    );
    assert_eq!(layers[1], vec![RenderSlot::Undecided; 2]);
    assert_eq!(layers[2], vec![RenderSlot::Undecided]);
}

#[test]
fn bye_recipient_meets_the_other_winner() {
    let mut bracket = bracket(&["a", "b", "c"]);
    assert!(bracket.declare_winner(&"c".to_string()));
    assert_eq!(bracket.round_number(), 2);

    let matches = bracket.current_matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].left, Slot::Player("a".to_string()));
    assert_eq!(matches[0].right, Slot::Player("c".to_string()));

    assert!(bracket.declare_winner(&"c".to_string()));
    assert!(bracket.is_complete());
    assert_eq!(bracket.champion().map(String::as_str), Some("c"));
}

#[test]
fn byes_never_reach_round_two() {
    let mut bracket = bracket(&["a", "b", "c", "d", "e"]);
    // Five players pad to eight: three bye matches resolve up front.
    assert_eq!(bracket.current_matches().len(), 1);
    assert!(bracket.declare_winner(&"d".to_string()));

    assert_eq!(bracket.round_number(), 2);
    for pairing in bracket.current_matches() {
        assert!(!pairing.left.is_bye());
        assert!(!pairing.right.is_bye());
    }
}

#[test]
fn double_declaration_is_a_no_op() {
    let mut bracket = bracket(&["a", "b", "c", "d"]);
    assert!(bracket.declare_winner(&"a".to_string()));
    assert!(!bracket.declare_winner(&"a".to_string()));
    // The opponent of a decided match cannot win it either.
    assert!(!bracket.declare_winner(&"b".to_string()));
    assert!(!bracket.declare_loser(&"b".to_string()));
}

#[test]
fn unknown_and_eliminated_players_are_rejected() {
    let mut bracket = bracket(&["a", "b", "c", "d"]);
    assert!(!bracket.declare_winner(&"nobody".to_string()));

    assert!(bracket.declare_winner(&"a".to_string()));
    assert!(bracket.declare_winner(&"c".to_string()));
    // Round sealed; b lost in round 1.
    assert_eq!(bracket.round_number(), 2);
    assert!(!bracket.declare_winner(&"b".to_string()));
}

#[test]
fn declare_loser_advances_the_opponent() {
    let mut bracket = bracket(&["a", "b", "c", "d"]);
    assert!(bracket.declare_loser(&"a".to_string()));
    assert!(bracket.declare_loser(&"d".to_string()));
    assert_eq!(bracket.round_number(), 2);

    let matches = bracket.current_matches();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].left, Slot::Player("b".to_string()));
    assert_eq!(matches[0].right, Slot::Player("c".to_string()));
}

#[test]
fn sealing_halves_the_round() {
    let mut bracket = bracket(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert_eq!(bracket.current_matches().len(), 4);
    for winner in ["a", "c", "e", "g"] {
        assert!(bracket.declare_winner(&winner.to_string()));
    }
    assert_eq!(bracket.current_matches().len(), 2);
    assert_eq!(bracket.round_number(), 2);
}

#[test]
fn eight_player_run_to_champion() {
    let mut bracket = bracket(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    for winner in ["a", "c", "e", "g"] {
        assert!(bracket.declare_winner(&winner.to_string()));
    }
    for winner in ["a", "e"] {
        assert!(bracket.declare_winner(&winner.to_string()));
    }
    assert!(!bracket.is_complete());
    assert!(bracket.declare_winner(&"a".to_string()));

    assert!(bracket.is_complete());
    assert_eq!(bracket.champion().map(String::as_str), Some("a"));
    assert!(bracket.current_matches().is_empty());

    let layers = bracket.render_layers();
    let widths: Vec<usize> = layers.iter().map(Vec::len).collect();
    assert_eq!(widths, [8, 4, 2, 1]);
    assert_eq!(layers[3], vec![RenderSlot::Player("a".to_string())]);
}

#[test]
fn render_layer_widths_are_fixed_throughout() {
    let mut bracket = bracket(&["a", "b", "c", "d", "e", "f", "g", "h"]);
    let expected = [8usize, 4, 2, 1];
    for winner in ["a", "c", "e", "g", "a", "e", "a"] {
        let widths: Vec<usize> = bracket.render_layers().iter().map(Vec::len).collect();
        assert_eq!(widths, expected);
        bracket.declare_winner(&winner.to_string());
    }
    let widths: Vec<usize> = bracket.render_layers().iter().map(Vec::len).collect();
    assert_eq!(widths, expected);
}

#[test]
fn bracket_survives_a_serde_round_trip() {
    let mut bracket = bracket(&["a", "b", "c", "d", "e"]);
    assert!(bracket.declare_winner(&"d".to_string()));
    assert!(bracket.declare_winner(&"a".to_string()));

    let json = serde_json::to_string(&bracket).unwrap();
    let mut restored: Bracket<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.round_number(), bracket.round_number());
    assert_eq!(restored.current_matches(), bracket.current_matches());
    assert_eq!(restored.render_layers(), bracket.render_layers());

    // The restored bracket keeps playing.
    assert!(restored.declare_winner(&"c".to_string()));
    while !restored.is_complete() {
        let next = restored.current_matches()[0]
            .left
            .player()
            .cloned()
            .unwrap();
        assert!(restored.declare_winner(&next));
    }
    assert!(restored.champion().is_some());
}
