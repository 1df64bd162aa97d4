use deckhand_core::{
    deck_cost, decode_hash, draw_probability, Bracket, CardUniverse, RenderSlot, Slot, DECK_SIZE,
    OPENING_HAND_SIZE,
};
use deckhand_data::load_cards;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const HELP: &str = "commands:
  cards <path>              load a card dump (json array)
  deck <hash>               decode a deck hash and list its cards
  cost <hash>               token cost of a deck hash
  odds <hermits> <draws> <desired>
                            chance of holding <desired> hermits
  chart <hermits> <desired> odds table over all draw counts
  bracket <p1> <p2> ...     start a single-elimination bracket
  winner <player>           declare a winner in the current round
  loser <player>            declare a forfeit
  matches                   undecided matches of the current round
  show                      full bracket layout
  save <path>               write the bracket as json
  open <path>               read a bracket back from json
  help                      this text
  quit";

struct App {
    universe: Option<CardUniverse>,
    bracket: Option<Bracket<String>>,
}

fn main() {
    let mut app = App {
        universe: None,
        bracket: None,
    };
    println!("deckhand (type `help` for commands)");
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = args.split_first() else {
            continue;
        };
        match command {
            "help" | "?" => println!("{HELP}"),
            "quit" | "exit" | "q" => break,
            "cards" => cmd_cards(&mut app, rest),
            "deck" => cmd_deck(&app, rest),
            "cost" => cmd_cost(&app, rest),
            "odds" => cmd_odds(rest),
            "chart" => cmd_chart(rest),
            "bracket" => cmd_bracket(&mut app, rest),
            "winner" => cmd_declare(&mut app, rest, true),
            "loser" => cmd_declare(&mut app, rest, false),
            "matches" => cmd_matches(&app),
            "show" => cmd_show(&app),
            "save" => cmd_save(&app, rest),
            "open" => cmd_open(&mut app, rest),
            other => println!("unknown command: {other} (try `help`)"),
        }
    }
}

fn cmd_cards(app: &mut App, args: &[&str]) {
    let Some(&path) = args.first() else {
        println!("usage: cards <path>");
        return;
    };
    match load_cards(Path::new(path)) {
        Ok(universe) => {
            println!("loaded {} cards", universe.len());
            app.universe = Some(universe);
        }
        Err(err) => eprintln!("load error: {err:#}"),
    }
}

fn cmd_deck(app: &App, args: &[&str]) {
    let Some(universe) = app.universe.as_ref() else {
        println!("no card dump loaded (use `cards <path>`)");
        return;
    };
    let Some(hash) = args.first() else {
        println!("usage: deck <hash>");
        return;
    };
    let deck = decode_hash(hash, universe);
    if deck.is_empty() {
        println!("invalid deck hash");
        return;
    }
    for card in &deck {
        println!("{}", card.rarity_name());
    }
    println!("{} cards, {} tokens", deck.len(), deck_cost(&deck));
}

fn cmd_cost(app: &App, args: &[&str]) {
    let Some(universe) = app.universe.as_ref() else {
        println!("no card dump loaded (use `cards <path>`)");
        return;
    };
    let Some(hash) = args.first() else {
        println!("usage: cost <hash>");
        return;
    };
    let deck = decode_hash(hash, universe);
    if deck.is_empty() {
        println!("invalid deck hash");
        return;
    }
    println!("{} tokens", deck_cost(&deck));
}

fn parse_counts(args: &[&str]) -> Option<Vec<u32>> {
    args.iter().map(|arg| arg.parse().ok()).collect()
}

fn cmd_odds(args: &[&str]) {
    let Some(counts) = parse_counts(args).filter(|counts| counts.len() == 3) else {
        println!("usage: odds <hermits> <draws> <desired>");
        return;
    };
    let chance = draw_probability(counts[0], counts[1], counts[2]);
    println!("{:.2}%", chance * 100.0);
}

fn cmd_chart(args: &[&str]) {
    let Some(counts) = parse_counts(args).filter(|counts| counts.len() == 2) else {
        println!("usage: chart <hermits> <desired>");
        return;
    };
    for draws in 0..=DECK_SIZE - OPENING_HAND_SIZE {
        let chance = draw_probability(counts[0], draws, counts[1]);
        println!("draw {draws:2}: {:6.2}%", chance * 100.0);
    }
}

fn cmd_bracket(app: &mut App, args: &[&str]) {
    if args.is_empty() {
        println!("usage: bracket <p1> <p2> ...");
        return;
    }
    let players: Vec<String> = args.iter().map(|name| name.to_string()).collect();
    match Bracket::new(players) {
        Ok(bracket) => {
            println!(
                "bracket started: {} layers, round {}",
                bracket.layer_count(),
                bracket.round_number()
            );
            app.bracket = Some(bracket);
        }
        Err(err) => println!("{err}"),
    }
}

fn cmd_declare(app: &mut App, args: &[&str], won: bool) {
    let Some(bracket) = app.bracket.as_mut() else {
        println!("no bracket running (use `bracket <p1> <p2> ...`)");
        return;
    };
    let Some(player) = args.first() else {
        println!("usage: {} <player>", if won { "winner" } else { "loser" });
        return;
    };
    let player = player.to_string();
    let accepted = if won {
        bracket.declare_winner(&player)
    } else {
        bracket.declare_loser(&player)
    };
    if !accepted {
        println!("no undecided match for {player}");
        return;
    }
    match bracket.champion() {
        Some(champion) => println!("champion: {champion}"),
        None => println!("recorded, round {}", bracket.round_number()),
    }
}

fn cmd_matches(app: &App) {
    let Some(bracket) = app.bracket.as_ref() else {
        println!("no bracket running");
        return;
    };
    let matches = bracket.current_matches();
    if matches.is_empty() {
        println!("no undecided matches");
        return;
    }
    for pairing in matches {
        println!("{} vs {}", slot_label(&pairing.left), slot_label(&pairing.right));
    }
}

fn cmd_show(app: &App) {
    let Some(bracket) = app.bracket.as_ref() else {
        println!("no bracket running");
        return;
    };
    for (level, layer) in bracket.render_layers().iter().enumerate() {
        let row: Vec<String> = layer.iter().map(render_label).collect();
        if level + 1 == bracket.layer_count() {
            println!("champion | {}", row.join(" | "));
        } else {
            println!("round {:2} | {}", level + 1, row.join(" | "));
        }
    }
}

fn cmd_save(app: &App, args: &[&str]) {
    let Some(bracket) = app.bracket.as_ref() else {
        println!("no bracket running");
        return;
    };
    let Some(&path) = args.first() else {
        println!("usage: save <path>");
        return;
    };
    match serde_json::to_string_pretty(bracket) {
        Ok(json) => match fs::write(path, json) {
            Ok(()) => println!("saved {path}"),
            Err(err) => eprintln!("write error: {err}"),
        },
        Err(err) => eprintln!("serialize error: {err}"),
    }
}

fn cmd_open(app: &mut App, args: &[&str]) {
    let Some(&path) = args.first() else {
        println!("usage: open <path>");
        return;
    };
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("read error: {err}");
            return;
        }
    };
    match serde_json::from_str::<Bracket<String>>(&raw) {
        Ok(bracket) => {
            println!("opened {path} (round {})", bracket.round_number());
            app.bracket = Some(bracket);
        }
        Err(err) => eprintln!("parse error: {err}"),
    }
}

fn slot_label(slot: &Slot<String>) -> &str {
    match slot {
        Slot::Player(player) => player,
        Slot::Bye => "(bye)",
    }
}

fn render_label(slot: &RenderSlot<String>) -> String {
    match slot {
        RenderSlot::Player(player) => player.clone(),
        RenderSlot::Bye => "(bye)".to_string(),
        RenderSlot::Undecided => "-".to_string(),
    }
}
