//! CLI Yahtzee example for one to four local players.
//!
//! The game is saved to `yahtzee-save.json` in the temp directory after
//! every change and resumed on the next start.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use yahtzee::{Category, Game, GameOptions, GameSnapshot, RoundPhase};

const MAX_PLAYERS: usize = 4;

#[derive(Serialize, Deserialize)]
struct SavedPlayer {
    name: String,
    game: GameSnapshot,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SaveFile {
    current_player: usize,
    players: Vec<SavedPlayer>,
}

impl SaveFile {
    fn path() -> PathBuf {
        std::env::temp_dir().join("yahtzee-save.json")
    }

    fn load() -> Option<Self> {
        let json = fs::read_to_string(Self::path()).ok()?;
        match serde_json::from_str::<Self>(&json) {
            Ok(save) if !save.players.is_empty() => Some(save),
            Ok(_) => None,
            Err(err) => {
                log::warn!("ignoring unreadable save file: {err}");
                None
            }
        }
    }

    fn write(&self) {
        let result = serde_json::to_string_pretty(self)
            .map_err(io::Error::other)
            .and_then(|json| fs::write(Self::path(), json));
        if let Err(err) = result {
            log::warn!("could not save game: {err}");
        }
    }

    fn remove() {
        let _ = fs::remove_file(Self::path());
    }
}

struct Player {
    name: String,
    game: Game,
}

fn main() {
    env_logger::init();

    println!("Yahtzee CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();

    let save = Rc::new(RefCell::new(SaveFile::load().unwrap_or_default()));
    let mut players = if save.borrow().players.is_empty() {
        new_players(&save, options, seed)
    } else {
        println!("Resuming saved game.");
        match restore_players(&save, options, seed) {
            Some(players) => players,
            None => {
                *save.borrow_mut() = SaveFile::default();
                new_players(&save, options, seed)
            }
        }
    };

    for (index, player) in players.iter_mut().enumerate() {
        attach_save(&save, index, &mut player.game);
    }

    let mut current = save.borrow().current_player % players.len();

    loop {
        if players.iter().all(|player| is_done(&player.game)) {
            print_final(&players);
            SaveFile::remove();
            break;
        }

        let player = &mut players[current];
        if player.game.objective_selected() && !player.game.round() {
            current = (current + 1) % players.len();
            continue;
        }

        if !play_turn(player) {
            println!("Game saved. Goodbye.");
            return;
        }

        current = (current + 1) % players.len();
        let mut file = save.borrow_mut();
        file.current_player = current;
        file.write();
    }
}

fn new_players(save: &Rc<RefCell<SaveFile>>, options: GameOptions, seed: u64) -> Vec<Player> {
    let mut players = Vec::new();

    while players.len() < MAX_PLAYERS {
        let name = prompt_line(&format!(
            "Name for player {} (empty to start): ",
            players.len() + 1
        ));
        if name.is_empty() {
            break;
        }
        players.push(name);
    }
    if players.is_empty() {
        players.push("Player 1".to_string());
    }

    let players: Vec<Player> = players
        .into_iter()
        .enumerate()
        .map(|(index, name)| Player {
            name,
            game: Game::new(options, seed.wrapping_add(index as u64)),
        })
        .collect();

    let mut file = save.borrow_mut();
    file.current_player = 0;
    file.players = players
        .iter()
        .map(|player| SavedPlayer {
            name: player.name.clone(),
            game: player.game.snapshot(),
        })
        .collect();
    file.write();
    drop(file);

    players
}

fn restore_players(
    save: &Rc<RefCell<SaveFile>>,
    options: GameOptions,
    seed: u64,
) -> Option<Vec<Player>> {
    let file = save.borrow();
    let mut players = Vec::with_capacity(file.players.len());

    for (index, saved) in file.players.iter().enumerate() {
        match Game::from_snapshot(
            saved.game.clone(),
            options,
            seed.wrapping_add(index as u64),
        ) {
            Ok(game) => players.push(Player {
                name: saved.name.clone(),
                game,
            }),
            Err(err) => {
                log::warn!("discarding saved game for {}: {err}", saved.name);
                return None;
            }
        }
    }

    Some(players)
}

/// Keeps the save file current whenever a player's game changes.
fn attach_save(save: &Rc<RefCell<SaveFile>>, index: usize, game: &mut Game) {
    let persist = {
        let save = Rc::clone(save);
        move |game: &Game| {
            let mut file = save.borrow_mut();
            if let Some(saved) = file.players.get_mut(index) {
                saved.game = game.snapshot();
            }
            file.write();
        }
    };

    game.on_dice_rolled(persist.clone());
    game.on_round_advanced(persist.clone());
    game.on_score_updated(persist);
}

fn is_done(game: &Game) -> bool {
    game.is_finished() && game.objective_selected()
}

/// Plays one player's turn. Returns `false` if the user quit.
fn play_turn(player: &mut Player) -> bool {
    println!("\n=== {} - round {} ===", player.name, player.game.current_round());

    loop {
        print_dice(&player.game);
        print_score_card(&player.game);
        println!("{}", format_actions(&player.game));

        let input = prompt_line("Action: ");
        let mut words = input.split_whitespace();
        match words.next() {
            Some("r" | "roll") => {
                if !player.game.throw_dice() {
                    println!("No rolls left. Pick a category.");
                }
            }
            Some("l" | "lock") => {
                for word in words {
                    let Some(index) = word.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
                    else {
                        println!("Not a die number: {word}");
                        continue;
                    };
                    if let Err(err) = player.game.lock_dice(index) {
                        println!("Lock error: {err}");
                    }
                }
            }
            Some("s" | "score") => {
                let Some(category) = words.next().and_then(parse_category) else {
                    println!("Pick a category number from the score card.");
                    continue;
                };
                match player.game.commit(category) {
                    Ok(points) => {
                        println!("{} scores {points} for {}.", player.name, category.label());
                        return true;
                    }
                    Err(err) => println!("Score error: {err}"),
                }
            }
            Some("q" | "quit") => return false,
            _ => println!("Unknown action."),
        }
    }
}

fn parse_category(word: &str) -> Option<Category> {
    let number = word.parse::<usize>().ok()?;
    Category::ALL.get(number.checked_sub(1)?).copied()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_dice(game: &Game) {
    let dice: Vec<String> = game
        .dice()
        .iter()
        .enumerate()
        .map(|(index, die)| {
            let text = format!("{}:[{}]", index + 1, die.value());
            if die.is_locked() {
                colorize(&text, "33")
            } else {
                text
            }
        })
        .collect();

    println!(
        "\nDice: {} | rolls left {}",
        dice.join(" "),
        game.rolls_left()
    );
}

fn print_score_card(game: &Game) {
    let estimates = game.estimates();
    for (number, objective) in game.objectives().iter().enumerate() {
        let cell = match objective.points() {
            Some(points) => colorize(&points.to_string(), "90"),
            None => colorize(&estimates[objective.name().index()].to_string(), "32"),
        };
        println!("{:>3}. {:<16} {cell}", number + 1, objective.display());
    }
    println!("     {:<16} {}", "Total", game.score());
}

fn format_actions(game: &Game) -> String {
    let can_roll = game.round_phase() == RoundPhase::Rolling;
    let can_score = game.round_phase() != RoundPhase::Ended;

    let parts = [
        format_action("roll", "r", can_roll),
        format_action("lock <dice>", "l", can_roll),
        format_action("score <n>", "s", can_score),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn print_final(players: &[Player]) {
    println!("\nFinal scores");
    let mut ranking: Vec<&Player> = players.iter().collect();
    ranking.sort_by_key(|player| std::cmp::Reverse(player.game.score()));
    for player in ranking {
        println!("  {:<16} {}", player.name, player.game.score());
    }
}
