use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::Rng;

use vd_game::{Die, GameConfig, GameSession};

pub fn run(seed: Option<u64>, clues: usize, die_sides: u32, show_clues: bool) -> Result<(), String> {
    let die = Die::custom(die_sides)
        .ok_or_else(|| format!("invalid die: need at least 2 sides, got {die_sides}"))?;
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let config = GameConfig::default()
        .with_seed(seed)
        .with_clues(clues)
        .with_die(die);

    let mut session =
        GameSession::new(config).map_err(|e| format!("failed to start game: {e}"))?;

    println!("  {} a mystery is afoot", "Verdacht:".bold());
    println!("  Seed: {seed} | Turn die: {die}");
    println!("  Deduce the secret participant, hideout, and chamber.");
    println!("  Guess format: Participant,Hideout,Chamber\n");

    if show_clues {
        for p in session.participants() {
            if let Some(sheet) = session.clue_sheet(&p.name) {
                println!("{sheet}\n");
            }
        }
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!("{}", session.prompt());
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        // Strip only the line ending: guess fields are never trimmed.
        let input = line.trim_end_matches(['\r', '\n']);

        let output = session.process(input);
        if !output.is_empty() {
            println!("{output}\n");
        }

        if session.is_solved() {
            break;
        }
    }

    Ok(())
}
