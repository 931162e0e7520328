use std::io::{self, BufRead, Write};

use chess_core::{evaluate, validate_and_apply, Engine, Position};
use parallel_engine::{recommend, ParallelEngine};

/// Map algebraic notation ("e2") to internal (row, col), where row 0 is
/// rank 8. Values may land outside the board; the core validator rejects
/// those as out-of-bounds, so only the token shape is checked here.
fn parse_square(token: &str) -> Option<(i8, i8)> {
    let b = token.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let col = b[0] as i8 - b'a' as i8;
    let row = 8 - (b[1] as i8 - b'0' as i8);
    Some((row, col))
}

fn show_recommendations(out: &mut impl Write, pos: &Position) {
    match recommend(pos) {
        None => {
            writeln!(out, "No moves available.").ok();
        }
        Some(rec) => {
            let (best, best_score) = rec.best;
            writeln!(out, "Move recommendations:").ok();
            writeln!(out, "1. Best move (score {best_score}):").ok();
            write!(out, "{best}").ok();
            if let Some((second, second_score)) = rec.second {
                writeln!(out, "2. Second best move (score {second_score}):").ok();
                write!(out, "{second}").ok();
            }
        }
    }
    out.flush().ok();
}

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    let mut engine = ParallelEngine::new();
    let mut pos = Position::startpos();

    writeln!(stdout, "You play White. Enter moves as two squares, e.g. 'e2 e4'.").ok();
    writeln!(stdout, "Commands: 'recommend' for suggestions, 'quit' to exit.").ok();

    'game: loop {
        writeln!(stdout).ok();
        write!(stdout, "{pos}").ok();

        // Player's turn: re-prompt until a move applies.
        loop {
            write!(stdout, "\nYour move: ").ok();
            stdout.flush().ok();

            let line = match lines.next() {
                Some(Ok(l)) => l,
                _ => break 'game,
            };
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [] => continue,
                ["quit", ..] => {
                    writeln!(stdout, "Goodbye.").ok();
                    return;
                }
                ["recommend", ..] => {
                    show_recommendations(&mut stdout, &pos);
                    continue;
                }
                [from, to] => {
                    let (Some(from), Some(to)) = (parse_square(from), parse_square(to)) else {
                        writeln!(stdout, "Squares look like 'e2'. Try again.").ok();
                        continue;
                    };
                    match validate_and_apply(&pos, from, to) {
                        Ok(next) => {
                            pos = next;
                            break;
                        }
                        Err(e) => {
                            writeln!(stdout, "Invalid move: {e}. Try again.").ok();
                        }
                    }
                }
                _ => {
                    writeln!(stdout, "Enter two squares, 'recommend', or 'quit'.").ok();
                }
            }
        }

        if pos.is_game_over() {
            write!(stdout, "{pos}").ok();
            writeln!(stdout, "You win. Game over.").ok();
            return;
        }

        writeln!(stdout, "\nEngine is thinking...").ok();
        stdout.flush().ok();
        let result = engine.search(&pos);
        match result.best {
            Some(next) => {
                pos = next;
                writeln!(
                    stdout,
                    "Engine moved (depth {}). Current evaluation: {}",
                    result.depth,
                    evaluate(&pos)
                )
                .ok();
            }
            None => {
                writeln!(stdout, "Engine has no moves. Game over.").ok();
                return;
            }
        }

        if pos.is_game_over() {
            write!(stdout, "{pos}").ok();
            writeln!(stdout, "The engine wins. Game over.").ok();
            return;
        }
    }
}
