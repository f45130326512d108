//! Line-based terminal front end.

use crate::{GameConfig, GameSession, SessionSnapshot};
use anyhow::Result;
use noughts_tictactoe::{Board, Mark, Outcome, Position, classify, first_best, move_scores};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// A line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place the current mark.
    Move(Position),
    /// Take back the last move.
    Undo,
    /// Start over.
    Reset,
    /// Switch between single and multi player.
    Mode,
    /// Show commands.
    Help,
    /// Leave.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses one line of player input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "reset" => Input::Reset,
            "u" | "undo" => Input::Undo,
            "m" | "mode" => Input::Mode,
            "h" | "help" | "?" => Input::Help,
            _ => match Position::from_input(trimmed) {
                Some(pos) => Input::Move(pos),
                None => Input::Unknown(trimmed.to_string()),
            },
        }
    }
}

const HELP: &str = "Commands: 1-9 or a square name (e.g. 'center') to move, \
u = undo, r = reset, m = switch mode, h = help, q = quit";

/// Runs an interactive game on stdin/stdout until the player quits.
#[instrument(skip(config))]
pub async fn run(config: &GameConfig) -> Result<()> {
    let (mut session, mut ai_rx) = GameSession::from_config(config);
    let mut input_rx = spawn_stdin_reader();
    let show_scores = *config.show_scores();

    println!("Tic Tac Toe - {}", session.mode().name());
    println!("{HELP}");
    render(&session, show_scores);

    loop {
        if session.is_ai_turn() && !session.has_pending_ai_move() {
            session.schedule_ai_move()?;
            println!("AI is thinking...");
        }

        tokio::select! {
            Some(ai_move) = ai_rx.recv() => {
                match session.apply_ai_move(ai_move) {
                    Ok(Some(pos)) => {
                        println!("AI plays {pos}");
                        render(&session, show_scores);
                    }
                    Ok(None) => {}
                    Err(e) => println!("{e}"),
                }
            }
            line = input_rx.recv() => {
                let Some(line) = line else {
                    debug!("Input closed");
                    break;
                };
                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Help => println!("{HELP}"),
                    Input::Reset => {
                        session.reset();
                        render(&session, show_scores);
                    }
                    Input::Mode => {
                        session.set_mode(session.mode().toggle());
                        println!("Switched to {}", session.mode().name());
                        render(&session, show_scores);
                    }
                    Input::Undo => match session.undo() {
                        Ok(_) => render(&session, show_scores),
                        Err(e) => println!("{e}"),
                    },
                    Input::Move(pos) => match session.human_move(pos) {
                        Ok(_) => render(&session, show_scores),
                        Err(e) => println!("{e}"),
                    },
                    Input::Unknown(text) => {
                        println!("Unrecognized input {text:?}. Type h for help.");
                    }
                }
            }
        }
    }

    info!("Leaving game");
    Ok(())
}

fn render(session: &GameSession, show_scores: bool) {
    let snapshot = session.snapshot();
    println!("\n{}\n", snapshot.board().display());
    println!("{}", status_text(&snapshot));
    if show_scores && *snapshot.outcome() == Outcome::InProgress && !session.is_ai_turn() {
        let mark = *snapshot.to_move();
        println!("{}", score_table(snapshot.board(), mark));
    }
}

fn status_text(snapshot: &SessionSnapshot) -> String {
    match snapshot.outcome() {
        Outcome::InProgress => snapshot.status_line(),
        _ => format!("{}  (r = play again, q = quit)", snapshot.status_line()),
    }
}

fn score_table(board: &Board, mark: Mark) -> String {
    move_scores(board, mark, mark.opponent())
        .into_iter()
        .map(|(pos, score)| format!("{}:{score:+}", pos.to_index() + 1))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Describes `board` and the best move for `ai`, for the `suggest` command.
#[instrument(skip(board), fields(board = %board))]
pub fn suggestion_report(board: &Board, ai: Mark) -> String {
    let mut out = format!("{}\n\nOutcome: {}\n", board.display(), classify(board));

    let scores = move_scores(board, ai, ai.opponent());
    for (pos, score) in &scores {
        out.push_str(&format!("  {} ({pos}): {score:+}\n", pos.to_index() + 1));
    }

    match first_best(&scores) {
        Some((pos, _)) => out.push_str(&format!("Best move for {ai}: {} ({pos})", pos.to_index() + 1)),
        None => out.push_str(&format!("No move available for {ai}")),
    }
    out
}

/// Reads stdin on a dedicated thread so a blocked read never holds up runtime shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse(" Reset "), Input::Reset);
        assert_eq!(Input::parse("u"), Input::Undo);
        assert_eq!(Input::parse("mode"), Input::Mode);
        assert_eq!(Input::parse("?"), Input::Help);
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(Input::parse("5"), Input::Move(Position::Center));
        assert_eq!(Input::parse("top right"), Input::Move(Position::TopRight));
        assert_eq!(Input::parse("12"), Input::Unknown("12".to_string()));
    }

    #[test]
    fn test_suggestion_report_names_best_move() {
        let board: Board = "XX_______".parse().unwrap();
        let report = suggestion_report(&board, Mark::O);
        assert!(report.contains("Outcome: In progress"));
        assert!(report.ends_with("Best move for O: 3 (Top-right)"));
    }

    #[test]
    fn test_suggestion_report_lists_scores_and_first_max() {
        let board: Board = "XX_OO____".parse().unwrap();
        let report = suggestion_report(&board, Mark::O);
        assert!(report.contains("  3 (Top-right): +8\n"));
        assert!(report.contains("  6 (Middle-right): +10\n"));
        assert!(report.ends_with("Best move for O: 6 (Middle-right)"));
    }

    #[test]
    fn test_suggestion_report_on_finished_board() {
        let board: Board = "XXXOO____".parse().unwrap();
        let report = suggestion_report(&board, Mark::O);
        assert!(report.contains("Outcome: Winner: X"));
        assert!(report.ends_with("No move available for O"));
    }

    #[test]
    fn test_score_table_uses_board_numbers() {
        let board: Board = "XOXOXXOX_".parse().unwrap();
        assert_eq!(score_table(&board, Mark::O), "9:+0");
    }
}
