use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use xo_engine::{
    board::{Cell, GameState},
    game::{CursorMove, Game, Opponent},
    point::Point,
};

/// A line of player input during a game
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place at a board position, given 1-based as "x y"
    Place(Point),
    PlaceAtCursor,
    Cursor(CursorMove),
    Stop,
}

pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "a" | "left" => return Ok(Command::Cursor(CursorMove::Left)),
        "d" | "right" => return Ok(Command::Cursor(CursorMove::Right)),
        "w" | "up" => return Ok(Command::Cursor(CursorMove::Up)),
        "s" | "down" => return Ok(Command::Cursor(CursorMove::Down)),
        "p" | "" => return Ok(Command::PlaceAtCursor),
        "q" | "quit" | "stop" => return Ok(Command::Stop),
        _ => {}
    }

    let mut coordinates = input.split_whitespace().map(|part| part.parse::<i32>());
    match (coordinates.next(), coordinates.next(), coordinates.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Ok(Command::Place(Point::new(x - 1, y - 1))),
        _ => Err(anyhow!("could not parse '{}' as a command", input)),
    }
}

pub fn prompt(question: &str) -> Result<String> {
    print!("{}", question);
    stdout().flush()?;
    let mut buffer = String::new();
    stdin().read_line(&mut buffer)?;
    Ok(buffer)
}

pub fn display(game: &Game) -> Result<()> {
    let mut stdout = stdout();
    let board = game.board();
    let highlight = if game.state().is_over() || game.is_stopped() {
        None
    } else {
        Some(game.cursor())
    };

    let header: String = (1..=board.side()).map(|x| format!(" {} ", x)).collect();
    stdout.queue(PrintStyledContent(style(format!("   {}\n", header))))?;

    for y in 0..board.side() as i32 {
        stdout.queue(PrintStyledContent(style(format!("{:>2} ", y + 1))))?;
        for x in 0..board.side() as i32 {
            let point = Point::new(x, y);
            let cell = board.cell(point).unwrap_or(Cell::Empty);
            let (glyph, color) = match cell {
                Cell::X => (" X ", Color::Red),
                Cell::O => (" O ", Color::Yellow),
                Cell::Empty => (" . ", Color::DarkGrey),
            };
            let mut content = style(glyph).attribute(Attribute::Bold).with(color);
            if highlight == Some(point) {
                content = content.attribute(Attribute::Reverse);
            }
            stdout.queue(PrintStyledContent(content))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

pub fn announce(game: &Game) {
    let outcome = match (game.state(), game.opponent()) {
        (GameState::Draw, _) => "Game ended! Draw :/".to_string(),
        (GameState::Playing, _) => return,
        (state, Opponent::Human) => match state.winner() {
            Some(winner) => format!("Game ended! Player {} won!", winner),
            None => return,
        },
        (state, opponent) => {
            if state.winner() == Some(game.human()) {
                "Game ended! You won!".to_string()
            } else {
                format!("Game ended! {} won!", opponent)
            }
        }
    };
    println!("{}", outcome);
}
