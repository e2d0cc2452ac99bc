//! The scripted opponent
//!
//! The bot does not search the game tree. Each difficulty is a short list of rules tried in
//! order, falling back to a random move when none of them applies:
//!
//! - `Easy`: random move
//! - `Normal`: win in one move, block the opponent's one-move win, random move
//! - `Hard`: a fixed opening, then win, block, extend the line closest to completion, random move

use log::debug;
use rand::Rng;

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player};
use crate::error::{Error, Result};
use crate::heuristics::potential_winning_moves;
use crate::point::Point;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "normal" | "n" => Ok(Difficulty::Normal),
            "hard" | "h" => Ok(Difficulty::Hard),
            other => Err(Error::invalid(format!(
                "unknown difficulty '{}', expected easy, normal or hard",
                other
            ))),
        }
    }
}

/// A source of uniform choices for the bot
pub trait RandomSource {
    /// Returns an index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator into a [`RandomSource`]
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

fn choose<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.pick(items.len()))
    }
}

/// Picks a move for `bot`, plays it on `board` and returns where it was played
///
/// `last_opponent_move` and `last_bot_move` anchor the line detection; pass `None` for a player
/// that has not moved yet.
pub fn bot_move(
    board: &mut Board,
    difficulty: Difficulty,
    bot: Player,
    last_opponent_move: Option<Point>,
    last_bot_move: Option<Point>,
    rng: &mut dyn RandomSource,
) -> Result<Point> {
    if board.is_full() {
        return Err(Error::NoValidMoves);
    }

    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng)?,
        Difficulty::Normal => {
            match one_move_finish(board, bot, last_opponent_move, last_bot_move, rng)? {
                Some(point) => point,
                None => random_move(board, rng)?,
            }
        }
        Difficulty::Hard => hard_move(board, bot, last_opponent_move, last_bot_move, rng)?,
    };

    board.apply_move(choice, bot)?;
    debug!("{} bot ({}) played {}", difficulty, bot, choice);
    Ok(choice)
}

fn random_move(board: &Board, rng: &mut dyn RandomSource) -> Result<Point> {
    let possible_moves = board.possible_moves();
    let index = choose(&possible_moves, rng).ok_or(Error::NoValidMoves)?;
    Ok(Point::from_index(*index, board.size()))
}

// a cell completing one of `player`'s lines through `anchor`
fn completing_move(
    board: &Board,
    player: Player,
    anchor: Option<Point>,
    rng: &mut dyn RandomSource,
) -> Result<Option<Point>> {
    let groups: Vec<Vec<Point>> = potential_winning_moves(board, player, anchor, 1)?
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();
    Ok(choose(&groups, rng)
        .and_then(|group| choose(group.as_slice(), rng))
        .copied())
}

// win if possible, otherwise block the opponent's win
fn one_move_finish(
    board: &Board,
    bot: Player,
    last_opponent_move: Option<Point>,
    last_bot_move: Option<Point>,
    rng: &mut dyn RandomSource,
) -> Result<Option<Point>> {
    if let Some(point) = completing_move(board, bot, last_bot_move, rng)? {
        debug!("{} completes a line at {}", bot, point);
        return Ok(Some(point));
    }
    if let Some(point) = completing_move(board, bot.opponent(), last_opponent_move, rng)? {
        debug!("{} blocks a line at {}", bot, point);
        return Ok(Some(point));
    }
    Ok(None)
}

fn hard_move(
    board: &Board,
    bot: Player,
    last_opponent_move: Option<Point>,
    last_bot_move: Option<Point>,
    rng: &mut dyn RandomSource,
) -> Result<Point> {
    if last_bot_move.is_none() {
        return match opening_move(board, rng) {
            Some(point) => Ok(point),
            None => random_move(board, rng),
        };
    }

    if let Some(point) = one_move_finish(board, bot, last_opponent_move, last_bot_move, rng)? {
        return Ok(point);
    }
    if let Some(point) = building_move(board, bot, last_bot_move, rng)? {
        return Ok(point);
    }
    random_move(board, rng)
}

/// The first move of a hard bot
///
/// On even sides the center cell (rounded towards the top left) is taken when free. Otherwise a
/// random free corner is taken, and `None` means every corner is occupied.
fn opening_move(board: &Board, rng: &mut dyn RandomSource) -> Option<Point> {
    let center = board.center();
    if board.side() % 2 == 0 && board.cell(center).map_or(false, |cell| cell.is_empty()) {
        return Some(center);
    }
    let free_corners: Vec<Point> = board
        .corners()
        .iter()
        .copied()
        .filter(|&corner| board.cell(corner).map_or(false, |cell| cell.is_empty()))
        .collect();
    choose(&free_corners, rng).copied()
}

// a cell on one of the bot's lines with the fewest empty cells left
fn building_move(
    board: &Board,
    bot: Player,
    last_bot_move: Option<Point>,
    rng: &mut dyn RandomSource,
) -> Result<Option<Point>> {
    let moves_to_win = board.side().saturating_sub(1);
    let groups: Vec<Vec<Point>> = potential_winning_moves(board, bot, last_bot_move, moves_to_win)?
        .into_iter()
        .filter(|group| !group.is_empty())
        .collect();

    let shortest = match groups.iter().map(Vec::len).min() {
        Some(shortest) => shortest,
        None => return Ok(None),
    };
    let candidates: Vec<Point> = groups
        .into_iter()
        .filter(|group| group.len() == shortest)
        .flatten()
        .collect();
    Ok(choose(&candidates, rng).copied())
}
