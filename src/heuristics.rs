//! Detection of lines a player can still complete

use crate::board::{Board, Cell, Player};
use crate::error::Result;
use crate::point::{Point, AXES};
use crate::ray::{cast_info_ray, InfoMode};

/// Finds the lines through `last_move` that `player` can complete in at most `moves_to_win` moves
///
/// A line qualifies when it spans the whole board, holds only `player`'s marks and empty cells,
/// and has no more than `moves_to_win` empty cells. Each returned group holds the empty cells of
/// one qualifying line, so there are between zero and four groups.
///
/// With `moves_to_win == 1` the groups are immediate wins (or cells to block, when asked about the
/// opponent). With `moves_to_win == side - 1` they are lines worth building on.
pub fn potential_winning_moves(
    board: &Board,
    player: Player,
    last_move: Option<Point>,
    moves_to_win: usize,
) -> Result<Vec<Vec<Point>>> {
    let mut groups = Vec::new();
    let anchor = match last_move {
        Some(point) if !point.is_out_of_bounds(board.size()) => point,
        _ => return Ok(groups),
    };

    let accepted = [Cell::from(player), Cell::Empty];
    for &axis in AXES.iter() {
        let info = cast_info_ray(
            anchor,
            board.side(),
            axis,
            board.cells(),
            board.size(),
            &accepted,
            true,
            InfoMode::Both,
        )?;
        // the anchor holds the opponent's mark or nothing
        let info = match info {
            Some(info) => info,
            None => continue,
        };

        if info.points.len() == board.side() && info.counts.empty <= moves_to_win {
            groups.push(
                info.points
                    .into_iter()
                    .filter(|&point| board.cell(point) == Some(Cell::Empty))
                    .collect(),
            );
        }
    }
    Ok(groups)
}
