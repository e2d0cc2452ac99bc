use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::point::{Point, Size, AXES};
use crate::ray::cast_bidirectional_ray;

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Position of the player in per-player arrays, X first
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Player::X),
            "o" => Ok(Player::O),
            other => Err(Error::invalid(format!(
                "could not parse '{}' as a mark, expected 'x' or 'o'",
                other
            ))),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    XWin,
    OWin,
    Draw,
}

impl GameState {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::X => GameState::XWin,
            Player::O => GameState::OWin,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::XWin => Some(Player::X),
            GameState::OWin => Some(Player::O),
            GameState::Playing | GameState::Draw => None,
        }
    }
}

/// Display glyphs for each cell state
///
/// Used in pairs when rendering: one table for ordinary cells and one for the highlighted cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub empty: String,
    pub x: String,
    pub o: String,
}

impl Symbols {
    pub fn new<S: Into<String>>(empty: S, x: S, o: S) -> Self {
        Self {
            empty: empty.into(),
            x: x.into(),
            o: o.into(),
        }
    }

    /// Fixed-width glyphs for plain text output
    pub fn plain() -> Self {
        Self::new(" . ", " X ", " O ")
    }

    /// Highlighted counterparts of [`Symbols::plain`]
    pub fn plain_highlighted() -> Self {
        Self::new("[.]", "[X]", "[O]")
    }

    pub fn glyph(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::X => &self.x,
            Cell::O => &self.o,
        }
    }
}

/// A square tic-tac-toe board stored left-to-right, top-to-bottom
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    side: usize,
}

impl Board {
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(Error::invalid("board side must be at least 1"));
        }
        Ok(Self {
            cells: vec![Cell::Empty; side * side],
            side,
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn size(&self) -> Size {
        Size::square(self.side)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `point`, or `None` outside the board
    pub fn cell(&self, point: Point) -> Option<Cell> {
        point
            .index_in(self.size())
            .and_then(|index| self.cells.get(index).copied())
    }

    /// The middle cell, rounded towards the top left on even sides
    pub fn center(&self) -> Point {
        let middle = ((self.side - 1) / 2) as i32;
        Point::new(middle, middle)
    }

    pub fn corners(&self) -> [Point; 4] {
        let last = self.side as i32 - 1;
        [
            Point::new(0, 0),
            Point::new(last, 0),
            Point::new(0, last),
            Point::new(last, last),
        ]
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of all empty cells, in board order
    pub fn possible_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Places `player`'s mark at `point`, which must be an empty cell on the board
    pub fn apply_move(&mut self, point: Point, player: Player) -> Result<()> {
        let index = point.index_in(self.size()).ok_or(Error::IllegalMove {
            point,
            reason: "outside the board",
        })?;
        if !self.cells[index].is_empty() {
            return Err(Error::IllegalMove {
                point,
                reason: "already occupied",
            });
        }
        self.cells[index] = player.into();
        Ok(())
    }

    /// Computes the state of the game right after a mark was placed at `last_move`
    ///
    /// Only lines through `last_move` are checked, so this must be called after every placement.
    pub fn check_state(&self, last_move: Point) -> Result<GameState> {
        let mark = self.cell(last_move).ok_or_else(|| {
            Error::invalid(format!("last move {} is outside the board", last_move))
        })?;

        if let Some(player) = mark.owner() {
            for &axis in AXES.iter() {
                if cast_bidirectional_ray(
                    last_move,
                    axis,
                    &self.cells,
                    self.size(),
                    &[mark],
                    self.side,
                )? {
                    return Ok(GameState::win_for(player));
                }
            }
        }

        if self.is_full() {
            Ok(GameState::Draw)
        } else {
            Ok(GameState::Playing)
        }
    }

    /// Renders the board one row per line, using `highlight_symbols` for the cell at `highlight`
    pub fn render(
        &self,
        highlight: Option<usize>,
        symbols: &Symbols,
        highlight_symbols: &Symbols,
    ) -> String {
        let mut rendered = String::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if index % self.side == 0 && index > 0 {
                rendered.push('\n');
            }
            if highlight == Some(index) {
                rendered.push_str(highlight_symbols.glyph(cell));
            } else {
                rendered.push_str(symbols.glyph(cell));
            }
        }
        rendered
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbols = Symbols::plain();
        f.write_str(&self.render(None, &symbols, &symbols))
    }
}
