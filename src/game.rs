//! A single match, from the first placement to a win, a draw or a stop

use log::{info, warn};

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, GameState, Player, Symbols};
use crate::bot::{bot_move, Difficulty, RandomSource};
use crate::clamp_side;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::stats::GameRecorder;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Opponent {
    Human,
    Bot(Difficulty),
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Opponent::Human => f.write_str("Human"),
            Opponent::Bot(difficulty) => write!(f, "Bot ({})", difficulty),
        }
    }
}

impl FromStr for Opponent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" | "friend" => Ok(Opponent::Human),
            other => other.parse().map(Opponent::Bot),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Up,
    Down,
}

/// One game between a human and either another human or the bot
///
/// X always moves first. In bot games every human placement is answered by the bot straight
/// away, so the human is the only one who ever calls [`Game::play`].
pub struct Game {
    board: Board,
    opponent: Opponent,
    human: Player,
    turn: Player,
    last_moves: [Option<Point>; 2],
    cursor: Point,
    state: GameState,
    stopped: bool,
    recorder: Box<dyn GameRecorder>,
}

impl Game {
    /// Starts a game on a `side` by `side` board, clamped to the supported range
    ///
    /// `human` is the mark of the player starting the game. It only matters against the bot:
    /// when the human plays O, the bot opens the game here.
    pub fn new(
        side: usize,
        opponent: Opponent,
        human: Player,
        recorder: Box<dyn GameRecorder>,
        rng: &mut dyn RandomSource,
    ) -> Result<Self> {
        let board = Board::new(clamp_side(side))?;
        let cursor = board.center();
        let mut game = Self {
            board,
            opponent,
            human,
            turn: Player::X,
            last_moves: [None; 2],
            cursor,
            state: GameState::Playing,
            stopped: false,
            recorder,
        };
        if let Opponent::Bot(difficulty) = opponent {
            if human == Player::O {
                game.bot_turn(difficulty, rng)?;
            }
        }
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn last_move(&self, player: Player) -> Option<Point> {
        self.last_moves[player.index()]
    }

    /// Moves the cursor one cell, staying on the board. Returns whether it moved.
    pub fn move_cursor(&mut self, direction: CursorMove) -> bool {
        let step = match direction {
            CursorMove::Left => Point::LEFT,
            CursorMove::Right => Point::RIGHT,
            CursorMove::Up => Point::UP,
            CursorMove::Down => Point::DOWN,
        };
        let next = self.cursor + step;
        if next.is_out_of_bounds(self.board.size()) {
            return false;
        }
        self.cursor = next;
        true
    }

    /// Places the current player's mark under the cursor
    pub fn place(&mut self, rng: &mut dyn RandomSource) -> Result<GameState> {
        let cursor = self.cursor;
        self.play(cursor, rng)
    }

    /// Places the current player's mark at `point`, then lets the bot answer in bot games
    pub fn play(&mut self, point: Point, rng: &mut dyn RandomSource) -> Result<GameState> {
        if self.stopped || self.state.is_over() {
            return Err(Error::GameOver);
        }
        if let Opponent::Bot(_) = self.opponent {
            if self.turn != self.human {
                return Err(Error::NotYourTurn);
            }
        }

        self.board.apply_move(point, self.turn)?;
        self.commit(point)?;

        if let Opponent::Bot(difficulty) = self.opponent {
            if !self.state.is_over() {
                self.bot_turn(difficulty, rng)?;
            }
        }
        Ok(self.state)
    }

    /// Abandons the game without recording it. Returns whether the game was still running.
    pub fn stop(&mut self) -> bool {
        let was_running = !self.stopped && !self.state.is_over();
        self.stopped = true;
        was_running
    }

    /// Renders the board with the cursor highlighted while the game is running
    pub fn render(&self, symbols: &Symbols, highlight_symbols: &Symbols) -> String {
        let highlight = if self.stopped || self.state.is_over() {
            None
        } else {
            self.cursor.index_in(self.board.size())
        };
        self.board.render(highlight, symbols, highlight_symbols)
    }

    fn bot_turn(&mut self, difficulty: Difficulty, rng: &mut dyn RandomSource) -> Result<()> {
        let bot = self.turn;
        let last_opponent_move = self.last_move(bot.opponent());
        let last_bot_move = self.last_move(bot);
        let reply = bot_move(
            &mut self.board,
            difficulty,
            bot,
            last_opponent_move,
            last_bot_move,
            rng,
        )?;
        self.commit(reply)
    }

    // bookkeeping after the current player's mark landed on `point`
    fn commit(&mut self, point: Point) -> Result<()> {
        self.last_moves[self.turn.index()] = Some(point);
        self.state = self.board.check_state(point)?;
        if self.state.is_over() {
            self.finish();
        } else {
            self.turn = self.turn.opponent();
        }
        Ok(())
    }

    fn finish(&mut self) {
        info!(
            "{}x{} game against {} finished: {:?}",
            self.board.side(),
            self.board.side(),
            self.opponent,
            self.state
        );
        if let Err(err) = self.recorder.record_completed_game() {
            warn!("failed to record completed game: {:#}", err);
        }
    }
}
