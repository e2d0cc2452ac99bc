//! Bot-vs-bot games for comparing difficulties

use indicatif::*;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use std::ops::Add;

use crate::board::{Board, GameState, Player};
use crate::bot::{bot_move, Difficulty, RandomSource, RngSource};
use crate::error::Result;
use crate::point::Point;

/// Outcome counts over a batch of games
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl From<GameState> for Tally {
    fn from(state: GameState) -> Self {
        let mut tally = Tally::default();
        match state {
            GameState::XWin => tally.x_wins += 1,
            GameState::OWin => tally.o_wins += 1,
            GameState::Draw => tally.draws += 1,
            GameState::Playing => {}
        }
        tally
    }
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            x_wins: self.x_wins + other.x_wins,
            o_wins: self.o_wins + other.o_wins,
            draws: self.draws + other.draws,
        }
    }
}

/// Plays one full game between two bots and returns how it ended
pub fn play_bot_game(
    side: usize,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Result<GameState> {
    let mut board = Board::new(side)?;
    let mut last_moves: [Option<Point>; 2] = [None; 2];
    let mut turn = Player::X;
    loop {
        let difficulty = match turn {
            Player::X => x_difficulty,
            Player::O => o_difficulty,
        };
        let played = bot_move(
            &mut board,
            difficulty,
            turn,
            last_moves[turn.opponent().index()],
            last_moves[turn.index()],
            rng,
        )?;
        last_moves[turn.index()] = Some(played);

        let state = board.check_state(played)?;
        if state.is_over() {
            return Ok(state);
        }
        turn = turn.opponent();
    }
}

/// Plays `games` independent bot games in parallel
///
/// Game `i` draws from a generator seeded with `seed + i`, so the tally only depends on the
/// arguments.
pub fn simulate(
    side: usize,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<Tally> {
    let progress = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Simulating games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let tally = (0..games)
        .into_par_iter()
        .map(|game| -> Result<Tally> {
            let mut rng = RngSource(StdRng::seed_from_u64(seed.wrapping_add(game as u64)));
            let state = play_bot_game(side, x_difficulty, o_difficulty, &mut rng)?;
            progress.inc(1);
            Ok(Tally::from(state))
        })
        .try_reduce(Tally::default, |a, b| Ok(a + b))?;

    progress.finish();
    Ok(tally)
}
