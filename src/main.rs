use anyhow::Result;
use clap::Parser;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use std::path::PathBuf;

use xo_engine::{
    board::{GameState, Player},
    bot::{Difficulty, RngSource},
    game::{Game, Opponent},
    simulate::simulate,
    stats::{StatsFile, STATS_PATH},
    Error, DEFAULT_SIDE, MAX_SIDE, MIN_SIDE,
};

mod terminal;
use terminal::*;

/// Generalized Tic-Tac-Toe on boards from 3x3 to 7x7, against a friend or a bot
#[derive(Parser, Debug)]
#[command(name = "xo", version)]
struct Cli {
    /// Side of the board (3 to 7)
    #[arg(long)]
    side: Option<usize>,

    /// "human", or a bot difficulty: easy, normal or hard
    #[arg(long)]
    opponent: Option<Opponent>,

    /// Your mark against the bot, x or o (x moves first)
    #[arg(long)]
    mark: Option<Player>,

    /// File holding the completed-game statistics
    #[arg(long, default_value = STATS_PATH)]
    stats_file: PathBuf,

    /// Print the statistics and exit
    #[arg(long)]
    stats: bool,

    /// Play this many bot-vs-bot games and print the results
    #[arg(long)]
    simulate: Option<usize>,

    /// Difficulty of the X bot in simulations
    #[arg(long, default_value = "normal")]
    x_bot: Difficulty,

    /// Difficulty of the O bot in simulations
    #[arg(long, default_value = "hard")]
    o_bot: Difficulty,

    /// Seed for the bot's random choices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let stats_file = StatsFile::new(&cli.stats_file);

    if cli.stats {
        let statistics = stats_file.load()?;
        println!("Games played: {}", statistics.games_played);
        match statistics.last_game {
            Some(timestamp) => println!("Last game finished at {} ms since the Unix epoch", timestamp),
            None => println!("No game finished yet"),
        }
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    debug!("using seed {}", seed);

    if let Some(games) = cli.simulate {
        let side = xo_engine::clamp_side(cli.side.unwrap_or(DEFAULT_SIDE));
        println!(
            "Simulating {} games on a {}x{} board: {} (X) vs {} (O)",
            games, side, side, cli.x_bot, cli.o_bot
        );
        let tally = simulate(side, cli.x_bot, cli.o_bot, games, seed, true)?;
        println!(
            "X wins: {}, O wins: {}, draws: {}",
            tally.x_wins, tally.o_wins, tally.draws
        );
        return Ok(());
    }

    let mut rng = RngSource(StdRng::seed_from_u64(seed));

    println!("Welcome to Tic-Tac-Toe\n");

    // choose the board side
    let side = match cli.side {
        Some(side) => side,
        None => loop {
            let answer = prompt(&format!(
                "Board side ({}-{}, empty for {}): ",
                MIN_SIDE, MAX_SIDE, DEFAULT_SIDE
            ))?;
            if answer.trim().is_empty() {
                break DEFAULT_SIDE;
            }
            match answer.trim().parse::<usize>() {
                Ok(side) if (MIN_SIDE..=MAX_SIDE).contains(&side) => break side,
                _ => println!("Unknown answer given"),
            }
        },
    };

    // choose the opponent
    let opponent = match cli.opponent {
        Some(opponent) => opponent,
        None => loop {
            let answer = prompt("Opponent (human/easy/normal/hard): ")?;
            match answer.parse::<Opponent>() {
                Ok(opponent) => break opponent,
                Err(_) => println!("Unknown answer given"),
            }
        },
    };

    // choose the mark against the bot
    let human = match (opponent, cli.mark) {
        (Opponent::Human, _) => Player::X,
        (_, Some(mark)) => mark,
        (_, None) => loop {
            let answer = prompt("Play as x or o? ")?;
            match answer.parse::<Player>() {
                Ok(mark) => break mark,
                Err(_) => println!("Unknown answer given"),
            }
        },
    };

    let mut game = Game::new(side, opponent, human, Box::new(stats_file), &mut rng)?;
    println!("Move with w/a/s/d, place with p (or enter), or type a position as 'x y'. q stops the game.\n");

    // game loop
    loop {
        display(&game)?;

        if game.state() != GameState::Playing {
            announce(&game);
            break;
        }

        if let Opponent::Human = game.opponent() {
            println!("Player {}'s turn", game.turn());
        }
        let input = prompt("Move input > ")?;
        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let result = match command {
            Command::Cursor(direction) => {
                game.move_cursor(direction);
                continue;
            }
            Command::Stop => {
                game.stop();
                println!("The game was stopped.");
                break;
            }
            Command::PlaceAtCursor => game.place(&mut rng),
            Command::Place(point) => game.play(point, &mut rng),
        };

        match result {
            Ok(_) => {}
            // try the move again
            Err(err @ Error::IllegalMove { .. }) => println!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
