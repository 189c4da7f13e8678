//! Selfplay command - play games between two policies

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output,
    game::{Board, Game, OptimalPolicy, Outcome, Player, Policy, RandomPolicy},
};

#[derive(Parser, Debug)]
#[command(about = "Play games between two policies")]
pub struct SelfplayArgs {
    /// Policy playing X (optimal, random)
    #[arg(long, default_value = "optimal")]
    pub x: String,

    /// Policy playing O (optimal, random)
    #[arg(long, default_value = "optimal")]
    pub o: String,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting position as 9 cells (empty board by default)
    #[arg(long)]
    pub state: Option<String>,

    /// Print every move as it is played
    #[arg(long)]
    pub trace: bool,
}

pub fn execute(args: SelfplayArgs) -> Result<()> {
    let initial = match &args.state {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };

    let mut policy_x = make_policy(&args.x, "X", args.seed)?;
    let mut policy_o = make_policy(&args.o, "O", args.seed.map(|s| s.wrapping_add(1)))?;

    println!(
        "Playing {} game(s): {} vs {}",
        args.games,
        policy_x.name(),
        policy_o.name()
    );

    let progress = (args.games > 1 && !args.trace)
        .then(|| output::create_game_progress(args.games as u64));

    let mut x_wins = 0usize;
    let mut o_wins = 0usize;
    let mut draws = 0usize;

    for game_number in 1..=args.games {
        let mut game = Game::from_position(initial);

        while !game.is_over() {
            let board = game.current_state()?;
            let policy = if board.to_move() == Player::X {
                &mut policy_x
            } else {
                &mut policy_o
            };
            let mv = policy.select_move(&board)?;
            game.play(mv)?;

            if args.trace {
                let player = match board.to_move() {
                    Player::X => "X",
                    Player::O => "O",
                };
                println!("Game {game_number}: {player} plays {mv}");
            }
        }

        match game.outcome {
            Outcome::Win(Player::X) => x_wins += 1,
            Outcome::Win(Player::O) => o_wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::InProgress => unreachable!("game loop runs until the game is over"),
        }

        if args.trace {
            println!("{}\n", game.current_state()?);
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    output::print_section("Results");
    output::print_kv(&format!("{} (X)", policy_x.name()), &x_wins.to_string());
    output::print_kv(&format!("{} (O)", policy_o.name()), &o_wins.to_string());
    output::print_kv("Draws", &draws.to_string());

    Ok(())
}

fn make_policy(kind: &str, side: &str, seed: Option<u64>) -> Result<Box<dyn Policy>> {
    match kind.to_lowercase().as_str() {
        "optimal" => Ok(Box::new(OptimalPolicy::new(format!("Optimal {side}")))),
        "random" => {
            let name = format!("Random {side}");
            Ok(match seed {
                Some(seed) => Box::new(RandomPolicy::with_seed(name, seed)),
                None => Box::new(RandomPolicy::new(name)),
            })
        }
        other => Err(anyhow::anyhow!(
            "Unknown policy type: '{other}'. Supported: optimal, random"
        )),
    }
}
