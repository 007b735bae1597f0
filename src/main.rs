use anyhow::Result;
use clap::Parser;
use log::info;

use std::io::{stdout, Write};

use connect_n::{Game, GameConfig, GameStatus};

mod console;
use console::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play connect-N in the terminal", long_about = None)]
struct Args {
    /// Number of columns on the board
    #[arg(long, default_value_t = connect_n::DEFAULT_COLUMNS)]
    columns: usize,

    /// Number of rows on the board
    #[arg(long, default_value_t = connect_n::DEFAULT_ROWS)]
    rows: usize,

    /// Pieces in a row needed to win
    #[arg(long, default_value_t = connect_n::DEFAULT_WIN_LENGTH)]
    win_length: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // the console game is always two players
    let config = GameConfig::new(args.columns, args.rows, 2, args.win_length);
    config.validate()?;
    info!("starting session with {:?}", config);

    println!("Welcome to Connect {}!  Please enter player names.\n", config.win_length);
    let mut session = Session::prompt()?;

    loop {
        play_round(&mut session, config)?;
        session.print_score();

        if !ask_yes_no("Play again?")? {
            break;
        }
    }
    Ok(())
}

fn play_round(session: &mut Session, config: GameConfig) -> Result<()> {
    let mut game: Game<String> = Game::new(config)?;
    display(game.board(), session, &[])?;
    println!();

    // game loop
    loop {
        match game.status() {
            GameStatus::Playing => {
                let current = session.next_player(game.last_player());
                session.styled_name(current)?;
                print!("'s turn.  Select a column to place your piece: ");
                stdout().flush()?;

                let input = read_line()?;
                let column = match input.parse::<usize>() {
                    Ok(column) => column,
                    Err(_) => {
                        println!("Invalid number: {}", input);
                        continue;
                    }
                };

                if let Err(err) = game.place(session.names[current].clone(), column) {
                    // try the move again
                    println!("{}\n", err);
                    continue;
                }
                // a winning board is drawn once, highlighted, below
                if game.win_coords().is_empty() {
                    display(game.board(), session, &[])?;
                    println!();
                }
            }

            // end states
            GameStatus::Won { player, line } => {
                display(game.board(), session, &line)?;
                println!("Congratulations {}!", player);
                session.record_win(&player);
                return Ok(());
            }
            GameStatus::Draw => {
                println!("Draw!");
                return Ok(());
            }
        }
    }
}
