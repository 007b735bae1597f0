use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Write};

use connect_n::{Board, Coord};

const PLAYER_COLORS: [Color; 2] = [Color::Red, Color::Yellow];
const BOARD_COLOR: Color = Color::DarkBlue;

/// The two named players of a console session and their running score.
pub struct Session {
    pub names: [String; 2],
    pub wins: [u32; 2],
}

impl Session {
    pub fn prompt() -> Result<Self> {
        let first = read_name(0, None)?;
        let second = read_name(1, Some(&first))?;
        Ok(Self {
            names: [first, second],
            wins: [0, 0],
        })
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Whoever did not move last; the first player opens each round.
    pub fn next_player(&self, last: Option<&String>) -> usize {
        match last.and_then(|name| self.index_of(name)) {
            Some(0) => 1,
            _ => 0,
        }
    }

    pub fn record_win(&mut self, name: &str) {
        if let Some(idx) = self.index_of(name) {
            self.wins[idx] += 1;
        }
    }

    pub fn print_score(&self) {
        for (name, wins) in self.names.iter().zip(self.wins.iter()) {
            println!("{}: {}", name, wins);
        }
        println!();
    }

    pub fn styled_name(&self, idx: usize) -> Result<()> {
        let mut stdout = stdout();
        stdout.queue(PrintStyledContent(
            style(self.names[idx].as_str()).with(PLAYER_COLORS[idx]),
        ))?;
        stdout.flush()?;
        Ok(())
    }
}

fn read_name(idx: usize, taken: Option<&str>) -> Result<String> {
    loop {
        let mut stdout = stdout();
        stdout
            .queue(PrintStyledContent(style("Enter ")))?
            .queue(PrintStyledContent(
                style(format!("Player {} ", idx + 1)).with(PLAYER_COLORS[idx]),
            ))?
            .queue(PrintStyledContent(style("Name: ")))?;
        stdout.flush()?;

        let name = read_line()?;
        let name = if name.is_empty() {
            format!("Player {}", idx + 1)
        } else {
            name
        };
        if taken == Some(name.as_str()) {
            println!("That name is already taken.");
            continue;
        }
        println!("Welcome {}!", name);
        return Ok(name);
    }
}

pub fn read_line() -> Result<String> {
    let mut buffer = String::new();
    if stdin().read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer.trim().to_string())
}

pub fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        print!("{} (y/n) ", question);
        stdout().flush()?;
        match read_line()?.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Prints the board top row first, highlighting the cells of `winning_line`.
pub fn display(board: &Board<String>, session: &Session, winning_line: &[Coord]) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=board.columns())
        .map(|x| format!(" {} ", x % 10))
        .collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for (row, cells) in board.rows_iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            stdout.queue(PrintStyledContent(style("[").with(BOARD_COLOR)))?;

            let piece = match cell.as_ref().and_then(|name| session.index_of(name)) {
                Some(idx) => {
                    let piece = style("O").attribute(Attribute::Bold).with(PLAYER_COLORS[idx]);
                    if winning_line.contains(&(row, column)) {
                        piece.attribute(Attribute::Reverse)
                    } else {
                        piece
                    }
                }
                None => style(" "),
            };
            stdout.queue(PrintStyledContent(piece))?;

            stdout.queue(PrintStyledContent(style("]").with(BOARD_COLOR)))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
