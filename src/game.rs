use log::{debug, trace};

use std::fmt::Debug;

use crate::board::{Board, Coord};
use crate::config::GameConfig;
use crate::error::{ConfigError, PlaceError, ReplayError};

// (row delta, column delta), probed in this order from every origin cell
const DIRECTIONS: [(isize, isize); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Where a game stands after the latest move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus<P> {
    Playing,
    Won { player: P, line: Vec<Coord> },
    Draw,
}

/// A single connect-N game: the board, who has joined, and whose move was last.
#[derive(Clone, Debug)]
pub struct Game<P> {
    board: Board<P>,
    config: GameConfig,
    players: Vec<P>, // registration order
    move_count: usize,
    last_player: Option<P>,
}

impl<P> Default for Game<P> {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl<P> Game<P> {
    /// Creates a game after checking that `config` can produce a winner.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.columns, config.rows),
            config,
            players: Vec::with_capacity(config.player_limit),
            move_count: 0,
            last_player: None,
        }
    }

    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[P] {
        &self.players
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The player who made the most recent move, `None` before the first.
    pub fn last_player(&self) -> Option<&P> {
        self.last_player.as_ref()
    }

    /// True once every cell is filled.
    ///
    /// A full board can still hold a winning line; check [`Game::win_coords`]
    /// first, or use [`Game::status`].
    pub fn is_draw(&self) -> bool {
        self.move_count == self.config.cells()
    }
}

impl<P: Clone + Eq + Debug> Game<P> {
    /// Replays `(player, column)` moves into a fresh game, stopping at the first
    /// rejected move.
    pub fn from_moves<I>(config: GameConfig, moves: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = (P, usize)>,
    {
        let mut game = Self::new(config)?;
        for (index, (player, column)) in moves.into_iter().enumerate() {
            game.place(player, column)
                .map_err(|source| ReplayError::Place { index, source })?;
        }
        Ok(game)
    }

    /// Drops a piece for `player` into the 1-indexed `column`.
    ///
    /// The player is registered before the column is checked, so a newcomer
    /// stays registered even if this particular move is rejected.
    pub fn place(&mut self, player: P, column: usize) -> Result<&Board<P>, PlaceError> {
        self.register(&player)?;

        if column < 1 || column > self.config.columns {
            let err = PlaceError::InvalidColumn {
                column,
                columns: self.config.columns,
            };
            debug!("rejected move by {:?}: {}", player, err);
            return Err(err);
        }

        let landed = match self.board.drop_piece(column - 1, player.clone()) {
            Some(coord) => coord,
            None => {
                let err = PlaceError::ColumnFull { column };
                debug!("rejected move by {:?}: {}", player, err);
                return Err(err);
            }
        };
        trace!("{:?} dropped into column {} at {:?}", player, column, landed);

        self.last_player = Some(player);
        self.move_count += 1;
        Ok(&self.board)
    }

    fn register(&mut self, player: &P) -> Result<(), PlaceError> {
        if self.players.contains(player) {
            return Ok(());
        }
        if self.players.len() >= self.config.player_limit {
            let err = PlaceError::too_many_players(player, self.config.player_limit);
            debug!("{}", err);
            return Err(err);
        }
        self.players.push(player.clone());
        Ok(())
    }

    /// The first winning line of the last mover, or an empty list.
    ///
    /// Origins are scanned row-major from the top-left and every origin tries
    /// each direction in turn; the first line reaching the win length is
    /// returned as-is.
    pub fn win_coords(&self) -> Vec<Coord> {
        let win_length = self.config.win_length;
        // nobody can have placed win_length pieces yet
        if self.move_count < (2 * win_length).saturating_sub(1) {
            return Vec::new();
        }
        let player = match &self.last_player {
            Some(player) => player,
            None => return Vec::new(),
        };

        for row in 0..self.board.rows() {
            for column in 0..self.board.columns() {
                if self.board.get(row, column) != Some(player) {
                    continue;
                }
                for &direction in DIRECTIONS.iter() {
                    if let Some(line) = self.extend_line(player, (row, column), direction) {
                        debug!("{:?} completed a line at {:?}", player, line);
                        return line;
                    }
                }
            }
        }
        Vec::new()
    }

    fn extend_line(
        &self,
        player: &P,
        origin: Coord,
        (row_step, column_step): (isize, isize),
    ) -> Option<Vec<Coord>> {
        let win_length = self.config.win_length;
        let mut line = Vec::with_capacity(win_length);
        let (mut row, mut column) = (origin.0 as isize, origin.1 as isize);

        while self.board.get_signed(row, column) == Some(player) {
            line.push((row as usize, column as usize));
            if line.len() == win_length {
                return Some(line);
            }
            row += row_step;
            column += column_step;
        }
        None
    }

    /// Combines [`Game::win_coords`] and [`Game::is_draw`], a win taking
    /// precedence over a full board.
    pub fn status(&self) -> GameStatus<P> {
        let line = self.win_coords();
        match &self.last_player {
            Some(player) if !line.is_empty() => GameStatus::Won {
                player: player.clone(),
                line,
            },
            _ if self.is_draw() => GameStatus::Draw,
            _ => GameStatus::Playing,
        }
    }
}
