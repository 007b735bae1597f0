use crate::error::ConfigError;
use crate::{DEFAULT_COLUMNS, DEFAULT_PLAYER_LIMIT, DEFAULT_ROWS, DEFAULT_WIN_LENGTH, MAX_CELLS};

/// Dimensions and rules of a single game, fixed once the game is created.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub player_limit: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            player_limit: DEFAULT_PLAYER_LIMIT,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl GameConfig {
    pub fn new(columns: usize, rows: usize, player_limit: usize, win_length: usize) -> Self {
        Self {
            columns,
            rows,
            player_limit,
            win_length,
        }
    }

    /// Total number of cells, and so the most moves a game can hold.
    pub fn cells(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyBoard {
                columns: self.columns,
                rows: self.rows,
            });
        }
        match self.columns.checked_mul(self.rows) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::BoardTooLarge {
                    columns: self.columns,
                    rows: self.rows,
                    limit: MAX_CELLS,
                })
            }
        }
        if self.player_limit == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.win_length == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        // a line longer than one dimension can still run along the other
        if self.win_length > self.rows && self.win_length > self.columns {
            return Err(ConfigError::UnreachableWinLength {
                win_length: self.win_length,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_connect_four() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::new(7, 6, 2, 4));
        assert_eq!(config.cells(), 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert_eq!(
            GameConfig::new(0, 6, 2, 4).validate(),
            Err(ConfigError::EmptyBoard { columns: 0, rows: 6 })
        );
        assert_eq!(
            GameConfig::new(7, 6, 0, 4).validate(),
            Err(ConfigError::NoPlayers)
        );
        assert_eq!(
            GameConfig::new(7, 6, 2, 0).validate(),
            Err(ConfigError::ZeroWinLength)
        );
        assert_eq!(
            GameConfig::new(3, 3, 2, 4).validate(),
            Err(ConfigError::UnreachableWinLength {
                win_length: 4,
                columns: 3,
                rows: 3
            })
        );
    }

    #[test]
    fn rejects_oversized_boards() {
        assert_eq!(
            GameConfig::new(usize::MAX, 2, 2, 4).validate(),
            Err(ConfigError::BoardTooLarge {
                columns: usize::MAX,
                rows: 2,
                limit: MAX_CELLS
            })
        );
        assert!(GameConfig::new(usize::MAX, 1, 2, 4).validate().is_err());
        assert!(GameConfig::new(MAX_CELLS, 1, 2, 4).validate().is_ok());
        assert_eq!(GameConfig::new(usize::MAX, 2, 2, 4).cells(), usize::MAX);
    }

    #[test]
    fn long_line_fits_along_one_dimension() {
        // only horizontal lines can reach 5 on a 5x2 board
        assert!(GameConfig::new(5, 2, 2, 5).validate().is_ok());
        assert!(GameConfig::new(1, 1, 1, 1).validate().is_ok());
    }
}
