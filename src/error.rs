use std::fmt::Debug;

/// Reasons a single placement can be rejected.
///
/// A rejected placement never touches the board; the caller can re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {columns}")]
    InvalidColumn { column: usize, columns: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("Player {player} is invalid, this game is limited to {limit} players")]
    TooManyPlayers { player: String, limit: usize },
}

impl PlaceError {
    pub(crate) fn too_many_players<P: Debug>(player: &P, limit: usize) -> Self {
        PlaceError::TooManyPlayers {
            player: format!("{:?}", player),
            limit,
        }
    }
}

/// Board configurations that are refused at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column, got {columns}x{rows}")]
    EmptyBoard { columns: usize, rows: usize },

    #[error("a {columns}x{rows} board exceeds the limit of {limit} cells")]
    BoardTooLarge {
        columns: usize,
        rows: usize,
        limit: usize,
    },

    #[error("at least one player is required")]
    NoPlayers,

    #[error("win length must be at least 1")]
    ZeroWinLength,

    #[error("win length {win_length} does not fit a {columns}x{rows} board")]
    UnreachableWinLength {
        win_length: usize,
        columns: usize,
        rows: usize,
    },
}

/// Errors from replaying a move list into a fresh game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("move {index} rejected: {source}")]
    Place { index: usize, source: PlaceError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_error_display() {
        let err = PlaceError::InvalidColumn {
            column: 8,
            columns: 7,
        };
        assert_eq!(
            err.to_string(),
            "Invalid move, column 8 out of range. Columns must be between 1 and 7"
        );
        assert_eq!(
            PlaceError::ColumnFull { column: 3 }.to_string(),
            "Invalid move, column 3 full"
        );
    }

    #[test]
    fn too_many_players_names_the_player() {
        let err = PlaceError::too_many_players(&"Carol", 2);
        assert_eq!(
            err.to_string(),
            "Player \"Carol\" is invalid, this game is limited to 2 players"
        );
    }

    #[test]
    fn replay_error_wraps_source() {
        let err = ReplayError::Place {
            index: 4,
            source: PlaceError::ColumnFull { column: 1 },
        };
        assert_eq!(err.to_string(), "move 4 rejected: Invalid move, column 1 full");
    }
}
