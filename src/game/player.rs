use super::grid::Cell;

/// The two participants. Each role keeps the same token for the whole game:
/// the machine plays red, the human plays yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// The token this role places
    pub fn token(self) -> Cell {
        match self {
            Player::Human => Cell::Yellow,
            Player::Machine => Cell::Red,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Machine => "Machine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Machine);
        assert_eq!(Player::Machine.other(), Player::Human);
    }

    #[test]
    fn test_tokens_are_distinct_and_fixed() {
        assert_ne!(Player::Human.token(), Player::Machine.token());
        assert_ne!(Player::Human.token(), Cell::Empty);
        assert_ne!(Player::Machine.token(), Cell::Empty);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Human");
        assert_eq!(Player::Machine.name(), "Machine");
    }
}
