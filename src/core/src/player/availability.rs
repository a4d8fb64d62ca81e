use serde::Serialize;
use std::str::FromStr;

/// Availability flag as published with fantasy player data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerAvailability {
    #[default]
    Available,
    Doubtful,
    Injured,
    Suspended,
    Unavailable,
}

impl PlayerAvailability {
    /// Doubtful players can still be bought; everyone else flagged out cannot.
    pub fn can_be_bought(&self) -> bool {
        matches!(self, PlayerAvailability::Available | PlayerAvailability::Doubtful)
    }
}

impl FromStr for PlayerAvailability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(PlayerAvailability::Available),
            "d" => Ok(PlayerAvailability::Doubtful),
            "i" => Ok(PlayerAvailability::Injured),
            "s" => Ok(PlayerAvailability::Suspended),
            "u" | "n" => Ok(PlayerAvailability::Unavailable),
            _ => Err(format!("'{}' is not a valid value for PlayerAvailability", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_letters() {
        assert_eq!("a".parse::<PlayerAvailability>(), Ok(PlayerAvailability::Available));
        assert_eq!("i".parse::<PlayerAvailability>(), Ok(PlayerAvailability::Injured));
        assert!("x".parse::<PlayerAvailability>().is_err());
    }

    #[test]
    fn test_only_available_and_doubtful_can_be_bought() {
        assert!(PlayerAvailability::Available.can_be_bought());
        assert!(PlayerAvailability::Doubtful.can_be_bought());
        assert!(!PlayerAvailability::Injured.can_be_bought());
        assert!(!PlayerAvailability::Suspended.can_be_bought());
        assert!(!PlayerAvailability::Unavailable.can_be_bought());
    }
}
