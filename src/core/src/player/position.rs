use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PlayerPosition {
    #[serde(rename = "GKP")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 4] = [
        PlayerPosition::Goalkeeper,
        PlayerPosition::Defender,
        PlayerPosition::Midfielder,
        PlayerPosition::Forward,
    ];

    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Goalkeeper => "GKP",
            PlayerPosition::Defender => "DEF",
            PlayerPosition::Midfielder => "MID",
            PlayerPosition::Forward => "FWD",
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "GKP" | "GK" => Ok(PlayerPosition::Goalkeeper),
            "DEF" => Ok(PlayerPosition::Defender),
            "MID" => Ok(PlayerPosition::Midfielder),
            "FWD" => Ok(PlayerPosition::Forward),
            _ => Err(format!("'{}' is not a valid value for PlayerPosition", s)),
        }
    }
}
