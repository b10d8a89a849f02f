use crate::error::LeagueError;
use std::fmt;
use std::str::FromStr;

/// Queue/mode a stat summary is aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameType {
    AramUnranked5x5,
    CoopVsAI,
    CoopVsAI3x3,
    OdinUnranked,
    RankedPremade3x3,
    RankedPremade5x5,
    RankedSolo5x5,
    RankedTeam3x3,
    RankedTeam5x5,
    Unranked,
    Unranked3x3,
    OneForAll5x5,
    FirstBlood1x1,
    FirstBlood2x2,
    Urf,
    Hexakill,
    Ascension,
    KingPoro,
}

impl GameType {
    pub const ALL: [GameType; 18] = [
        GameType::AramUnranked5x5,
        GameType::CoopVsAI,
        GameType::CoopVsAI3x3,
        GameType::OdinUnranked,
        GameType::RankedPremade3x3,
        GameType::RankedPremade5x5,
        GameType::RankedSolo5x5,
        GameType::RankedTeam3x3,
        GameType::RankedTeam5x5,
        GameType::Unranked,
        GameType::Unranked3x3,
        GameType::OneForAll5x5,
        GameType::FirstBlood1x1,
        GameType::FirstBlood2x2,
        GameType::Urf,
        GameType::Hexakill,
        GameType::Ascension,
        GameType::KingPoro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::AramUnranked5x5 => "AramUnranked5x5",
            GameType::CoopVsAI => "CoopVsAI",
            GameType::CoopVsAI3x3 => "CoopVsAI3x3",
            GameType::OdinUnranked => "OdinUnranked",
            GameType::RankedPremade3x3 => "RankedPremade3x3",
            GameType::RankedPremade5x5 => "RankedPremade5x5",
            GameType::RankedSolo5x5 => "RankedSolo5x5",
            GameType::RankedTeam3x3 => "RankedTeam3x3",
            GameType::RankedTeam5x5 => "RankedTeam5x5",
            GameType::Unranked => "Unranked",
            GameType::Unranked3x3 => "Unranked3x3",
            GameType::OneForAll5x5 => "OneForAll5x5",
            GameType::FirstBlood1x1 => "FirstBlood1x1",
            GameType::FirstBlood2x2 => "FirstBlood2x2",
            GameType::Urf => "URF",
            GameType::Hexakill => "Hexakill",
            GameType::Ascension => "Ascension",
            GameType::KingPoro => "KingPoro",
        }
    }

    pub fn is_ranked(&self) -> bool {
        matches!(
            self,
            GameType::RankedPremade3x3
                | GameType::RankedPremade5x5
                | GameType::RankedSolo5x5
                | GameType::RankedTeam3x3
                | GameType::RankedTeam5x5
        )
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "OdinUranked" is a misspelling some clients sent
        if s.eq_ignore_ascii_case("OdinUranked") {
            return Ok(GameType::OdinUnranked);
        }

        GameType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| LeagueError::DecodeFailure(format!("unknown game type '{}'", s)))
    }
}
