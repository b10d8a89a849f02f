use crate::api::models::ChampionDto;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChampionRanks {
    pub attack: i64,
    pub defense: i64,
    pub magic: i64,
    pub difficulty: i64,
}

/// Static champion metadata. Owned by the catalog and handed out by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Champion {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub bot_enabled: bool,
    /// Usable as a Co-op vs. AI bot
    pub bot_mm_enabled: bool,
    pub free_to_play: bool,
    pub ranked_play_enabled: bool,
    pub ranks: ChampionRanks,
}

impl From<ChampionDto> for Champion {
    fn from(dto: ChampionDto) -> Self {
        Champion {
            id: dto.id,
            name: dto.name,
            active: dto.active,
            bot_enabled: dto.bot_enabled,
            bot_mm_enabled: dto.bot_mm_enabled,
            free_to_play: dto.free_to_play,
            ranked_play_enabled: dto.ranked_play_enabled,
            ranks: ChampionRanks {
                attack: dto.attack_rank,
                defense: dto.defense_rank,
                magic: dto.magic_rank,
                difficulty: dto.difficulty_rank,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_payload_builds_zeroed_champion() {
        let dto: ChampionDto = serde_json::from_str(r#"{"id": 17, "name": "Teemo"}"#).unwrap();
        let champion = Champion::from(dto);
        assert_eq!(champion.name, "Teemo");
        assert!(!champion.active);
        assert!(!champion.ranked_play_enabled);
        assert_eq!(champion.ranks, ChampionRanks::default());
    }
}
