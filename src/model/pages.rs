use crate::api::models::{MasteryDto, MasteryPageDto, RuneSlotDto, RunePageDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mastery {
    pub id: i64,
    pub rank: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasteryPage {
    pub id: i64,
    pub name: String,
    pub current: bool,
    pub masteries: Vec<Mastery>,
}

impl MasteryPage {
    pub fn points_spent(&self) -> i64 {
        self.masteries.iter().map(|m| m.rank).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuneSlot {
    pub slot_id: i64,
    pub rune_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunePage {
    pub id: i64,
    pub name: String,
    pub current: bool,
    pub slots: Vec<RuneSlot>,
}

impl From<MasteryDto> for Mastery {
    fn from(dto: MasteryDto) -> Self {
        Mastery { id: dto.id, rank: dto.rank }
    }
}

impl From<MasteryPageDto> for MasteryPage {
    fn from(dto: MasteryPageDto) -> Self {
        MasteryPage {
            id: dto.id,
            name: dto.name,
            current: dto.current,
            masteries: dto.masteries.into_iter().map(Mastery::from).collect(),
        }
    }
}

impl From<RuneSlotDto> for RuneSlot {
    fn from(dto: RuneSlotDto) -> Self {
        RuneSlot {
            slot_id: dto.rune_slot_id,
            rune_id: dto.rune_id,
        }
    }
}

impl From<RunePageDto> for RunePage {
    fn from(dto: RunePageDto) -> Self {
        RunePage {
            id: dto.id,
            name: dto.name,
            current: dto.current,
            slots: dto.slots.into_iter().map(RuneSlot::from).collect(),
        }
    }
}
