use std::collections::HashSet;

use crate::infra::{PlayerId, Square, TeamId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Block,
    Catch,
    Dodge,
    Tackle,
    Wrestle,
    SureHands,
    StandFirm,
    Juggernaut,
    Pro,
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub id: PlayerId,
    pub team: TeamId,
    /// `None` while in the dugout
    pub position: Option<Square>,
    pub up: bool,
    pub stunned: bool,
    pub used: bool,
    /// Movement allowance
    pub ma: i32,
    /// Strength
    pub st: i32,
    pub moves_used: i32,
    pub skills: HashSet<Skill>,
}

impl PlayerState {
    pub fn new(id: PlayerId, team: TeamId, pos: Square) -> Self {
        Self {
            id,
            team,
            position: Some(pos),
            up: true,
            stunned: false,
            used: false,
            ma: 6,
            st: 3,
            moves_used: 0,
            skills: HashSet::new(),
        }
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.insert(skill);
        self
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }

    pub fn num_moves_left(&self) -> i32 {
        (self.ma - self.moves_used).max(0)
    }

    pub fn is_on_pitch(&self) -> bool {
        self.position.is_some()
    }
}
