#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use blitzbot::infra::BlockOdds;
use blitzbot::state::{BallState, PlayerState};
use blitzbot::{Action, ActionKind, GameState, Path, PathQuery, PathTarget, Pathfinder, PlayerId, Rules, Square, TeamId};

pub const HOME: TeamId = TeamId(1);
pub const AWAY: TeamId = TeamId(2);

/// Engine stand-in: a fixed set of legal action kinds and per-pair block odds.
#[derive(Default)]
pub struct ScriptedRules {
    pub legal: HashSet<ActionKind>,
    pub odds: HashMap<(PlayerId, PlayerId), BlockOdds>,
}

impl ScriptedRules {
    pub fn allowing(kinds: &[ActionKind]) -> Self {
        Self {
            legal: kinds.iter().copied().collect(),
            odds: HashMap::new(),
        }
    }

    pub fn with_odds(mut self, attacker: u32, defender: u32, odds: BlockOdds) -> Self {
        self.odds.insert((PlayerId(attacker), PlayerId(defender)), odds);
        self
    }
}

impl Rules for ScriptedRules {
    fn is_legal(&self, _state: &GameState, action: &Action) -> bool {
        self.legal.contains(&action.kind)
    }

    fn block_odds(&self, _: &GameState, attacker: &PlayerState, defender: &PlayerState) -> BlockOdds {
        self.odds
            .get(&(attacker.id, defender.id))
            .copied()
            .unwrap_or_default()
    }

    fn blitz_odds(&self, state: &GameState, attacker: &PlayerState, _: Square, defender: &PlayerState) -> BlockOdds {
        self.block_odds(state, attacker, defender)
    }

    fn block_strengths(&self, _: &GameState, _: &PlayerState, _: &PlayerState) -> (i32, i32) {
        (3, 3)
    }

    fn catch_probability(&self, _: &GameState, _: &PlayerState, _: bool) -> f32 {
        1.0
    }
}

/// Pathfinder stand-in returning configured paths per player.
#[derive(Default)]
pub struct ScriptedPathfinder {
    pub all: HashMap<PlayerId, Vec<Path>>,
    pub safest: HashMap<(PlayerId, PathTarget), Path>,
}

impl Pathfinder for ScriptedPathfinder {
    fn all_paths(&self, _: &GameState, player: &PlayerState, query: &PathQuery) -> Vec<Path> {
        if query.blitz {
            return Vec::new();
        }
        self.all.get(&player.id).cloned().unwrap_or_default()
    }

    fn safest_path(&self, _: &GameState, player: &PlayerState, target: PathTarget) -> Option<Path> {
        self.safest.get(&(player.id, target)).cloned()
    }
}

/// Standard 28x17 pitch, home scores on the left.
pub fn pitch() -> GameState {
    GameState::new(28, 17, HOME, AWAY)
}

pub fn place(state: &mut GameState, id: u32, team: TeamId, x: i32, y: i32) {
    state.add_player(PlayerState::new(PlayerId(id), team, Square::new(x, y)));
}

pub fn give_ball(state: &mut GameState, id: u32) {
    let position = state
        .player(PlayerId(id))
        .and_then(|p| p.position)
        .expect("carrier on pitch");
    state.ball = Some(BallState {
        position,
        carrier: Some(PlayerId(id)),
    });
}

pub fn safe_odds() -> BlockOdds {
    BlockOdds {
        attacker_down: 0.0,
        defender_down: 0.75,
        attacker_fumble: 0.0,
        defender_fumble: 0.0,
    }
}
