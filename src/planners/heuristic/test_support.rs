use std::collections::HashMap;

use crate::config::PlannerConfig;
use crate::infra::{BlockOdds, Path, PathQuery, PathTarget, Pathfinder, PlayerId, Rules, Square, TeamId};
use crate::planners::heuristic::context::{OpenPlayers, PlanContext};
use crate::state::{Action, ActionKind, GameState, PlayerState};

pub const OWN: TeamId = TeamId(1);
pub const OPP: TeamId = TeamId(2);

/// Rules double: legality by action kind, odds per (attacker, defender).
#[derive(Default)]
pub struct FakeRules {
    pub legal: Vec<ActionKind>,
    pub odds: HashMap<(PlayerId, PlayerId), BlockOdds>,
    pub strengths: HashMap<(PlayerId, PlayerId), (i32, i32)>,
    pub catch: f32,
}

impl Rules for FakeRules {
    fn is_legal(&self, _state: &GameState, action: &Action) -> bool {
        self.legal.contains(&action.kind)
    }

    fn block_odds(&self, _: &GameState, attacker: &PlayerState, defender: &PlayerState) -> BlockOdds {
        self.odds
            .get(&(attacker.id, defender.id))
            .copied()
            .unwrap_or_default()
    }

    fn blitz_odds(
        &self,
        _: &GameState,
        attacker: &PlayerState,
        _from: Square,
        defender: &PlayerState,
    ) -> BlockOdds {
        self.odds
            .get(&(attacker.id, defender.id))
            .copied()
            .unwrap_or_default()
    }

    fn block_strengths(&self, _: &GameState, attacker: &PlayerState, defender: &PlayerState) -> (i32, i32) {
        self.strengths
            .get(&(attacker.id, defender.id))
            .copied()
            .unwrap_or((3, 3))
    }

    fn catch_probability(&self, _: &GameState, _: &PlayerState, _: bool) -> f32 {
        self.catch
    }
}

/// Pathfinder double answering from canned tables.
#[derive(Default)]
pub struct FakePaths {
    pub moves: HashMap<PlayerId, Vec<Path>>,
    pub blitzes: HashMap<PlayerId, Vec<Path>>,
    /// Paths for queries continuing from another square
    pub continued: HashMap<PlayerId, Vec<Path>>,
    pub safest: HashMap<(PlayerId, PathTarget), Path>,
}

impl Pathfinder for FakePaths {
    fn all_paths(&self, _: &GameState, player: &PlayerState, query: &PathQuery) -> Vec<Path> {
        let table = if query.blitz {
            &self.blitzes
        } else if query.from.is_some() {
            &self.continued
        } else {
            &self.moves
        };
        table.get(&player.id).cloned().unwrap_or_default()
    }

    fn safest_path(&self, _: &GameState, player: &PlayerState, target: PathTarget) -> Option<Path> {
        self.safest.get(&(player.id, target)).cloned()
    }
}

/// A 28x17 pitch where the own team scores on the left (x = 1).
pub struct Fixture {
    pub state: GameState,
    pub rules: FakeRules,
    pub paths: FakePaths,
    pub config: PlannerConfig,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            state: GameState::new(28, 17, OWN, OPP),
            rules: FakeRules {
                catch: 1.0,
                ..FakeRules::default()
            },
            paths: FakePaths::default(),
            config: PlannerConfig::default(),
        }
    }

    pub fn own(&mut self, id: u32, x: i32, y: i32) -> &mut Self {
        self.state
            .add_player(PlayerState::new(PlayerId(id), OWN, Square::new(x, y)));
        self
    }

    pub fn opp(&mut self, id: u32, x: i32, y: i32) -> &mut Self {
        self.state
            .add_player(PlayerState::new(PlayerId(id), OPP, Square::new(x, y)));
        self
    }

    pub fn player_mut(&mut self, id: u32) -> &mut PlayerState {
        self.state
            .players
            .iter_mut()
            .find(|p| p.id == PlayerId(id))
            .expect("fixture player")
    }

    pub fn with_ctx<R>(&self, f: impl FnOnce(&PlanContext<'_>) -> R) -> R {
        let open = OpenPlayers::compute(&self.state, OWN);
        let ctx = PlanContext {
            state: &self.state,
            rules: &self.rules,
            paths: &self.paths,
            config: &self.config,
            own: OWN,
            opp: OPP,
            target_x: 1,
            open_players: &open,
        };
        f(&ctx)
    }
}

pub fn path(steps: &[(i32, i32)], prob: f32) -> Path {
    Path::new(steps.iter().map(|&(x, y)| Square::new(x, y)).collect(), prob)
}
