use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::infra::{Path, Pathfinder, PlayerId, Rules, TeamId};
use crate::planners::heuristic::expander::expand_path;
use crate::state::{Action, ActionKind, GameState, PlayerState};

/// Own players that may still act this turn and stand in no opposing tackle
/// zone. Computed once at the start of a planning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenPlayers(Vec<PlayerId>);

impl OpenPlayers {
    pub fn compute(state: &GameState, team: TeamId) -> Self {
        Self(
            state
                .players_on_pitch(team)
                .filter(|p| !p.used && state.tackle_zones_in(p) == 0)
                .map(|p| p.id)
                .collect(),
        )
    }

    pub fn ids(&self) -> &[PlayerId] {
        &self.0
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One multi-step plan proposed by a strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Maneuver {
    pub player: PlayerId,
    /// The start action that activates the player
    pub kind: ActionKind,
    /// Atomic actions in engine order, the start action included
    pub actions: Vec<Action>,
    pub score: f32,
}

impl Maneuver {
    pub fn new(player: PlayerId, kind: ActionKind, actions: Vec<Action>, score: f32) -> Self {
        Self {
            player,
            kind,
            actions,
            score,
        }
    }
}

/// Everything a strategy may read during one planning pass.
pub struct PlanContext<'a> {
    pub state: &'a GameState,
    pub rules: &'a dyn Rules,
    pub paths: &'a dyn Pathfinder,
    pub config: &'a PlannerConfig,
    pub own: TeamId,
    pub opp: TeamId,
    /// Column the own team scores in
    pub target_x: i32,
    pub open_players: &'a OpenPlayers,
}

impl<'a> PlanContext<'a> {
    pub fn own_players(&self) -> impl Iterator<Item = &'a PlayerState> + 'a {
        self.state.players_on_pitch(self.own)
    }

    pub fn opp_players(&self) -> impl Iterator<Item = &'a PlayerState> + 'a {
        self.state.players_on_pitch(self.opp)
    }

    pub fn open_players(&self) -> impl Iterator<Item = &'a PlayerState> + 'a {
        let state = self.state;
        self.open_players
            .ids()
            .iter()
            .filter_map(move |id| state.player(*id))
    }

    pub fn own_carrier(&self) -> Option<&'a PlayerState> {
        self.state.ball_carrier().filter(|c| c.team == self.own)
    }

    pub fn is_uncontested(&self, player: &PlayerState) -> bool {
        self.state.tackle_zones_in(player) == 0
    }

    /// Among certain paths ending in no opposing tackle zone, the one finishing
    /// closest to the scoring column. Earlier paths win ties.
    pub fn best_goal_path(
        &self,
        player: &PlayerState,
        paths: impl IntoIterator<Item = Path>,
    ) -> Option<Path> {
        let mut best: Option<(i32, Path)> = None;
        for path in paths {
            let Some(last) = path.last_step() else {
                continue;
            };
            if !path.is_certain() || self.state.tackle_zones_at(player.team, &last) != 0 {
                continue;
            }
            let distance = (self.target_x - last.x).abs();
            if best.as_ref().is_none_or(|(best_distance, _)| distance < *best_distance) {
                best = Some((distance, path));
            }
        }
        best.map(|(_, path)| path)
    }

    /// Start action for `player` followed by the expanded path.
    pub fn start_and_follow(
        &self,
        start: ActionKind,
        player: &PlayerState,
        path: &Path,
    ) -> Result<Vec<Action>, PlanError> {
        let mut actions = vec![Action::with_player(start, player.id)];
        actions.extend(expand_path(self.state, self.rules, player, path, true)?);
        Ok(actions)
    }
}
