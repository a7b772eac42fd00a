use tracing::debug;

use crate::config::RewardConfig;
use crate::infra::{PathQuery, PathTarget, Pathfinder, Square, TeamId};
use crate::planners::rl::metrics::{MovingAverage, RewardBreakdown};
use crate::state::{GameState, Outcome, PlayerState};

const AVERAGE_WINDOW: usize = 100;

/// Dense reward for one team, computed once per environment step.
///
/// Holds the per-match memory the terms need: how far into the report log
/// events were already paid out, where the ball was and who held it on the
/// previous call, and the running possession momentum.
#[derive(Debug, Clone)]
pub struct RewardShaper {
    team: TeamId,
    config: RewardConfig,
    last_report_idx: usize,
    /// Holder and column of the ball on the previous call
    last_ball: Option<(TeamId, i32)>,
    momentum: f32,
    last: RewardBreakdown,
    average: MovingAverage,
}

impl RewardShaper {
    pub fn new(team: TeamId, config: RewardConfig) -> Self {
        Self {
            team,
            config,
            last_report_idx: 0,
            last_ball: None,
            momentum: 0.0,
            last: RewardBreakdown::default(),
            average: MovingAverage::new(AVERAGE_WINDOW),
        }
    }

    /// Start of a new match.
    pub fn reset(&mut self) {
        self.last_report_idx = 0;
        self.last_ball = None;
        self.momentum = 0.0;
        self.last = RewardBreakdown::default();
        self.average.clear();
    }

    pub fn last_breakdown(&self) -> RewardBreakdown {
        self.last
    }

    /// Mean shaped reward over the recent calls.
    pub fn average(&self) -> f32 {
        self.average.average()
    }

    pub fn shape(&mut self, state: &GameState, paths: &dyn Pathfinder) -> f32 {
        if state.reports.len() < self.last_report_idx {
            debug!(
                "Report log shrank from {} to {}, starting over",
                self.last_report_idx,
                state.reports.len()
            );
            self.last_report_idx = 0;
        }

        let events = self.event_reward(state);
        let ball_progression = self.ball_progression_reward(state);
        let territory = self.territory_reward(state);
        let possession = self.possession_reward(state);
        let path_to_goal = self.path_to_goal_reward(state, paths);
        let pickup = self.pickup_reward(state, paths);

        self.last = RewardBreakdown {
            events,
            ball_progression,
            territory,
            possession,
            path_to_goal,
            pickup,
        };
        let total = self.last.total();
        self.average.push(total);
        debug!("Shaped reward {:.5} ({:?})", total, self.last);
        total
    }

    fn outcome_team(state: &GameState, outcome: &Outcome) -> Option<TeamId> {
        outcome
            .player
            .and_then(|id| state.player(id))
            .map(|p| p.team)
            .or(outcome.team)
    }

    fn event_reward(&mut self, state: &GameState) -> f32 {
        let weight = self.config.chance_weight;
        let mut reward = 0.0;
        for outcome in &state.reports[self.last_report_idx..] {
            let Some(team) = Self::outcome_team(state, outcome) else {
                continue;
            };
            let table = if team == self.team {
                &self.config.own_report_rewards
            } else {
                &self.config.opp_report_rewards
            };
            let Some(value) = table.get(&outcome.kind) else {
                continue;
            };
            let weighted_chance = (outcome.chance() * weight + 1.0 - weight) * weight;
            reward += value * weighted_chance;
        }
        self.last_report_idx = state.reports.len();
        reward
    }

    /// Progress of the ball along the x axis toward our scoring edge while we
    /// kept it since the last call.
    fn ball_progression_reward(&mut self, state: &GameState) -> f32 {
        let Some((carrier, position)) = state
            .ball_carrier()
            .and_then(|c| c.position.map(|pos| (c, pos)))
        else {
            self.last_ball = None;
            return 0.0;
        };

        let mut reward = 0.0;
        if let Some((last_team, last_x)) = self.last_ball
            && last_team == self.team
            && carrier.team == self.team
            && let Some(target_x) = state.target_endzone_x(self.team)
        {
            let progress = if target_x < last_x {
                last_x - position.x
            } else {
                position.x - last_x
            };
            reward = self.config.ball_progression_reward * progress as f32;
        }
        self.last_ball = Some((carrier.team, position.x));
        reward
    }

    fn territory_reward(&self, state: &GameState) -> f32 {
        let mut total = 0.0;
        for y in 0..state.height() {
            for x in 0..state.width() {
                let square = Square::new(x, y);
                if !state.board.is_empty_at(&square) {
                    continue;
                }
                total += self.square_control(state, &square) * self.ball_weight(state, &square);
            }
        }
        self.config
            .positive_multiply(total * self.config.tackle_zone_reward)
    }

    /// +1 per own and -1 per opposing standing player orthogonally next to
    /// `square`; two of ours and none of theirs earns a bonus.
    fn square_control(&self, state: &GameState, square: &Square) -> f32 {
        let (mut own, mut opp) = (0, 0);
        for neighbour in square.orthogonal() {
            if let Some(player) = state.player_at(&neighbour).filter(|p| p.up) {
                if player.team == self.team {
                    own += 1;
                } else {
                    opp += 1;
                }
            }
        }
        let mut control = (own - opp) as f32;
        if own == 2 && opp == 0 {
            control += self.config.double_block_bonus;
        }
        control
    }

    fn ball_weight(&self, state: &GameState, square: &Square) -> f32 {
        let Some(ball) = state.ball_position() else {
            return 1.0;
        };
        match ball.manhattan(square) {
            0 => self.config.tackle_zone_ball_weight,
            1 => self.config.tackle_zone_ball_close_range_weight,
            d if d <= self.config.tackle_zone_ball_far_range => {
                self.config.tackle_zone_ball_far_range_weight
            }
            _ => 1.0,
        }
    }

    /// Grows each call while the same side holds the ball, restarts on a
    /// change of possession, zero while the ball is loose.
    fn possession_reward(&mut self, state: &GameState) -> f32 {
        let Some(carrier) = state.ball_carrier() else {
            self.momentum = 0.0;
            return 0.0;
        };

        let ours = carrier.team == self.team;
        if (ours && self.momentum < 0.0) || (!ours && self.momentum > 0.0) {
            self.momentum = 0.0;
        }
        if ours {
            self.momentum += self.config.control_ball_reward;
        } else {
            self.momentum -= self.config.control_ball_reward;
        }
        self.config.positive_multiply(self.momentum)
    }

    fn path_to_goal_reward(&self, state: &GameState, paths: &dyn Pathfinder) -> f32 {
        let Some(carrier) = state.ball_carrier() else {
            return 0.0;
        };
        let Some(position) = carrier.position else {
            return 0.0;
        };
        let Some(target_x) = state.target_endzone_x(carrier.team) else {
            return 0.0;
        };
        if position.x == target_x {
            return 0.0;
        }

        let base = self.config.touchdown_path_reward;
        let mut reward = 0.0;
        for path in paths.all_paths(state, carrier, &PathQuery::default()) {
            let Some(last) = path.last_step() else {
                continue;
            };
            let distance = (target_x - last.x).abs().max(1) as f32;
            let tackle_zones = state.tackle_zones_at(carrier.team, &last);
            reward += if tackle_zones == 0 && path.is_certain() {
                base * self.config.touchdown_clear_path_weight
            } else if tackle_zones == 0 {
                base * path.prob / distance
            } else {
                base * path.prob / (tackle_zones as f32 * distance)
            };
        }

        let signed = if carrier.team == self.team {
            self.config.positive_multiply(reward)
        } else {
            -reward
        };
        signed / self.config.env_size
    }

    fn pickup_reward(&self, state: &GameState, paths: &dyn Pathfinder) -> f32 {
        let Some(ball) = state.ball.filter(|b| b.carrier.is_none()) else {
            return 0.0;
        };

        let mut reward = 0.0;
        for player in state.players.iter().filter(|p| p.is_on_pitch()) {
            let value = self.pickup_value(state, paths, player, ball.position);
            if player.team == self.team {
                reward += value;
            } else {
                reward -= value;
            }
        }
        self.config.positive_multiply(reward)
    }

    fn pickup_value(
        &self,
        state: &GameState,
        paths: &dyn Pathfinder,
        player: &PlayerState,
        ball: Square,
    ) -> f32 {
        let Some(position) = player.position else {
            return 0.0;
        };
        if position.distance(&ball) > player.ma {
            return 0.0;
        }
        let Some(path) = paths.safest_path(state, player, PathTarget::Square(ball)) else {
            return 0.0;
        };
        let (Some(last), Some(target_x)) = (path.last_step(), state.target_endzone_x(player.team))
        else {
            return 0.0;
        };
        let distance = (target_x - last.x).abs();
        if distance == 0 {
            return 0.0;
        }
        self.config.pickup_to_endzone_path_reward / distance as f32
    }
}
