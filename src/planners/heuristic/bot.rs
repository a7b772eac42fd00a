use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::infra::{PathTarget, Pathfinder, Rules, TeamId};
use crate::planners::heuristic::context::{OpenPlayers, PlanContext};
use crate::planners::heuristic::expander::expand_path;
use crate::planners::heuristic::formation::Formation;
use crate::planners::heuristic::planner_state::{Phase, PlannerState};
use crate::planners::heuristic::procedures;
use crate::planners::heuristic::strategies::StrategyPlanner;
use crate::state::{Action, ActionKind, GameState, Procedure};

/// Re-plans allowed in one call before the bot gives up and ends the turn.
const MAX_REPLANS: usize = 2;

/// Rule-based bot for one team in one match.
pub struct ScriptedBot {
    team: TeamId,
    config: PlannerConfig,
    planner_state: PlannerState,
    strategies: StrategyPlanner,
    setup_actions: VecDeque<Action>,
}

impl ScriptedBot {
    pub fn new(team: TeamId, config: PlannerConfig) -> Self {
        Self {
            team,
            config,
            planner_state: PlannerState::new(),
            strategies: StrategyPlanner::new(),
            setup_actions: VecDeque::new(),
        }
    }

    pub fn team(&self) -> TeamId {
        self.team
    }

    pub fn queued(&self) -> usize {
        self.planner_state.len()
    }

    /// Forget everything from the previous match.
    pub fn new_game(&mut self, team: TeamId) {
        info!("New game for {}", team);
        self.team = team;
        self.planner_state.reset();
        self.setup_actions.clear();
    }

    /// Next action for the engine's current decision point. `None` when the
    /// procedure expects nothing from us.
    #[tracing::instrument(level = "debug", skip_all, fields(team = %self.team))]
    pub fn act(
        &mut self,
        state: &GameState,
        rules: &dyn Rules,
        paths: &dyn Pathfinder,
    ) -> Result<Option<Action>, PlanError> {
        let opp = state
            .opponent_of(self.team)
            .map(|t| t.id)
            .ok_or(PlanError::UnknownTeam(self.team))?;

        let action = match &state.procedure {
            Procedure::CoinTossFlip => procedures::coin_toss_flip(),
            Procedure::CoinTossKickReceive => procedures::coin_toss_kick_receive(),
            Procedure::Setup => self.setup(state),
            Procedure::PerfectDefence => Action::new(ActionKind::EndSetup),
            Procedure::PlaceBall => procedures::place_ball(state, opp),
            Procedure::HighKick => procedures::high_kick(state, self.team),
            Procedure::Touchback => procedures::touchback(state, self.team),
            Procedure::QuickSnap | Procedure::Blitz => Action::end_turn(),
            Procedure::Turn => self.turn(state, rules, paths)?,
            Procedure::PlayerAction => self.player_action(state, rules, paths)?,
            Procedure::Block(roll) => procedures::block_choice(state, roll)?,
            Procedure::Reroll(context) => procedures::reroll_choice(state, self.team, opp, context),
            Procedure::Push(squares) => return Ok(procedures::push(squares)),
            Procedure::FollowUp(squares) => return Ok(procedures::follow_up(state, squares)),
            Procedure::Apothecary => Action::new(ActionKind::UseApothecary),
            Procedure::Interception(candidates) => procedures::interception(candidates),
            Procedure::Bribe => Action::new(ActionKind::UseBribe),
            Procedure::SkillPrompt => Action::new(ActionKind::UseSkill),
            Procedure::BloodLustBlockOrMove => Action::new(ActionKind::StartBlock),
            Procedure::EatThrall(squares) => return Ok(procedures::eat_thrall(squares)),
            Procedure::EndGame => {
                self.end_game(state);
                return Ok(None);
            }
        };
        Ok(Some(action))
    }

    fn setup(&mut self, state: &GameState) -> Action {
        if let Some(action) = self.setup_actions.pop_front() {
            return action;
        }
        if Formation::fits(state) {
            let formation = Formation::for_kickoff(state.receiving_team == Some(self.team));
            info!("Setting up {} for {}", formation.name(), self.team);
            self.setup_actions.extend(formation.actions(state, self.team));
            self.setup_actions.push_back(Action::new(ActionKind::EndSetup));
            return self
                .setup_actions
                .pop_front()
                .unwrap_or_else(|| Action::new(ActionKind::EndSetup));
        }
        // Other pitch sizes: let the engine pick a formation
        match procedures::setup_choice(state) {
            Some(kind) => {
                self.setup_actions.push_back(Action::new(ActionKind::EndSetup));
                Action::new(kind)
            }
            None => Action::new(ActionKind::EndSetup),
        }
    }

    fn turn(
        &mut self,
        state: &GameState,
        rules: &dyn Rules,
        paths: &dyn Pathfinder,
    ) -> Result<Action, PlanError> {
        let team = state.team(self.team).ok_or(PlanError::UnknownTeam(self.team))?;
        self.planner_state.sync_turn(team.turn, state.half);

        if state.only_end_turn_available() {
            self.planner_state.replace_with([Action::end_turn()]);
        }

        let mut replans = 0;
        loop {
            match self.planner_state.phase() {
                Phase::Drain => {
                    if let Some(action) = self.next_legal(state, rules) {
                        return Ok(action);
                    }
                }
                Phase::Replan if replans < MAX_REPLANS => {
                    replans += 1;
                    self.make_plan(state, rules, paths)?;
                }
                Phase::Replan => break,
            }
        }

        debug!("No legal action after {} re-plans, ending turn", MAX_REPLANS);
        Ok(Action::end_turn())
    }

    /// Pop queued actions until one is legal; illegal ones are dropped.
    fn next_legal(&mut self, state: &GameState, rules: &dyn Rules) -> Option<Action> {
        while let Some(action) = self.planner_state.pop_next() {
            if rules.is_legal(state, &action) {
                return Some(action);
            }
            debug!("Dropping illegal queued action {:?}", action);
        }
        None
    }

    fn make_plan(
        &mut self,
        state: &GameState,
        rules: &dyn Rules,
        paths: &dyn Pathfinder,
    ) -> Result<(), PlanError> {
        let own = self.team;
        let opp = state
            .opponent_of(own)
            .map(|t| t.id)
            .ok_or(PlanError::UnknownTeam(own))?;
        let target_x = state
            .target_endzone_x(own)
            .ok_or(PlanError::UnknownTeam(own))?;
        let open_players = OpenPlayers::compute(state, own);

        let ctx = PlanContext {
            state,
            rules,
            paths,
            config: &self.config,
            own,
            opp,
            target_x,
            open_players: &open_players,
        };

        match self.strategies.select_maneuver(&ctx)? {
            Some(maneuver) => self.planner_state.extend(maneuver.actions),
            None => self.planner_state.push(Action::end_turn()),
        }
        Ok(())
    }

    /// Inside a player action: finish the queued steps, then let an active
    /// carrier keep running while the end zone is not yet a safe bet.
    fn player_action(
        &mut self,
        state: &GameState,
        rules: &dyn Rules,
        paths: &dyn Pathfinder,
    ) -> Result<Action, PlanError> {
        if let Some(action) = self.next_legal(state, rules) {
            return Ok(action);
        }

        if let Some(carrier) = state.ball_carrier()
            && state.active_player == Some(carrier.id)
            && let Some(td_path) = paths.safest_path(state, carrier, PathTarget::Endzone)
            && td_path.prob <= self.config.continue_carrier_max_prob
        {
            debug!("Active carrier {} keeps running (p={:.2})", carrier.id, td_path.prob);
            self.planner_state
                .extend(expand_path(state, rules, carrier, &td_path, true)?);
            if let Some(action) = self.next_legal(state, rules) {
                return Ok(action);
            }
        }

        Ok(Action::new(ActionKind::EndPlayerTurn))
    }

    fn end_game(&mut self, state: &GameState) {
        let own = state.team(self.team).map(|t| t.score).unwrap_or_default();
        let opp = state
            .opponent_of(self.team)
            .map(|t| t.score)
            .unwrap_or_default();
        info!("Game over for {}: {} - {}", self.team, own, opp);
        self.planner_state.reset();
    }
}
