use crate::infra::{PlayerId, Square, TeamId};
use crate::state::{ActionKind, Board, Outcome, PlayerState, Procedure};

#[derive(Debug, Clone)]
pub struct TeamState {
    pub id: TeamId,
    pub turn: i32,
    pub score: i32,
    pub rerolls: i32,
    /// Column of the opponent's end zone, where this team scores.
    pub target_endzone_x: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallState {
    pub position: Square,
    pub carrier: Option<PlayerId>,
}

/// Snapshot of the engine state that the planner and the reward shaper read.
/// Rebuilt by the engine adapter on every decision point.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub teams: Vec<TeamState>,
    pub players: Vec<PlayerState>,
    pub ball: Option<BallState>,
    pub half: i32,
    pub turns_per_half: i32,
    pub active_team: Option<TeamId>,
    pub active_player: Option<PlayerId>,
    /// Team receiving the current kick-off
    pub receiving_team: Option<TeamId>,
    pub procedure: Procedure,
    /// Action kinds the engine currently offers
    pub available: Vec<ActionKind>,
    /// Append-only result log
    pub reports: Vec<Outcome>,
    pub blitz_available: bool,
    pub handoff_available: bool,
}

impl GameState {
    /// Two-team pitch; `home` scores on the left column, `away` on the right.
    pub fn new(width: i32, height: i32, home: TeamId, away: TeamId) -> Self {
        let team = |id, target_endzone_x| TeamState {
            id,
            turn: 1,
            score: 0,
            rerolls: 0,
            target_endzone_x,
        };
        Self {
            board: Board::new(width, height),
            teams: vec![team(home, 1), team(away, width - 2)],
            players: Vec::new(),
            ball: None,
            half: 1,
            turns_per_half: 8,
            active_team: Some(home),
            active_player: None,
            receiving_team: None,
            procedure: Procedure::Turn,
            available: Vec::new(),
            reports: Vec::new(),
            blitz_available: true,
            handoff_available: true,
        }
    }

    pub fn width(&self) -> i32 {
        self.board.width
    }

    pub fn height(&self) -> i32 {
        self.board.height
    }

    pub fn add_player(&mut self, player: PlayerState) {
        if let Some(pos) = player.position {
            self.board.insert(pos, player.id);
        }
        self.players.push(player);
    }

    pub fn team(&self, id: TeamId) -> Option<&TeamState> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn opponent_of(&self, id: TeamId) -> Option<&TeamState> {
        self.teams.iter().find(|t| t.id != id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_at(&self, pos: &Square) -> Option<&PlayerState> {
        self.board.get(pos).and_then(|id| self.player(id))
    }

    pub fn players_of(&self, team: TeamId) -> impl Iterator<Item = &PlayerState> {
        self.players.iter().filter(move |p| p.team == team)
    }

    pub fn players_on_pitch(&self, team: TeamId) -> impl Iterator<Item = &PlayerState> {
        self.players_of(team).filter(|p| p.position.is_some())
    }

    pub fn ball_position(&self) -> Option<Square> {
        self.ball.map(|b| b.position)
    }

    pub fn ball_carrier(&self) -> Option<&PlayerState> {
        self.ball
            .and_then(|b| b.carrier)
            .and_then(|id| self.player(id))
    }

    pub fn is_ball_carrier(&self, player: PlayerId) -> bool {
        self.ball.and_then(|b| b.carrier) == Some(player)
    }

    pub fn is_out_of_bounds(&self, pos: &Square) -> bool {
        self.board.is_out_of_bounds(pos)
    }

    pub fn target_endzone_x(&self, team: TeamId) -> Option<i32> {
        self.team(team).map(|t| t.target_endzone_x)
    }

    /// Columns between the player and the end zone their team scores in.
    pub fn distance_to_endzone(&self, player: &PlayerState) -> Option<i32> {
        let pos = player.position?;
        let target = self.target_endzone_x(player.team)?;
        Some((target - pos.x).abs())
    }

    /// True when `pos` lies in the half `team` defends.
    pub fn is_team_side(&self, pos: &Square, team: TeamId) -> bool {
        let Some(target) = self.target_endzone_x(team) else {
            return false;
        };
        let mid = self.width() / 2;
        if target < mid { pos.x >= mid } else { pos.x < mid }
    }

    /// Standing players not on `team` exerting a tackle zone on `pos`.
    pub fn tackle_zones_at(&self, team: TeamId, pos: &Square) -> usize {
        pos.adjacent()
            .iter()
            .filter_map(|sq| self.player_at(sq))
            .filter(|p| p.team != team && p.up)
            .count()
    }

    pub fn tackle_zones_in(&self, player: &PlayerState) -> usize {
        match player.position {
            Some(pos) => self.tackle_zones_at(player.team, &pos),
            None => 0,
        }
    }

    pub fn adjacent_players(
        &self,
        pos: &Square,
        team: TeamId,
        standing_only: bool,
    ) -> Vec<&PlayerState> {
        pos.adjacent()
            .iter()
            .filter_map(|sq| self.player_at(sq))
            .filter(|p| p.team == team && (p.up || !standing_only))
            .collect()
    }

    pub fn adjacent_opponents(&self, player: &PlayerState, standing_only: bool) -> Vec<&PlayerState> {
        let Some(pos) = player.position else {
            return Vec::new();
        };
        pos.adjacent()
            .iter()
            .filter_map(|sq| self.player_at(sq))
            .filter(|p| p.team != player.team && (p.up || !standing_only))
            .collect()
    }

    /// In-bounds unoccupied squares around `pos`.
    pub fn adjacent_empty_squares(&self, pos: &Square) -> Vec<Square> {
        pos.adjacent()
            .into_iter()
            .filter(|sq| !self.is_out_of_bounds(sq) && self.board.is_empty_at(sq))
            .collect()
    }

    /// True when the engine offers nothing but ending the turn.
    pub fn only_end_turn_available(&self) -> bool {
        self.available.len() == 1 && self.available[0] == ActionKind::EndTurn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(28, 17, TeamId(1), TeamId(2))
    }

    #[test]
    fn test_tackle_zones_count_standing_opponents_only() {
        let mut state = state();
        state.add_player(PlayerState::new(PlayerId(1), TeamId(1), Square::new(10, 8)));
        state.add_player(PlayerState::new(PlayerId(2), TeamId(2), Square::new(11, 8)));
        let mut prone = PlayerState::new(PlayerId(3), TeamId(2), Square::new(9, 9));
        prone.up = false;
        state.add_player(prone);
        state.add_player(PlayerState::new(PlayerId(4), TeamId(1), Square::new(10, 9)));

        let me = state.player(PlayerId(1)).cloned().unwrap();
        assert_eq!(state.tackle_zones_in(&me), 1);
        assert_eq!(state.adjacent_opponents(&me, true).len(), 1);
        assert_eq!(state.adjacent_opponents(&me, false).len(), 2);
    }

    #[test]
    fn test_endzone_and_sides() {
        let state = state();
        assert_eq!(state.target_endzone_x(TeamId(1)), Some(1));
        assert_eq!(state.target_endzone_x(TeamId(2)), Some(26));
        assert!(state.is_team_side(&Square::new(20, 5), TeamId(1)));
        assert!(state.is_team_side(&Square::new(3, 5), TeamId(2)));
        assert!(state.is_out_of_bounds(&Square::new(0, 5)));
        assert!(!state.is_out_of_bounds(&Square::new(1, 1)));
    }
}
