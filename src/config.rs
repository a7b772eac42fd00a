use std::collections::HashMap;
use std::env;

use dotenv::dotenv;
use tracing::debug;

use crate::state::OutcomeKind;

fn get_env_var_f32(key: &str) -> Option<f32> {
    env::var(key).ok().and_then(|val| val.parse::<f32>().ok())
}

fn get_env_var_i32(key: &str) -> Option<i32> {
    env::var(key).ok().and_then(|val| val.parse::<i32>().ok())
}

fn override_f32(field: &mut f32, key: &str) {
    if let Some(value) = get_env_var_f32(key) {
        debug!("{} = {}", key, value);
        *field = value;
    }
}

fn override_i32(field: &mut i32, key: &str) {
    if let Some(value) = get_env_var_i32(key) {
        debug!("{} = {}", key, value);
        *field = value;
    }
}

/// Thresholds used by the maneuver chain.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Carrier runs for the end zone when the safest path is at least this likely
    pub carrier_td_min_prob: f32,
    /// Hand-off chain (to end zone) must be at least this likely
    pub handoff_min_prob: f32,
    /// A block is "safe" above this chance of the attacker staying up
    pub safe_block_min_up: f32,
    /// Pickup path must be more likely than this
    pub pickup_min_prob: f32,
    /// Pickup candidates may stand this many squares beyond their movement allowance
    pub pickup_range_bonus: i32,
    pub blitz_min_score: f32,
    /// Cage corner paths must be more likely than this
    pub cage_min_prob: f32,
    pub assist_min_prob: f32,
    /// Active carrier keeps running when the end zone path is at most this likely
    pub continue_carrier_max_prob: f32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            carrier_td_min_prob: 0.7,
            handoff_min_prob: 0.7,
            safe_block_min_up: 0.94,
            pickup_min_prob: 0.33,
            pickup_range_bonus: 2,
            blitz_min_score: 1.25,
            cage_min_prob: 0.9,
            assist_min_prob: 0.9,
            continue_carrier_max_prob: 0.9,
        }
    }
}

impl PlannerConfig {
    /// Defaults overridden by `BLITZBOT_*` variables (a `.env` file is honoured).
    pub fn from_env() -> Self {
        dotenv().ok();
        let mut config = Self::default();
        override_f32(&mut config.carrier_td_min_prob, "BLITZBOT_CARRIER_TD_MIN_PROB");
        override_f32(&mut config.handoff_min_prob, "BLITZBOT_HANDOFF_MIN_PROB");
        override_f32(&mut config.safe_block_min_up, "BLITZBOT_SAFE_BLOCK_MIN_UP");
        override_f32(&mut config.pickup_min_prob, "BLITZBOT_PICKUP_MIN_PROB");
        override_i32(&mut config.pickup_range_bonus, "BLITZBOT_PICKUP_RANGE_BONUS");
        override_f32(&mut config.blitz_min_score, "BLITZBOT_BLITZ_MIN_SCORE");
        override_f32(&mut config.cage_min_prob, "BLITZBOT_CAGE_MIN_PROB");
        override_f32(&mut config.assist_min_prob, "BLITZBOT_ASSIST_MIN_PROB");
        override_f32(
            &mut config.continue_carrier_max_prob,
            "BLITZBOT_CONTINUE_CARRIER_MAX_PROB",
        );
        config
    }
}

/// Constants of the shaped reward.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardConfig {
    /// Board format the path term is normalised by (11-a-side)
    pub env_size: f32,
    pub positive_multiplier: f32,
    pub ball_progression_reward: f32,
    pub chance_weight: f32,
    pub tackle_zone_reward: f32,
    pub tackle_zone_ball_far_range: i32,
    pub tackle_zone_ball_weight: f32,
    pub tackle_zone_ball_close_range_weight: f32,
    pub tackle_zone_ball_far_range_weight: f32,
    pub double_block_bonus: f32,
    pub control_ball_reward: f32,
    pub touchdown_path_reward: f32,
    pub touchdown_clear_path_weight: f32,
    pub pickup_to_endzone_path_reward: f32,
    pub own_report_rewards: HashMap<OutcomeKind, f32>,
    pub opp_report_rewards: HashMap<OutcomeKind, f32>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        let own_report_rewards = HashMap::from([
            (OutcomeKind::Touchdown, 4.0),
            (OutcomeKind::SuccessfulCatch, 0.2),
            (OutcomeKind::Interception, 0.4),
            (OutcomeKind::SuccessfulPickup, 0.2),
            (OutcomeKind::Fumble, -0.2),
            (OutcomeKind::KnockedDown, -0.2),
            (OutcomeKind::KnockedOut, -0.4),
            (OutcomeKind::Casualty, -1.0),
        ]);
        let opp_report_rewards = HashMap::from([
            (OutcomeKind::Touchdown, -3.0),
            (OutcomeKind::SuccessfulCatch, -0.2),
            (OutcomeKind::Interception, -0.4),
            (OutcomeKind::SuccessfulPickup, -0.2),
            (OutcomeKind::Fumble, 0.2),
            (OutcomeKind::KnockedDown, 0.2),
            (OutcomeKind::KnockedOut, 0.4),
            (OutcomeKind::Casualty, 1.0),
        ]);

        Self {
            env_size: 11.0,
            positive_multiplier: 1.2,
            ball_progression_reward: 0.006,
            chance_weight: 0.5,
            tackle_zone_reward: 0.0001,
            tackle_zone_ball_far_range: 3,
            tackle_zone_ball_weight: 8.0,
            tackle_zone_ball_close_range_weight: 5.0,
            tackle_zone_ball_far_range_weight: 2.0,
            double_block_bonus: 0.5,
            control_ball_reward: 0.00002,
            touchdown_path_reward: 0.00001,
            touchdown_clear_path_weight: 5.0,
            pickup_to_endzone_path_reward: 0.004,
            own_report_rewards,
            opp_report_rewards,
        }
    }
}

impl RewardConfig {
    /// Defaults overridden by `BLITZBOT_*` variables named after each scalar
    /// field (`BLITZBOT_CHANCE_WEIGHT`, `BLITZBOT_DOUBLE_BLOCK_BONUS`, ...).
    /// The outcome tables always keep their defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        let mut config = Self::default();
        override_f32(&mut config.env_size, "BLITZBOT_ENV_SIZE");
        override_f32(&mut config.positive_multiplier, "BLITZBOT_POSITIVE_MULTIPLIER");
        override_f32(&mut config.ball_progression_reward, "BLITZBOT_BALL_PROGRESSION_REWARD");
        override_f32(&mut config.chance_weight, "BLITZBOT_CHANCE_WEIGHT");
        override_f32(&mut config.tackle_zone_reward, "BLITZBOT_TACKLE_ZONE_REWARD");
        override_i32(
            &mut config.tackle_zone_ball_far_range,
            "BLITZBOT_TACKLE_ZONE_BALL_FAR_RANGE",
        );
        override_f32(&mut config.tackle_zone_ball_weight, "BLITZBOT_TACKLE_ZONE_BALL_WEIGHT");
        override_f32(
            &mut config.tackle_zone_ball_close_range_weight,
            "BLITZBOT_TACKLE_ZONE_BALL_CLOSE_RANGE_WEIGHT",
        );
        override_f32(
            &mut config.tackle_zone_ball_far_range_weight,
            "BLITZBOT_TACKLE_ZONE_BALL_FAR_RANGE_WEIGHT",
        );
        override_f32(&mut config.double_block_bonus, "BLITZBOT_DOUBLE_BLOCK_BONUS");
        override_f32(&mut config.control_ball_reward, "BLITZBOT_CONTROL_BALL_REWARD");
        override_f32(&mut config.touchdown_path_reward, "BLITZBOT_TOUCHDOWN_PATH_REWARD");
        override_f32(
            &mut config.touchdown_clear_path_weight,
            "BLITZBOT_TOUCHDOWN_CLEAR_PATH_WEIGHT",
        );
        override_f32(
            &mut config.pickup_to_endzone_path_reward,
            "BLITZBOT_PICKUP_TO_ENDZONE_PATH_REWARD",
        );
        config
    }

    /// Leaves negative rewards untouched and scales positive ones.
    pub fn positive_multiply(&self, reward: f32) -> f32 {
        if reward <= 0.0 {
            reward
        } else {
            reward * self.positive_multiplier
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_config_default() {
        let config = RewardConfig::default();
        assert!((config.own_report_rewards[&OutcomeKind::Touchdown] - 4.0).abs() < 1e-6);
        assert!((config.opp_report_rewards[&OutcomeKind::Casualty] - 1.0).abs() < 1e-6);
        assert!((config.positive_multiply(1.0) - 1.2).abs() < 1e-6);
        assert!((config.positive_multiply(-1.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_planner_config_default() {
        let config = PlannerConfig::default();
        assert!((config.safe_block_min_up - 0.94).abs() < 1e-6);
        assert!((config.blitz_min_score - 1.25).abs() < 1e-6);
        assert_eq!(config.pickup_range_bonus, 2);
    }

    // Must stay the only test touching BLITZBOT_* variables
    #[test]
    fn test_from_env_overrides() {
        unsafe {
            env::set_var("BLITZBOT_SAFE_BLOCK_MIN_UP", "0.8");
            env::set_var("BLITZBOT_PICKUP_RANGE_BONUS", "3");
            env::set_var("BLITZBOT_BLITZ_MIN_SCORE", "not-a-number");
            env::set_var("BLITZBOT_CHANCE_WEIGHT", "0.25");
            env::set_var("BLITZBOT_TACKLE_ZONE_BALL_FAR_RANGE", "4");
            env::set_var("BLITZBOT_DOUBLE_BLOCK_BONUS", "1.5x");
        }

        let planner = PlannerConfig::from_env();
        assert!((planner.safe_block_min_up - 0.8).abs() < 1e-6);
        assert_eq!(planner.pickup_range_bonus, 3);
        // Unparsable values keep the default
        assert!((planner.blitz_min_score - 1.25).abs() < 1e-6);
        assert!((planner.cage_min_prob - 0.9).abs() < 1e-6);

        let reward = RewardConfig::from_env();
        assert!((reward.chance_weight - 0.25).abs() < 1e-6);
        assert_eq!(reward.tackle_zone_ball_far_range, 4);
        assert!((reward.double_block_bonus - 0.5).abs() < 1e-6);
        assert_eq!(reward.own_report_rewards, RewardConfig::default().own_report_rewards);

        unsafe {
            for key in [
                "BLITZBOT_SAFE_BLOCK_MIN_UP",
                "BLITZBOT_PICKUP_RANGE_BONUS",
                "BLITZBOT_BLITZ_MIN_SCORE",
                "BLITZBOT_CHANCE_WEIGHT",
                "BLITZBOT_TACKLE_ZONE_BALL_FAR_RANGE",
                "BLITZBOT_DOUBLE_BLOCK_BONUS",
            ] {
                env::remove_var(key);
            }
        }
    }
}
