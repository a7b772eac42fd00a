//! Diagnostics for the shaped reward

use std::collections::VecDeque;

/// Moving average calculator
#[derive(Debug, Clone)]
pub struct MovingAverage {
    values: VecDeque<f32>,
    window_size: usize,
    sum: f32,
}

impl MovingAverage {
    pub fn new(window_size: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(window_size),
            window_size,
            sum: 0.0,
        }
    }

    pub fn push(&mut self, value: f32) {
        if self.values.len() >= self.window_size
            && let Some(old) = self.values.pop_front()
        {
            self.sum -= old;
        }
        self.values.push_back(value);
        self.sum += value;
    }

    pub fn average(&self) -> f32 {
        if self.values.is_empty() {
            0.0
        } else {
            self.sum / self.values.len() as f32
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The six terms of one shaped reward, after their own scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RewardBreakdown {
    /// Game events from the report log
    pub events: f32,
    pub ball_progression: f32,
    /// Square control around own and opposing players
    pub territory: f32,
    /// Possession momentum
    pub possession: f32,
    pub path_to_goal: f32,
    pub pickup: f32,
}

impl RewardBreakdown {
    pub fn total(&self) -> f32 {
        self.events
            + self.ball_progression
            + self.territory
            + self.possession
            + self.path_to_goal
            + self.pickup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_average_window() {
        let mut avg = MovingAverage::new(2);
        assert!(avg.is_empty());
        avg.push(1.0);
        avg.push(3.0);
        assert!((avg.average() - 2.0).abs() < 1e-6);
        avg.push(5.0);
        assert_eq!(avg.len(), 2);
        assert!((avg.average() - 4.0).abs() < 1e-6);
        avg.clear();
        assert!((avg.average() - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = RewardBreakdown {
            events: 1.0,
            ball_progression: 0.5,
            territory: 0.25,
            possession: -0.25,
            path_to_goal: 0.0,
            pickup: 0.5,
        };
        assert!((breakdown.total() - 2.0).abs() < 1e-6);
    }
}
