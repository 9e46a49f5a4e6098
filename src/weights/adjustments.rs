//! Weight groups for the base blend and the matchup/game-script multipliers
//!
//! Every multiplier follows the same shape: clamp a delta into `[-cap, cap]`,
//! map it linearly onto `[-1, 1]`, then scale by the category weight around 1.0.

use serde::{Deserialize, Serialize};

use super::clamp;
use crate::error::{ConfigError, Result};

/// Floor applied to the QB season average before dividing by it
pub const QB_AVG_EPSILON: f64 = 1e-6;

/// Blend between the sportsbook line and the player's season average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseBlend {
    pub sportsbook: f64,
    pub season_avg: f64,
}

impl Default for BaseBlend {
    fn default() -> Self {
        Self {
            sportsbook: 0.60,
            season_avg: 0.40,
        }
    }
}

impl BaseBlend {
    /// Weighted blend of the market line and the season average. Not clamped,
    /// and the weights are not required to sum to one.
    pub fn base_yards(&self, sportsbook_line: f64, season_avg_yards: f64) -> f64 {
        self.sportsbook * sportsbook_line + self.season_avg * season_avg_yards
    }
}

/// Game script adjustment from the point spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadWeights {
    pub weight: f64,
    /// Largest absolute spread considered
    pub cap: f64,
}

impl Default for SpreadWeights {
    fn default() -> Self {
        Self {
            weight: 0.12,
            cap: 10.0,
        }
    }
}

impl SpreadWeights {
    /// Underdogs (negative spread) trail more often and throw more, so the
    /// sign is flipped: `-cap` maps to `1 + weight`, `+cap` to `1 - weight`.
    pub fn multiplier(&self, spread: f64) -> f64 {
        let clamped = clamp(spread, -self.cap, self.cap);
        let norm = -clamped / self.cap;
        1.0 + norm * self.weight
    }
}

/// Adjustment measured as a delta from a league baseline.
///
/// Used for both the opposing defense (yards allowed to the position) and the
/// game total (over/under points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineWeights {
    pub weight: f64,
    pub baseline: f64,
    /// Largest delta from the baseline considered
    pub cap: f64,
}

impl BaselineWeights {
    /// Defense vs WRs: league average yards allowed per game
    pub fn default_defense() -> Self {
        Self {
            weight: 0.18,
            baseline: 150.0,
            cap: 60.0,
        }
    }

    /// Game total: lighter weight around the league average total
    pub fn default_total() -> Self {
        Self {
            weight: 0.06,
            baseline: 44.5,
            cap: 12.0,
        }
    }

    pub fn multiplier(&self, observed: f64) -> f64 {
        let delta = clamp(observed - self.baseline, -self.cap, self.cap);
        let norm = delta / self.cap;
        1.0 + norm * self.weight
    }
}

/// QB passing line relative to the QB's season average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QbWeights {
    pub weight: f64,
    /// Cap on the relative delta, as a fraction (0.25 = +/-25%)
    pub cap_pct: f64,
}

impl Default for QbWeights {
    fn default() -> Self {
        Self {
            weight: 0.16,
            cap_pct: 0.25,
        }
    }
}

impl QbWeights {
    /// A season average of zero or below is floored at [`QB_AVG_EPSILON`], so
    /// the relative delta is always finite and simply saturates the cap.
    pub fn multiplier(&self, qb_line: f64, qb_season_avg: f64) -> f64 {
        let avg = qb_season_avg.max(QB_AVG_EPSILON);
        let rel = clamp((qb_line - avg) / avg, -self.cap_pct, self.cap_pct);
        let norm = rel / self.cap_pct;
        1.0 + norm * self.weight
    }
}

/// Safety bounds on the combined multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierBounds {
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for MultiplierBounds {
    fn default() -> Self {
        Self {
            floor: 0.65,
            ceiling: 1.45,
        }
    }
}

impl MultiplierBounds {
    pub fn clamp(&self, multiplier: f64) -> f64 {
        clamp(multiplier, self.floor, self.ceiling)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.floor > self.ceiling {
            return Err(ConfigError::InvertedBounds {
                floor: self.floor,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base_yards_blend() {
        let blend = BaseBlend::default();
        assert_relative_eq!(blend.base_yards(62.5, 58.3), 60.82, epsilon = 1e-12);
    }

    #[test]
    fn test_spread_endpoints() {
        let spread = SpreadWeights::default();
        assert_relative_eq!(spread.multiplier(-10.0), 1.12, epsilon = 1e-12);
        assert_relative_eq!(spread.multiplier(10.0), 0.88, epsilon = 1e-12);
        assert_eq!(spread.multiplier(0.0), 1.0);
    }

    #[test]
    fn test_spread_clamps_beyond_cap() {
        let spread = SpreadWeights::default();
        for s in [-35.0_f64, -10.5, -3.0, 0.5, 7.0, 14.0, 99.0] {
            let clamped = s.max(-spread.cap).min(spread.cap);
            assert_eq!(spread.multiplier(s), spread.multiplier(clamped), "spread {}", s);
        }
    }

    #[test]
    fn test_underdog_boosts() {
        let spread = SpreadWeights::default();
        assert_relative_eq!(spread.multiplier(-2.5), 1.03, epsilon = 1e-12);
        assert!(spread.multiplier(3.5) < 1.0);
    }

    #[test]
    fn test_baseline_is_neutral() {
        let defense = BaselineWeights::default_defense();
        let total = BaselineWeights::default_total();
        assert_eq!(defense.multiplier(150.0), 1.0);
        assert_eq!(total.multiplier(44.5), 1.0);
    }

    #[test]
    fn test_baseline_monotonic() {
        let defense = BaselineWeights::default_defense();
        let mut prev = defense.multiplier(0.0);
        let mut allowed = 0.0;
        while allowed <= 300.0 {
            let m = defense.multiplier(allowed);
            assert!(m >= prev, "defense multiplier decreased at {}", allowed);
            prev = m;
            allowed += 2.5;
        }
        assert_relative_eq!(defense.multiplier(300.0), 1.18, epsilon = 1e-12);
        assert_relative_eq!(defense.multiplier(0.0), 0.82, epsilon = 1e-12);
    }

    #[test]
    fn test_total_monotonic() {
        let total = BaselineWeights::default_total();
        let mut prev = total.multiplier(20.0);
        let mut points = 20.0;
        while points <= 70.0 {
            let m = total.multiplier(points);
            assert!(m >= prev, "total multiplier decreased at {}", points);
            prev = m;
            points += 0.5;
        }
        assert_relative_eq!(total.multiplier(70.0), 1.06, epsilon = 1e-12);
        assert_relative_eq!(total.multiplier(20.0), 0.94, epsilon = 1e-12);
    }

    #[test]
    fn test_defense_and_total_values() {
        assert_relative_eq!(
            BaselineWeights::default_defense().multiplier(162.0),
            1.036,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            BaselineWeights::default_total().multiplier(46.5),
            1.01,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_qb_neutral_at_average() {
        let qb = QbWeights::default();
        for avg in [1.0, 180.0, 240.0, 310.5] {
            assert_eq!(qb.multiplier(avg, avg), 1.0);
        }
    }

    #[test]
    fn test_qb_relative_delta() {
        let qb = QbWeights::default();
        // (255 - 240) / 240 = 0.0625 -> 0.25 of the cap
        assert_relative_eq!(qb.multiplier(255.0, 240.0), 1.04, epsilon = 1e-12);
        // +50% saturates the cap
        assert_relative_eq!(qb.multiplier(360.0, 240.0), 1.16, epsilon = 1e-12);
    }

    #[test]
    fn test_qb_zero_average_is_finite() {
        let qb = QbWeights::default();
        for avg in [0.0, -15.0] {
            let m = qb.multiplier(250.0, avg);
            assert!(m.is_finite());
            assert_relative_eq!(m, 1.16, epsilon = 1e-12);
        }
        assert!(qb.multiplier(0.0, 0.0).is_finite());
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = MultiplierBounds::default();
        assert_eq!(bounds.clamp(2.0), 1.45);
        assert_eq!(bounds.clamp(0.1), 0.65);
        assert_eq!(bounds.clamp(1.07), 1.07);
        assert_eq!(bounds.clamp(f64::NAN), 1.45);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let bounds = MultiplierBounds {
            floor: 1.2,
            ceiling: 0.9,
        };
        assert!(matches!(
            bounds.validate(),
            Err(ConfigError::InvertedBounds { .. })
        ));
    }
}
