//! Per player-game input record

use serde::{Deserialize, Serialize};

/// Everything the engine needs about one receiver in one game.
///
/// A plain value: the engine takes its own copy, so changing a caller's record
/// afterwards never reaches a result that was already produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverInputs {
    pub receiver_name: String,

    /// Sportsbook receiving yards line
    pub sportsbook_line: f64,
    /// Player's season average receiving yards
    pub season_avg_rec_yards: f64,

    /// QB passing yards line
    pub qb_pass_yards_line: f64,
    /// QB season average passing yards
    pub qb_season_avg_pass_yards: f64,

    /// Team point spread (negative = underdog)
    pub spread: f64,
    /// Over/under total points for the game
    pub game_total_ou: f64,
    /// Opponent's average yards allowed to WRs per game
    pub defense_avg_wr_yards_allowed: f64,

    pub is_rain: bool,
    pub is_snow: bool,
    pub wind_mph: f64,
}

impl ReceiverInputs {
    /// Create an input record with every field supplied
    pub fn new(
        receiver_name: impl Into<String>,
        sportsbook_line: f64,
        season_avg_rec_yards: f64,
        qb_pass_yards_line: f64,
        qb_season_avg_pass_yards: f64,
        spread: f64,
        game_total_ou: f64,
        defense_avg_wr_yards_allowed: f64,
        is_rain: bool,
        is_snow: bool,
        wind_mph: f64,
    ) -> Self {
        Self {
            receiver_name: receiver_name.into(),
            sportsbook_line,
            season_avg_rec_yards,
            qb_pass_yards_line,
            qb_season_avg_pass_yards,
            spread,
            game_total_ou,
            defense_avg_wr_yards_allowed,
            is_rain,
            is_snow,
            wind_mph,
        }
    }

    /// Reference game used by the CLI defaults and the tests
    pub fn sample() -> Self {
        Self::new(
            "Sample WR",
            62.5,  // sportsbook receiving yards line
            58.3,  // season avg receiving yards
            255.0, // QB pass yards line
            240.0, // QB season avg pass yards
            -2.5,  // spread (underdog)
            46.5,  // game total O/U
            162.0, // defense avg WR yards allowed
            false,
            false,
            12.0,
        )
    }

    /// Values that look wrong but are still projected as-is.
    /// The engine clamps everything, so these are advisory only.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let numeric = [
            ("sportsbook_line", self.sportsbook_line),
            ("season_avg_rec_yards", self.season_avg_rec_yards),
            ("qb_pass_yards_line", self.qb_pass_yards_line),
            ("qb_season_avg_pass_yards", self.qb_season_avg_pass_yards),
            ("spread", self.spread),
            ("game_total_ou", self.game_total_ou),
            ("defense_avg_wr_yards_allowed", self.defense_avg_wr_yards_allowed),
            ("wind_mph", self.wind_mph),
        ];
        for (field, value) in numeric {
            if !value.is_finite() {
                warnings.push(format!("{}: not a finite number ({})", field, value));
            }
        }

        if self.sportsbook_line < 0.0 {
            warnings.push(format!("sportsbook_line: negative ({})", self.sportsbook_line));
        }
        if self.season_avg_rec_yards < 0.0 {
            warnings.push(format!(
                "season_avg_rec_yards: negative ({})",
                self.season_avg_rec_yards
            ));
        }
        if self.qb_season_avg_pass_yards <= 0.0 {
            warnings.push(format!(
                "qb_season_avg_pass_yards: {} is not positive, QB adjustment saturates",
                self.qb_season_avg_pass_yards
            ));
        }
        if self.wind_mph < 0.0 {
            warnings.push(format!("wind_mph: negative ({})", self.wind_mph));
        }
        if self.is_rain && self.is_snow {
            warnings.push("is_rain and is_snow both set, penalties compound".to_string());
        }

        warnings
    }
}
