// マッチ一覧 → スコア

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::weights::TokenWeights;
use crate::constants::{COMBO_BONUS_RATE, MIN_RUN, SIZE_BONUS_RATE};
use crate::domain::matching::MatchRecord;

/// スコア計算の設定
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    pub weights: TokenWeights,
    /// 3個を超える1個ごとの加算率
    pub size_bonus_rate: f64,
    /// 2コンボ目以降1つごとの加算率
    pub combo_bonus_rate: f64,
}

impl ScoreConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        for (name, rate) in [
            ("size_bonus_rate", self.size_bonus_rate),
            ("combo_bonus_rate", self.combo_bonus_rate),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(anyhow!("{} が不正です: {}", name, rate));
            }
        }
        Ok(())
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            weights: TokenWeights::default(),
            size_bonus_rate: SIZE_BONUS_RATE,
            combo_bonus_rate: COMBO_BONUS_RATE,
        }
    }
}

/// 1回の evaluate_board で得たマッチ一覧を評価値に変換する
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoreEvaluator {
    config: ScoreConfig,
}

impl ScoreEvaluator {
    pub fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// weight * (1 + max(0, size-3) * size_bonus_rate)
    pub fn per_match_value(&self, m: &MatchRecord) -> f64 {
        let extra = m.size.saturating_sub(MIN_RUN) as f64;
        self.config.weights.weight_of(m.token) * (1.0 + extra * self.config.size_bonus_rate)
    }

    /// sum(per_match) * (1 + max(0, count-1) * combo_bonus_rate)。マッチなしは0
    pub fn score(&self, matches: &[MatchRecord]) -> f64 {
        if matches.is_empty() {
            return 0.0;
        }
        let base: f64 = matches.iter().map(|m| self.per_match_value(m)).sum();
        let combos = (matches.len() - 1) as f64;
        base * (1.0 + combos * self.config.combo_bonus_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::TokenType;

    fn uniform() -> ScoreEvaluator {
        ScoreEvaluator::new(ScoreConfig {
            weights: TokenWeights::uniform(1.0),
            ..ScoreConfig::default()
        })
    }

    #[test]
    fn no_matches_scores_zero() {
        assert_eq!(uniform().score(&[]), 0.0);
    }

    #[test]
    fn single_three_match_scores_weight() {
        let s = uniform().score(&[MatchRecord::new(TokenType::Red, 3)]);
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn size_bonus_applies_past_three() {
        let s = uniform().score(&[MatchRecord::new(TokenType::Blue, 5)]);
        assert!((s - 1.5).abs() < 1e-12);
    }

    #[test]
    fn combo_bonus_multiplies_total() {
        let s = uniform().score(&[
            MatchRecord::new(TokenType::Red, 3),
            MatchRecord::new(TokenType::Green, 4),
        ]);
        // (1.0 + 1.25) * 1.25
        assert!((s - 2.8125).abs() < 1e-12);
    }

    #[test]
    fn heart_uses_low_default_weight() {
        let ev = ScoreEvaluator::default();
        let s = ev.score(&[MatchRecord::new(TokenType::Heart, 3)]);
        assert!((s - 0.3).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let cfg = ScoreConfig {
            combo_bonus_rate: -0.1,
            ..ScoreConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert!(ScoreConfig::default().validate().is_ok());
    }
}
