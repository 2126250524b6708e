// ドロップ種別ごとの重み

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WEIGHT, LOW_VALUE_WEIGHT};
use crate::domain::board::TokenType;

/// 種別→重みの明示的な対応表。
/// 列挙の並び順ではなく種別そのものでフィールドを引く。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenWeights {
    pub red: f64,
    pub blue: f64,
    pub green: f64,
    pub light: f64,
    pub dark: f64,
    pub heart: f64,
}

impl TokenWeights {
    /// 全種別同じ重み
    pub fn uniform(weight: f64) -> Self {
        Self {
            red: weight,
            blue: weight,
            green: weight,
            light: weight,
            dark: weight,
            heart: weight,
        }
    }

    /// 重みを取得（番兵は0）
    pub fn weight_of(&self, token: TokenType) -> f64 {
        match token {
            TokenType::Red => self.red,
            TokenType::Blue => self.blue,
            TokenType::Green => self.green,
            TokenType::Light => self.light,
            TokenType::Dark => self.dark,
            TokenType::Heart => self.heart,
            TokenType::Empty | TokenType::Undefined => 0.0,
        }
    }

    /// 1種別の重みを差し替え
    pub fn with_weight(mut self, token: TokenType, weight: f64) -> Result<Self> {
        let slot = match token {
            TokenType::Red => &mut self.red,
            TokenType::Blue => &mut self.blue,
            TokenType::Green => &mut self.green,
            TokenType::Light => &mut self.light,
            TokenType::Dark => &mut self.dark,
            TokenType::Heart => &mut self.heart,
            TokenType::Empty | TokenType::Undefined => {
                return Err(anyhow!("番兵 {:?} には重みを設定できません", token));
            }
        };
        *slot = weight;
        Ok(self)
    }

    /// 全重みが有限かつ非負か検証
    pub fn validate(&self) -> Result<()> {
        for t in TokenType::CONCRETE {
            let w = self.weight_of(t);
            if !w.is_finite() || w < 0.0 {
                return Err(anyhow!("重みが不正です: {:?} = {}", t, w));
            }
        }
        Ok(())
    }
}

impl Default for TokenWeights {
    fn default() -> Self {
        Self {
            heart: LOW_VALUE_WEIGHT,
            ..Self::uniform(DEFAULT_WEIGHT)
        }
    }
}
