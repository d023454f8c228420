//! Small shared enums used across engine, app and ui.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    #[default]
    Buy,
    Sell,
}

impl TradeDirection {
    /// +1 for buys, -1 for sells.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Self::Buy => 1.0,
            Self::Sell => -1.0,
        }
    }
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

impl std::str::FromStr for TradeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "b" => Ok(Self::Buy),
            "sell" | "s" => Ok(Self::Sell),
            other => Err(format!("unknown trade direction '{other}'")),
        }
    }
}

/// Named views the app can navigate between.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default, clap::ValueEnum,
)]
pub enum Route {
    #[default]
    Landing,
    #[value(name = "list")]
    ListCoin,
    Exchange,
    Trade,
}

impl Route {
    /// Views that must not be shown without a connected wallet.
    pub fn requires_wallet(self) -> bool {
        matches!(self, Self::Exchange | Self::Trade)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landing => write!(f, "Home"),
            Self::ListCoin => write!(f, "List Your Coin"),
            Self::Exchange => write!(f, "Exchange"),
            Self::Trade => write!(f, "Trade"),
        }
    }
}
