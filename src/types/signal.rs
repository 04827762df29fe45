use serde::{Deserialize, Serialize};

/// One row of the signals file: the close price, the MACD oscillator, its
/// signal line, and the trade decision taken at that row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRow {
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "MACD")]
    pub macd: f64,
    #[serde(rename = "Signal")]
    pub signal: f64,
    #[serde(rename = "Trade")]
    pub trade: i32,
}

impl SignalRow {
    /// Typed view of the trade column.
    pub fn action(&self) -> TradeAction {
        TradeAction::from_indicator(self.trade)
    }
}

/// Trade decision at a time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    /// Map the discrete indicator column to an action. Anything outside
    /// {-1, 0, 1} is treated as hold; only 1 and -1 ever plot a marker.
    pub fn from_indicator(value: i32) -> Self {
        match value {
            1 => Self::Buy,
            -1 => Self::Sell,
            _ => Self::Hold,
        }
    }

    /// Value written to the trade column.
    pub fn indicator(&self) -> i32 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
            Self::Hold => 0,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::Hold => "Hold",
        }
    }
}
