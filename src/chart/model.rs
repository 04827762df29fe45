//! Chart model built from signal rows.
//!
//! Pure data, no terminal involved: three line series against row index,
//! plus buy/sell marker sequences. Each marker sequence becomes exactly
//! one named dataset when rendered, so the legend carries a single "Buy"
//! and a single "Sell" entry no matter how many markers there are.

use crate::types::{SignalRow, TradeAction};

/// Legend label for the price line.
pub const PRICE_LABEL: &str = "Close Price";
/// Legend label for the MACD line.
pub const MACD_LABEL: &str = "MACD";
/// Legend label for the signal line.
pub const SIGNAL_LABEL: &str = "Signal Line";
/// Legend label for buy markers.
pub const BUY_LABEL: &str = "Buy";
/// Legend label for sell markers.
pub const SELL_LABEL: &str = "Sell";

/// Everything the renderer needs, keyed by row index on the x axis.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub price: Vec<(f64, f64)>,
    pub macd: Vec<(f64, f64)>,
    pub signal: Vec<(f64, f64)>,
    /// (row index, price) for every buy event, in row order.
    pub buy_points: Vec<(f64, f64)>,
    /// (row index, price) for every sell event, in row order.
    pub sell_points: Vec<(f64, f64)>,
}

impl ChartModel {
    /// Build the model from signal rows.
    ///
    /// Markers are collected from row 1 onward; row 0 never produces one
    /// because no crossover can exist before the first comparison.
    pub fn from_rows(rows: &[SignalRow]) -> Self {
        let mut price = Vec::with_capacity(rows.len());
        let mut macd = Vec::with_capacity(rows.len());
        let mut signal = Vec::with_capacity(rows.len());
        let mut buy_points = Vec::new();
        let mut sell_points = Vec::new();

        for (i, row) in rows.iter().enumerate() {
            let x = i as f64;
            price.push((x, row.price));
            macd.push((x, row.macd));
            signal.push((x, row.signal));

            if i == 0 {
                continue;
            }
            match row.action() {
                TradeAction::Buy => buy_points.push((x, row.price)),
                TradeAction::Sell => sell_points.push((x, row.price)),
                TradeAction::Hold => {}
            }
        }

        Self {
            price,
            macd,
            signal,
            buy_points,
            sell_points,
        }
    }

    /// Legend entries in draw order. The three line series are always
    /// present; Buy/Sell appear once each, and only when there is at
    /// least one marker of that kind.
    pub fn legend_entries(&self) -> Vec<&'static str> {
        let mut entries = vec![PRICE_LABEL, MACD_LABEL, SIGNAL_LABEL];
        if !self.buy_points.is_empty() {
            entries.push(BUY_LABEL);
        }
        if !self.sell_points.is_empty() {
            entries.push(SELL_LABEL);
        }
        entries
    }

    /// X-axis bounds: row 0 through the last row.
    pub fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.price.len().saturating_sub(1)) as f64]
    }

    /// Y-axis bounds across all three series, with a little headroom so
    /// markers at the extremes stay visible.
    pub fn y_bounds(&self) -> [f64; 2] {
        let values = self
            .price
            .iter()
            .chain(&self.macd)
            .chain(&self.signal)
            .map(|&(_, y)| y);

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }

        let pad = ((max - min) * 0.05).max(1.0);
        [min - pad, max + pad]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(price: f64, trade: i32) -> SignalRow {
        SignalRow {
            price,
            macd: price / 100.0,
            signal: price / 200.0,
            trade,
        }
    }

    #[test]
    fn test_marker_counts_match_trade_rows() {
        let rows = vec![
            row(100.0, 0),
            row(101.0, 1),
            row(102.0, 0),
            row(103.0, -1),
            row(104.0, 1),
            row(105.0, -1),
        ];
        let model = ChartModel::from_rows(&rows);
        assert_eq!(model.buy_points.len(), 2);
        assert_eq!(model.sell_points.len(), 2);
        assert_eq!(model.price.len(), rows.len());
    }

    #[test]
    fn test_row_zero_never_produces_marker() {
        let rows = vec![row(100.0, 1), row(101.0, 0), row(102.0, 0)];
        let model = ChartModel::from_rows(&rows);
        assert!(model.buy_points.is_empty());
        assert!(model.sell_points.is_empty());
    }

    #[test]
    fn test_buy_then_sell_scenario() {
        // Row 1 buys, row 2 sells: one marker each, at that row's price.
        let rows = vec![row(100.0, 0), row(105.0, 1), row(110.0, -1)];
        let model = ChartModel::from_rows(&rows);

        assert_eq!(model.buy_points, vec![(1.0, 105.0)]);
        assert_eq!(model.sell_points, vec![(2.0, 110.0)]);

        let legend = model.legend_entries();
        assert_eq!(legend.iter().filter(|l| **l == BUY_LABEL).count(), 1);
        assert_eq!(legend.iter().filter(|l| **l == SELL_LABEL).count(), 1);
    }

    #[test]
    fn test_legend_has_one_entry_per_marker_kind() {
        let rows = vec![
            row(100.0, 0),
            row(101.0, 1),
            row(102.0, 1),
            row(103.0, 1),
            row(104.0, -1),
            row(105.0, -1),
        ];
        let model = ChartModel::from_rows(&rows);
        let legend = model.legend_entries();
        assert_eq!(
            legend,
            vec![PRICE_LABEL, MACD_LABEL, SIGNAL_LABEL, BUY_LABEL, SELL_LABEL]
        );
    }

    #[test]
    fn test_legend_omits_absent_marker_kinds() {
        let rows = vec![row(100.0, 0), row(101.0, 0)];
        let model = ChartModel::from_rows(&rows);
        assert_eq!(
            model.legend_entries(),
            vec![PRICE_LABEL, MACD_LABEL, SIGNAL_LABEL]
        );
    }

    #[test]
    fn test_unknown_trade_values_plot_nothing() {
        let rows = vec![row(100.0, 0), row(101.0, 2), row(102.0, -7)];
        let model = ChartModel::from_rows(&rows);
        assert!(model.buy_points.is_empty());
        assert!(model.sell_points.is_empty());
    }

    #[test]
    fn test_bounds_cover_all_series() {
        let rows = vec![row(100.0, 0), row(200.0, 0), row(150.0, 0)];
        let model = ChartModel::from_rows(&rows);
        assert_eq!(model.x_bounds(), [0.0, 2.0]);
        let [lo, hi] = model.y_bounds();
        // MACD/signal series sit near zero, price up to 200.
        assert!(lo < 0.75);
        assert!(hi > 200.0);
    }
}
