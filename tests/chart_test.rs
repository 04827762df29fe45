//! Integration tests for the chart pipeline: signals CSV -> chart model.

use crossover::chart::ChartModel;
use crossover::store;

fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_marker_counts_match_trade_column() {
    let (_dir, path) = write_csv(
        "Price,MACD,Signal,Trade\n\
         100.0,0.1,0.2,1\n\
         101.0,0.3,0.2,1\n\
         102.0,0.1,0.2,0\n\
         103.0,0.0,0.1,-1\n\
         104.0,0.2,0.1,1\n",
    );

    let rows = store::read_signals(&path).unwrap();
    let model = ChartModel::from_rows(&rows);

    // Row 0 has Trade=1 but is excluded; rows 1 and 4 count.
    let buys = rows.iter().skip(1).filter(|r| r.trade == 1).count();
    let sells = rows.iter().skip(1).filter(|r| r.trade == -1).count();
    assert_eq!(model.buy_points.len(), buys);
    assert_eq!(model.sell_points.len(), sells);
    assert_eq!(model.buy_points.len(), 2);
    assert_eq!(model.sell_points.len(), 1);
}

#[test]
fn test_buy_row_one_sell_row_two_scenario() {
    let (_dir, path) = write_csv(
        "Price,MACD,Signal,Trade\n\
         100.0,0.0,0.0,0\n\
         105.0,0.5,0.2,1\n\
         110.0,0.1,0.3,-1\n",
    );

    let rows = store::read_signals(&path).unwrap();
    let model = ChartModel::from_rows(&rows);

    assert_eq!(model.buy_points, vec![(1.0, 105.0)]);
    assert_eq!(model.sell_points, vec![(2.0, 110.0)]);

    let legend = model.legend_entries();
    assert_eq!(legend.iter().filter(|l| **l == "Buy").count(), 1);
    assert_eq!(legend.iter().filter(|l| **l == "Sell").count(), 1);
}

#[test]
fn test_missing_trade_column_is_an_error() {
    let (_dir, path) = write_csv(
        "Price,MACD,Signal\n\
         100.0,0.1,0.2\n",
    );

    assert!(store::read_signals(&path).is_err());
}

#[test]
fn test_non_numeric_cell_is_an_error() {
    let (_dir, path) = write_csv(
        "Price,MACD,Signal,Trade\n\
         100.0,oops,0.2,0\n",
    );

    assert!(store::read_signals(&path).is_err());
}

#[test]
fn test_empty_signals_file_is_an_error() {
    let (_dir, path) = write_csv("Price,MACD,Signal,Trade\n");
    assert!(store::read_signals(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store::read_signals(dir.path().join("nope.csv")).is_err());
}

#[test]
fn test_extra_columns_are_tolerated() {
    // Column selection, not schema validation: extra columns pass through.
    let (_dir, path) = write_csv(
        "Price,MACD,Signal,Trade,Note\n\
         100.0,0.1,0.2,0,hello\n\
         101.0,0.3,0.2,1,world\n",
    );

    let rows = store::read_signals(&path).unwrap();
    let model = ChartModel::from_rows(&rows);
    assert_eq!(model.buy_points, vec![(1.0, 101.0)]);
}
