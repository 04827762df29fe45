use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLC price bar.
///
/// Serializes to the bars CSV layout: `Date,Open,High,Low,Close`, date
/// first. Field order here is the column order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_bar_column_names() {
        let bar = DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 6, 24).unwrap(),
            open: 182.5,
            high: 188.0,
            low: 181.2,
            close: 187.3,
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&bar).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(header, "Date,Open,High,Low,Close");
    }

    #[test]
    fn test_daily_bar_round_trip() {
        let bar = DailyBar {
            date: NaiveDate::from_ymd_opt(2024, 6, 24).unwrap(),
            open: 182.5,
            high: 188.0,
            low: 181.2,
            close: 187.3,
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&bar).unwrap();
        let out = writer.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(out.as_slice());
        let parsed: DailyBar = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(parsed, bar);
    }
}
