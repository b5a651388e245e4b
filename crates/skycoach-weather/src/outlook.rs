//! Day-by-day digest of a multi-day forecast window.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::types::{local_time, ForecastEntry, ForecastWindow, WeatherCondition};

/// Days included in the outlook
pub const MAX_DAYS: usize = 5;

const MIDDAY_HOUR: i64 = 12;

/// Representative forecast for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOutlook {
    pub date: NaiveDate,
    pub temp_max: f64,
    pub temp_min: f64,
    pub condition: WeatherCondition,
    pub description: String,
}

impl From<(NaiveDate, &ForecastEntry)> for DailyOutlook {
    fn from((date, entry): (NaiveDate, &ForecastEntry)) -> Self {
        Self {
            date,
            temp_max: entry.temp_max,
            temp_min: entry.temp_min,
            condition: entry.condition,
            description: entry.description.clone(),
        }
    }
}

/// Pick the entry closest to midday for each local calendar day.
///
/// Days follow the window's timezone offset. Ties go to the earlier entry.
/// At most [`MAX_DAYS`] days are returned, in date order.
pub fn daily_outlook(window: &ForecastWindow) -> Vec<DailyOutlook> {
    let mut days: BTreeMap<NaiveDate, Vec<(u32, &ForecastEntry)>> = BTreeMap::new();
    for entry in &window.entries {
        let local = local_time(entry.at, window.timezone_offset);
        days.entry(local.date_naive())
            .or_default()
            .push((local.hour(), entry));
    }

    days.into_iter()
        .filter_map(|(date, entries)| {
            entries
                .into_iter()
                .min_by_key(|(hour, _)| (i64::from(*hour) - MIDDAY_HOUR).abs())
                .map(|(_, entry)| DailyOutlook::from((date, entry)))
        })
        .take(MAX_DAYS)
        .collect()
}
