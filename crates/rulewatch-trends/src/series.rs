//! Daily count series and its re-aggregations.
//!
//! Every chart is derived from one [`DailyCountSeries`]: a gapless,
//! chronologically ordered run of days between the earliest and latest valid
//! publication dates. Weekly and monthly buckets are sums over that series,
//! so totals are preserved by construction.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rulewatch_core::{DateField, Table};

/// Number of records published on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u32,
}

/// Summed count for a week or month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCount {
    /// Sunday ending the week, or first day of the month.
    pub period: NaiveDate,
    pub count: u32,
}

impl PeriodCount {
    /// `YYYY-MM` tick label.
    #[must_use]
    pub fn month_label(&self) -> String {
        self.period.format("%Y-%m").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyCountSeries {
    days: Vec<DailyCount>,
}

impl DailyCountSeries {
    /// Tallies one unit per date and zero-fills every day between the
    /// earliest and latest date.
    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut tally: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for date in dates {
            *tally.entry(date).or_insert(0) += 1;
        }

        let (Some((&first, _)), Some((&last, _))) =
            (tally.first_key_value(), tally.last_key_value())
        else {
            return Self::default();
        };

        let mut days = Vec::new();
        let mut day = first;
        while day <= last {
            days.push(DailyCount {
                date: day,
                count: tally.get(&day).copied().unwrap_or(0),
            });
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        Self { days }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyCount> {
        self.days.iter()
    }

    #[must_use]
    pub fn days(&self) -> &[DailyCount] {
        &self.days
    }

    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    #[must_use]
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.count)).sum()
    }

    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.days.iter().map(|d| d.count).max().unwrap_or(0)
    }

    /// Trailing mean over `window` days, one entry per day. The first
    /// `window - 1` entries are `None`. A zero window is treated as 1.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rolling_mean(&self, window: usize) -> Vec<Option<f64>> {
        let window = window.max(1);
        let mut sum: u64 = 0;
        let mut out = Vec::with_capacity(self.days.len());
        for (i, day) in self.days.iter().enumerate() {
            sum += u64::from(day.count);
            if i >= window {
                sum -= u64::from(self.days[i - window].count);
            }
            if i + 1 < window {
                out.push(None);
            } else {
                out.push(Some(sum as f64 / window as f64));
            }
        }
        out
    }

    /// Sums into calendar weeks ending on Sunday, labelled by that Sunday.
    #[must_use]
    pub fn weekly(&self) -> Vec<PeriodCount> {
        self.resample(|date| {
            let to_sunday = 6 - i64::from(date.weekday().num_days_from_monday());
            date.checked_add_signed(Duration::days(to_sunday)).unwrap_or(date)
        })
    }

    /// Sums into calendar months and keeps the most recent `months` buckets,
    /// oldest first.
    #[must_use]
    pub fn monthly(&self, months: usize) -> Vec<PeriodCount> {
        let mut buckets = self.resample(|date| date.with_day(1).unwrap_or(date));
        let skip = buckets.len().saturating_sub(months);
        buckets.split_off(skip)
    }

    /// Groups consecutive days sharing the same bucket key. Days are ordered,
    /// so each bucket is contiguous.
    fn resample<F>(&self, bucket_of: F) -> Vec<PeriodCount>
    where
        F: Fn(NaiveDate) -> NaiveDate,
    {
        let mut buckets: Vec<PeriodCount> = Vec::new();
        for day in &self.days {
            let period = bucket_of(day.date);
            match buckets.last_mut() {
                Some(last) if last.period == period => last.count += day.count,
                _ => buckets.push(PeriodCount {
                    period,
                    count: day.count,
                }),
            }
        }
        buckets
    }
}

/// Builds the daily series for `table`. Records whose date is missing or
/// unparseable are excluded.
#[must_use]
pub fn daily_counts(table: &Table) -> DailyCountSeries {
    let mut excluded = 0usize;
    let dates: Vec<NaiveDate> = table
        .iter()
        .filter_map(|record| match record.parsed_date() {
            DateField::Valid(date) => Some(date),
            DateField::Invalid(_) | DateField::Missing => {
                excluded += 1;
                None
            }
        })
        .collect();

    if excluded > 0 {
        tracing::debug!(excluded, "records without a usable date left out of trend series");
    }
    DailyCountSeries::from_dates(dates)
}

#[cfg(test)]
#[path = "series_test.rs"]
mod tests;
