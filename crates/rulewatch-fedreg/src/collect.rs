//! Paginated collection of proposed-rule notices into a [`Table`].

use chrono::{Duration, NaiveDate, Utc};
use rulewatch_core::Table;

use crate::client::FedRegClient;
use crate::error::FedRegError;
use crate::types::RawDocument;

/// Upper bound on pages requested in a single fetch.
pub const MAX_PAGES: u32 = 1000;

/// What to do with a page once its response has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    /// Empty page: stop without appending anything.
    Stop,
    /// Last page according to `total_pages`: append, then stop.
    AppendAndStop,
    /// Append and request the next page.
    AppendAndContinue,
}

/// Termination policy for the page loop. First match wins:
/// an empty result list stops before appending; otherwise, reaching the
/// declared `total_pages` stops after appending.
#[must_use]
pub fn next_step(page: u32, results_len: usize, total_pages: Option<u32>) -> PageStep {
    if results_len == 0 {
        return PageStep::Stop;
    }
    match total_pages {
        Some(total) if page >= total => PageStep::AppendAndStop,
        _ => PageStep::AppendAndContinue,
    }
}

impl FedRegClient {
    /// Fetches every proposed rule published in the last `days` days.
    ///
    /// # Errors
    ///
    /// [`FedRegError::InvalidParameter`] if `days` is zero or reaches before
    /// the earliest representable date; otherwise see
    /// [`FedRegClient::fetch_since`].
    pub async fn fetch(&self, days: u32, per_page: u32) -> Result<Table, FedRegError> {
        if days == 0 {
            return Err(FedRegError::InvalidParameter {
                name: "days",
                reason: "must be greater than zero".to_string(),
            });
        }
        let start_date = Utc::now()
            .date_naive()
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| FedRegError::InvalidParameter {
                name: "days",
                reason: format!("{days} days before today is out of range"),
            })?;
        self.fetch_since(start_date, per_page).await
    }

    /// Fetches every proposed rule published on or after `start_date`.
    ///
    /// Pages are requested one at a time starting at 1. All-or-nothing: any
    /// failure discards the pages already collected and is returned as-is.
    /// Zero collected records yields an empty table, not an error.
    ///
    /// # Errors
    ///
    /// - [`FedRegError::InvalidParameter`] if `per_page` is zero.
    /// - [`FedRegError::PaginationLimit`] if more than [`MAX_PAGES`] pages
    ///   would be requested.
    /// - Any error from [`FedRegClient::fetch_page`].
    pub async fn fetch_since(
        &self,
        start_date: NaiveDate,
        per_page: u32,
    ) -> Result<Table, FedRegError> {
        if per_page == 0 {
            return Err(FedRegError::InvalidParameter {
                name: "per_page",
                reason: "must be greater than zero".to_string(),
            });
        }

        let mut collected: Vec<RawDocument> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if page > MAX_PAGES {
                return Err(FedRegError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            let response = self.fetch_page(start_date, per_page, page).await?;
            let total_pages = response.total_pages;
            let total_count = response.count;
            let results = response.into_results();
            tracing::debug!(
                page,
                results = results.len(),
                total_pages,
                total_count,
                "fetched Federal Register page"
            );

            match next_step(page, results.len(), total_pages) {
                PageStep::Stop => break,
                PageStep::AppendAndStop => {
                    collected.extend(results);
                    break;
                }
                PageStep::AppendAndContinue => collected.extend(results),
            }
            page += 1;
        }

        tracing::info!(
            records = collected.len(),
            pages = page,
            %start_date,
            "Federal Register collection complete"
        );

        Ok(collected.into_iter().map(RawDocument::into_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_stops_before_appending() {
        assert_eq!(next_step(1, 0, Some(3)), PageStep::Stop);
        assert_eq!(next_step(4, 0, None), PageStep::Stop);
    }

    #[test]
    fn empty_check_wins_over_total_pages() {
        assert_eq!(next_step(2, 0, Some(2)), PageStep::Stop);
    }

    #[test]
    fn reaching_total_pages_appends_then_stops() {
        assert_eq!(next_step(2, 40, Some(2)), PageStep::AppendAndStop);
    }

    #[test]
    fn exceeding_total_pages_appends_then_stops() {
        assert_eq!(next_step(5, 1, Some(3)), PageStep::AppendAndStop);
    }

    #[test]
    fn continues_below_total_pages() {
        assert_eq!(next_step(1, 100, Some(2)), PageStep::AppendAndContinue);
    }

    #[test]
    fn continues_when_total_pages_unknown() {
        assert_eq!(next_step(7, 100, None), PageStep::AppendAndContinue);
    }

    #[test]
    fn zero_total_pages_stops_after_first_non_empty_page() {
        assert_eq!(next_step(1, 3, Some(0)), PageStep::AppendAndStop);
    }
}
