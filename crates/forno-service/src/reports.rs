//! # Sales Reports
//!
//! Day and month views over the sales ledger.
//!
//! ## Calendar Windows
//! Sales are stored with UTC timestamps; the report windows are defined
//! by the server's LOCAL calendar. "Today" is the local date, converted
//! to a half-open UTC interval:
//!
//! ```text
//! day   [local midnight of D,       local midnight of D+1)
//! month [local midnight of 1st,     local midnight of next month's 1st)
//! ```
//!
//! Half-open intervals mean a sale at exactly midnight belongs to the
//! new day, never to both.

use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use forno_core::types::Sale;
use forno_db::{DbError, SaleRepository};

// =============================================================================
// Types
// =============================================================================

/// Which calendar window a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportWindow {
    /// The current local calendar day.
    Day,

    /// The current local calendar month.
    Month,
}

/// A rendered sales report: the matching sales, their grand total, and
/// a human-readable heading.
///
/// ## Serialization
/// ```json
/// {
///   "sales": [ ... ],
///   "totalCents": 36000,
///   "label": "Sales for the Day (15/03/2024)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Sales in the window, oldest first.
    pub sales: Vec<Sale>,

    /// Sum of the sale totals, in cents. Zero for an empty window.
    pub total_cents: i64,

    /// Display heading, e.g. `Sales for the Day (15/03/2024)` or
    /// `Sales for the Month (March 2024)`.
    pub label: String,
}

/// Why a report could not be produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested window does not describe a real calendar range.
    #[error("Invalid report window: {0}")]
    InvalidWindow(String),

    /// The sales ledger query failed.
    #[error(transparent)]
    Ledger(#[from] DbError),
}

// =============================================================================
// Report Service
// =============================================================================

/// Produces day/month reports from the sales ledger.
#[derive(Debug, Clone)]
pub struct ReportService {
    sales: SaleRepository,
}

impl ReportService {
    pub fn new(sales: SaleRepository) -> Self {
        ReportService { sales }
    }

    /// Report for the current local day or month.
    pub async fn report(&self, window: ReportWindow) -> Result<SalesReport, ReportError> {
        let today = Local::now().date_naive();
        match window {
            ReportWindow::Day => self.sales_for_day(today).await,
            ReportWindow::Month => self.sales_for_month(today.year(), today.month()).await,
        }
    }

    /// All sales committed on the given local calendar day.
    pub async fn sales_for_day(&self, date: NaiveDate) -> Result<SalesReport, ReportError> {
        let next = date
            .succ_opt()
            .ok_or_else(|| ReportError::InvalidWindow(format!("day after {}", date)))?;

        let sales = self
            .sales
            .sales_between(local_midnight_utc(date), local_midnight_utc(next))
            .await?;

        Ok(build_report(
            sales,
            format!("Sales for the Day ({})", date.format("%d/%m/%Y")),
        ))
    }

    /// All sales committed in the given local calendar month.
    pub async fn sales_for_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<SalesReport, ReportError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ReportError::InvalidWindow(format!("{}-{:02}", year, month)))?;

        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .ok_or_else(|| ReportError::InvalidWindow(format!("{}-{:02}", next_year, next_month)))?;

        let sales = self
            .sales
            .sales_between(local_midnight_utc(first), local_midnight_utc(next_first))
            .await?;

        Ok(build_report(
            sales,
            format!("Sales for the Month ({})", first.format("%B %Y")),
        ))
    }
}

fn build_report(sales: Vec<Sale>, label: String) -> SalesReport {
    let total_cents = sales.iter().map(|s| s.total_cents).sum();
    SalesReport {
        sales,
        total_cents,
        label,
    }
}

/// Local midnight of `date` as a UTC instant.
///
/// DST shifts can make local midnight ambiguous or nonexistent; an
/// ambiguous midnight takes the earlier instant, a skipped one falls
/// back to treating the naive time as UTC.
pub(crate) fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&midnight),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use forno_core::catalog::Catalog;
    use forno_core::pricing::price_order;
    use forno_core::types::{CustomerInfo, StagedLine};
    use forno_db::{Database, DbConfig};

    async fn seed_sale(db: &Database, size: &str, at: DateTime<Utc>) {
        let customer = CustomerInfo::new("Ana Torres", "12 Oak Street", "555-0101");
        let order = price_order(
            &Catalog::standard(),
            &[StagedLine::new(size, 1, vec![])],
        )
        .unwrap();
        db.sales()
            .insert_order_at(&customer, &order, at)
            .await
            .unwrap();
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A mid-day instant of the given local date, so the sale falls well
    /// inside the day window regardless of the host timezone.
    fn noon_of(d: NaiveDate) -> DateTime<Utc> {
        local_midnight_utc(d) + Duration::hours(12)
    }

    #[tokio::test]
    async fn test_day_report_selects_only_that_day() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_sale(&db, "small", noon_of(date(2024, 3, 1))).await;
        seed_sale(&db, "medium", noon_of(date(2024, 3, 15))).await;
        seed_sale(&db, "large", noon_of(date(2024, 4, 1))).await;

        let reports = ReportService::new(db.sales());
        let report = reports.sales_for_day(date(2024, 3, 15)).await.unwrap();

        assert_eq!(report.sales.len(), 1);
        assert_eq!(report.total_cents, 8000);
        assert_eq!(report.label, "Sales for the Day (15/03/2024)");
    }

    #[tokio::test]
    async fn test_month_report_spans_whole_month() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_sale(&db, "small", noon_of(date(2024, 3, 1))).await;
        seed_sale(&db, "medium", noon_of(date(2024, 3, 15))).await;
        seed_sale(&db, "large", noon_of(date(2024, 4, 1))).await;

        let reports = ReportService::new(db.sales());
        let report = reports.sales_for_month(2024, 3).await.unwrap();

        assert_eq!(report.sales.len(), 2);
        assert_eq!(report.total_cents, 12_000);
        assert_eq!(report.label, "Sales for the Month (March 2024)");
        // Oldest first
        assert!(report.sales[0].created_at < report.sales[1].created_at);
    }

    #[tokio::test]
    async fn test_december_window_rolls_into_next_year() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_sale(&db, "small", noon_of(date(2023, 12, 31))).await;
        seed_sale(&db, "medium", noon_of(date(2024, 1, 1))).await;

        let reports = ReportService::new(db.sales());
        let report = reports.sales_for_month(2023, 12).await.unwrap();

        assert_eq!(report.sales.len(), 1);
        assert_eq!(report.total_cents, 4000);
    }

    #[tokio::test]
    async fn test_empty_window_reports_zero_total() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let reports = ReportService::new(db.sales());
        let report = reports.sales_for_day(date(2024, 6, 1)).await.unwrap();

        assert!(report.sales.is_empty());
        assert_eq!(report.total_cents, 0);
    }

    #[tokio::test]
    async fn test_report_uses_current_local_date() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        // Mid-day of today's local date, so the sale cannot drift out of
        // the window if the test straddles local midnight
        let today = Local::now().date_naive();
        seed_sale(&db, "small", noon_of(today)).await;

        let reports = ReportService::new(db.sales());
        let report = reports.report(ReportWindow::Day).await.unwrap();

        assert_eq!(report.sales.len(), 1);
        assert_eq!(
            report.label,
            format!("Sales for the Day ({})", today.format("%d/%m/%Y"))
        );
    }

    #[tokio::test]
    async fn test_invalid_month_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let reports = ReportService::new(db.sales());
        let err = reports.sales_for_month(2024, 13).await.unwrap_err();
        assert!(matches!(err, ReportError::InvalidWindow(_)));
    }
}
