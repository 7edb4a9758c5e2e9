//! Search options for `purchase` and `preview`.

use chrono::NaiveDate;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::QUERY_DATE_FORMAT;

/// The date filters the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum DateFilter {
    /// Records discovered since the date
    SinceDate,
    /// Records created after the date
    CreatedDateFrom,
    /// Records created before the date
    CreatedDateTo,
    /// Records updated after the date
    UpdatedDateFrom,
    /// Records updated before the date
    UpdatedDateTo,
    /// Records expiring after the date
    ExpiredDateFrom,
    /// Records expiring before the date
    ExpiredDateTo,
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.param_name())
    }
}

impl DateFilter {
    /// Query parameter name of the filter.
    pub fn param_name(&self) -> &'static str {
        match self {
            DateFilter::SinceDate => "sinceDate",
            DateFilter::CreatedDateFrom => "createdDateFrom",
            DateFilter::CreatedDateTo => "createdDateTo",
            DateFilter::UpdatedDateFrom => "updatedDateFrom",
            DateFilter::UpdatedDateTo => "updatedDateTo",
            DateFilter::ExpiredDateFrom => "expiredDateFrom",
            DateFilter::ExpiredDateTo => "expiredDateTo",
        }
    }
}

/// Optional date filters narrowing a history lookup.
///
/// Each filter is independent; unset filters are not sent.
///
/// ```
/// use chrono::NaiveDate;
/// use whois_history::SearchOptions;
///
/// let options = SearchOptions::new()
///     .since_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .expired_date_to(NaiveDate::from_ymd_opt(2021, 6, 30).unwrap());
///
/// assert_eq!(
///     options.query_params(),
///     vec![
///         ("sinceDate".to_string(), "2020-01-01".to_string()),
///         ("expiredDateTo".to_string(), "2021-06-30".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Records discovered since the date
    pub since_date: Option<NaiveDate>,
    /// Records created after the date
    pub created_date_from: Option<NaiveDate>,
    /// Records created before the date
    pub created_date_to: Option<NaiveDate>,
    /// Records updated after the date
    pub updated_date_from: Option<NaiveDate>,
    /// Records updated before the date
    pub updated_date_to: Option<NaiveDate>,
    /// Records expiring after the date
    pub expired_date_from: Option<NaiveDate>,
    /// Records expiring before the date
    pub expired_date_to: Option<NaiveDate>,
}

impl SearchOptions {
    /// Options with no filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `since_date`.
    pub fn since_date(mut self, date: NaiveDate) -> Self {
        self.since_date = Some(date);
        self
    }

    /// Sets `created_date_from`.
    pub fn created_date_from(mut self, date: NaiveDate) -> Self {
        self.created_date_from = Some(date);
        self
    }

    /// Sets `created_date_to`.
    pub fn created_date_to(mut self, date: NaiveDate) -> Self {
        self.created_date_to = Some(date);
        self
    }

    /// Sets `updated_date_from`.
    pub fn updated_date_from(mut self, date: NaiveDate) -> Self {
        self.updated_date_from = Some(date);
        self
    }

    /// Sets `updated_date_to`.
    pub fn updated_date_to(mut self, date: NaiveDate) -> Self {
        self.updated_date_to = Some(date);
        self
    }

    /// Sets `expired_date_from`.
    pub fn expired_date_from(mut self, date: NaiveDate) -> Self {
        self.expired_date_from = Some(date);
        self
    }

    /// Sets `expired_date_to`.
    pub fn expired_date_to(mut self, date: NaiveDate) -> Self {
        self.expired_date_to = Some(date);
        self
    }

    /// Sets `filter` to `date`.
    pub fn with(mut self, filter: DateFilter, date: NaiveDate) -> Self {
        *self.slot_mut(filter) = Some(date);
        self
    }

    /// The date set for `filter`, if any.
    pub fn get(&self, filter: DateFilter) -> Option<NaiveDate> {
        match filter {
            DateFilter::SinceDate => self.since_date,
            DateFilter::CreatedDateFrom => self.created_date_from,
            DateFilter::CreatedDateTo => self.created_date_to,
            DateFilter::UpdatedDateFrom => self.updated_date_from,
            DateFilter::UpdatedDateTo => self.updated_date_to,
            DateFilter::ExpiredDateFrom => self.expired_date_from,
            DateFilter::ExpiredDateTo => self.expired_date_to,
        }
    }

    fn slot_mut(&mut self, filter: DateFilter) -> &mut Option<NaiveDate> {
        match filter {
            DateFilter::SinceDate => &mut self.since_date,
            DateFilter::CreatedDateFrom => &mut self.created_date_from,
            DateFilter::CreatedDateTo => &mut self.created_date_to,
            DateFilter::UpdatedDateFrom => &mut self.updated_date_from,
            DateFilter::UpdatedDateTo => &mut self.updated_date_to,
            DateFilter::ExpiredDateFrom => &mut self.expired_date_from,
            DateFilter::ExpiredDateTo => &mut self.expired_date_to,
        }
    }

    /// The set filters as `(name, YYYY-MM-DD)` pairs, in `DateFilter` order.
    pub fn query_params(&self) -> Vec<(String, String)> {
        use strum::IntoEnumIterator;

        DateFilter::iter()
            .filter_map(|filter| {
                self.get(filter).map(|date| {
                    (
                        filter.param_name().to_string(),
                        date.format(QUERY_DATE_FORMAT).to_string(),
                    )
                })
            })
            .collect()
    }
}
