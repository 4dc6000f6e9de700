//! Query parameter parsing.
//!
//! Parameters arrive as raw strings from a routing layer. Nothing here ever
//! fails: unparsable or out-of-range values fall back to their defaults.

use crate::config::{ALL_MONTHS, DEFAULT_LIMIT, DEFAULT_PAGE};

// ---------------------------------------------------------------------------
// MonthSelector
// ---------------------------------------------------------------------------

/// Which calendar month a query is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MonthSelector {
    /// No filtering (the sentinel month 13).
    #[default]
    All,
    /// A calendar month, 1 through 12.
    Month(u8),
}

impl MonthSelector {
    /// Build a selector from the numeric month parameter.
    ///
    /// 1–12 select that month, 13 selects every month. Anything else is
    /// treated as the default.
    pub fn from_number(month: i64) -> Self {
        match month {
            1..=12 => MonthSelector::Month(month as u8),
            m if m == ALL_MONTHS as i64 => MonthSelector::All,
            other => {
                tracing::warn!("month {other} is out of range, querying all months");
                MonthSelector::All
            }
        }
    }

    /// Parse the raw `month` query parameter.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => MonthSelector::All,
            Some(text) => match leading_int(text) {
                Some(month) => Self::from_number(month),
                None => {
                    tracing::warn!("unparsable month {text:?}, querying all months");
                    MonthSelector::All
                }
            },
        }
    }

    /// The numeric form, with 13 standing for all months.
    pub fn number(&self) -> u8 {
        match self {
            MonthSelector::All => ALL_MONTHS,
            MonthSelector::Month(m) => *m,
        }
    }

    /// The month as the two-digit token found in `YYYY-MM-DD` dates.
    pub fn token(&self) -> Option<String> {
        match self {
            MonthSelector::All => None,
            MonthSelector::Month(m) => Some(format!("{:02}", m)),
        }
    }
}

// ---------------------------------------------------------------------------
// ListParams
// ---------------------------------------------------------------------------

/// Parameters for the paginated listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub month: MonthSelector,
    /// 1-indexed page number.
    pub page: usize,
    /// Records per page.
    pub limit: usize,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            month: MonthSelector::All,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Parse the raw `month`, `page` and `limit` query parameters.
    pub fn parse(month: Option<&str>, page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            month: MonthSelector::parse(month),
            page: positive_or(page, "page", DEFAULT_PAGE),
            limit: positive_or(limit, "limit", DEFAULT_LIMIT),
        }
    }

    /// Parse from `key=value` pairs such as a decoded query string.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (mut month, mut page, mut limit) = (None, None, None);
        for (key, value) in pairs {
            match key {
                "month" => month = Some(value),
                "page" => page = Some(value),
                "limit" => limit = Some(value),
                _ => {}
            }
        }
        Self::parse(month, page, limit)
    }

    pub fn month(mut self, month: MonthSelector) -> Self {
        self.month = month;
        self
    }

    /// Set the page; zero falls back to the first page.
    pub fn page(mut self, page: usize) -> Self {
        self.page = if page == 0 { DEFAULT_PAGE } else { page };
        self
    }

    /// Set the page size; zero falls back to the default size.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        self
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn positive_or(raw: Option<&str>, name: &str, default: usize) -> usize {
    let Some(text) = raw else {
        return default;
    };
    match leading_int(text) {
        Some(n) if n >= 1 => usize::try_from(n).unwrap_or(default),
        _ => {
            tracing::warn!("invalid {name} {text:?}, using {default}");
            default
        }
    }
}

/// Read an optionally signed integer from the start of `text`, ignoring
/// leading whitespace and anything after the digits (`"3abc"` reads as 3).
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}
