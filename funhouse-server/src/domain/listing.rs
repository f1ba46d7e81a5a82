//! List view query parameters
//!
//! All list endpoints take the same optional parameters: free-text search,
//! categorical filters, inclusive date bounds, and a 1-indexed page. Filters
//! are AND-combined. An empty or missing parameter means "no constraint from
//! this axis", never "match empty string", so everything arrives as a raw
//! string and is parsed here.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, AppResult};

/// Raw query-string parameters for a list view
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub page: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a query value into one of the closed snake_case enums.
/// Empty or missing is no constraint; an unrecognized value is a 400.
fn parse_choice<T: DeserializeOwned>(field: &str, value: &Option<String>) -> AppResult<Option<T>> {
    let Some(v) = non_empty(value) else {
        return Ok(None);
    };
    serde_json::from_value(serde_json::Value::String(v.to_string()))
        .map(Some)
        .map_err(|_| {
            AppError::validation(format!("{field} is not a recognized value"))
                .with_detail("field", field)
        })
}

fn parse_date(field: &str, value: &Option<String>) -> AppResult<Option<NaiveDate>> {
    let Some(v) = non_empty(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(v, "%Y-%m-%d").map(Some).map_err(|_| {
        AppError::validation(format!("{field} must be a YYYY-MM-DD date")).with_detail("field", field)
    })
}

impl ListQuery {
    /// Trimmed search text, if any
    pub fn search(&self) -> Option<String> {
        non_empty(&self.search).map(str::to_string)
    }

    pub fn status<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        parse_choice("status", &self.status)
    }

    pub fn source<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        parse_choice("source", &self.source)
    }

    pub fn priority<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        parse_choice("priority", &self.priority)
    }

    pub fn category<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        parse_choice("category", &self.category)
    }

    pub fn date_from(&self) -> AppResult<Option<NaiveDate>> {
        parse_date("date_from", &self.date_from)
    }

    pub fn date_to(&self) -> AppResult<Option<NaiveDate>> {
        parse_date("date_to", &self.date_to)
    }

    /// Requested page number. Missing or non-numeric falls back to 1;
    /// out-of-range values are clamped later against the actual total.
    pub fn page(&self) -> u32 {
        non_empty(&self.page)
            .and_then(|p| p.parse().ok())
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CustomerStatus, LeadSource, TaskPriority};

    fn q(field: &str, value: &str) -> ListQuery {
        let mut query = ListQuery::default();
        match field {
            "search" => query.search = Some(value.to_string()),
            "status" => query.status = Some(value.to_string()),
            "source" => query.source = Some(value.to_string()),
            "priority" => query.priority = Some(value.to_string()),
            "date_from" => query.date_from = Some(value.to_string()),
            "page" => query.page = Some(value.to_string()),
            _ => unreachable!(),
        }
        query
    }

    #[test]
    fn test_empty_means_absent() {
        let query = q("status", "");
        assert_eq!(query.status::<CustomerStatus>().unwrap(), None);
        assert_eq!(q("search", "  ").search(), None);
        assert!(q("date_from", "").date_from().unwrap().is_none());
    }

    #[test]
    fn test_missing_means_absent() {
        let query = ListQuery::default();
        assert_eq!(query.status::<CustomerStatus>().unwrap(), None);
        assert_eq!(query.search(), None);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_valid_choices_parse() {
        assert_eq!(
            q("status", "new").status::<CustomerStatus>().unwrap(),
            Some(CustomerStatus::New)
        );
        assert_eq!(
            q("source", "walk_in").source::<LeadSource>().unwrap(),
            Some(LeadSource::WalkIn)
        );
        assert_eq!(
            q("priority", "urgent").priority::<TaskPriority>().unwrap(),
            Some(TaskPriority::Urgent)
        );
    }

    #[test]
    fn test_unrecognized_choice_rejected() {
        assert!(q("status", "bogus").status::<CustomerStatus>().is_err());
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(
            q("date_from", "2025-07-22").date_from().unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 22)
        );
        assert!(q("date_from", "22/07/2025").date_from().is_err());
    }

    #[test]
    fn test_page_is_lenient() {
        assert_eq!(q("page", "3").page(), 3);
        assert_eq!(q("page", "0").page(), 0); // clamped to 1 downstream
        assert_eq!(q("page", "abc").page(), 1);
        assert_eq!(q("page", "-2").page(), 1);
    }
}
