//! Cron expression validation
//!
//! Schedules are validated syntactically only: the expression must split
//! into the five classic fields (minute, hour, day-of-month, month,
//! day-of-week), optionally wrapped in `cron(...)` with a sixth year
//! field as some scheduler services write them. Semantic feasibility
//! (Feb 30 and friends) is the scheduler's problem, not ours.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters a single cron field may contain: numbers, names (JAN, MON),
/// wildcards and the step/range/nth punctuation.
static FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9*,/?#-]+$").expect("valid field regex"));

/// Why a schedule expression was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CronParseError {
    #[error("schedule expression is empty")]
    Empty,
    #[error("expected 5 fields (or 6 in cron(...) form), got {0}")]
    WrongFieldCount(usize),
    #[error("invalid characters in field '{0}'")]
    BadField(String),
}

/// A syntactically valid schedule expression, split into fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronExpression {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    /// Sixth field accepted in the wrapped `cron(...)` form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl CronExpression {
    /// Parse `"m h dom mon dow"` or `"cron(m h dom mon dow [y])"`.
    pub fn parse(expr: &str) -> Result<Self, CronParseError> {
        let trimmed = expr.trim();
        if trimmed.is_empty() {
            return Err(CronParseError::Empty);
        }

        let inner = trimmed
            .strip_prefix("cron(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let fields: Vec<&str> = inner.split_whitespace().collect();
        if !(fields.len() == 5 || fields.len() == 6) {
            return Err(CronParseError::WrongFieldCount(fields.len()));
        }

        for field in &fields {
            if !FIELD_RE.is_match(field) {
                return Err(CronParseError::BadField((*field).to_string()));
            }
        }

        Ok(Self {
            minute: fields[0].to_string(),
            hour: fields[1].to_string(),
            day_of_month: fields[2].to_string(),
            month: fields[3].to_string(),
            day_of_week: fields[4].to_string(),
            year: fields.get(5).map(|f| (*f).to_string()),
        })
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )?;
        if let Some(year) = &self.year {
            write!(f, " {year}")?;
        }
        Ok(())
    }
}
