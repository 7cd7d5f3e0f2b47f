//! Core request types and wire date/time formats
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Wire format of the `Date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of the `Start_Time` / `End_Time` columns.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Wire format of the submission timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[n(0)]
    Pending,
    #[n(1)]
    Approved,
    #[n(2)]
    Cancelled,
}

impl Status {
    /// Case-sensitive literal used by the backing table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Approved => "Approved",
            Status::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Status::Pending),
            "Approved" => Some(Status::Approved),
            "Cancelled" => Some(Status::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    #[n(0)]
    Sick,
    #[n(1)]
    AnnualLeave,
    #[n(2)]
    FamilyMatter,
    #[n(3)]
    SpecialLeave,
    #[n(4)]
    Other,
}

impl Reason {
    pub fn as_label(&self) -> &'static str {
        match self {
            Reason::Sick => "Sick",
            Reason::AnnualLeave => "Annual Leave",
            Reason::FamilyMatter => "Family Matter",
            Reason::SpecialLeave => "Special Leave",
            Reason::Other => "Other",
        }
    }

    /// Maps the canonical labels (in both spaced and compact spellings) and
    /// folds anything else into `Other`, since the submission form constrains
    /// the set but the table itself is free text.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Sick" => Reason::Sick,
            "Annual Leave" | "AnnualLeave" => Reason::AnnualLeave,
            "Family Matter" | "FamilyMatter" => Reason::FamilyMatter,
            "Special Leave" | "SpecialLeave" => Reason::SpecialLeave,
            _ => Reason::Other,
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Returns `None` unless `start < end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Half-open intersection test. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(TIMESTAMP_FORMAT),
            self.end.format(TIMESTAMP_FORMAT)
        )
    }
}

/// One row of the ledger.
///
/// The date and time fields stay string-typed on purpose: the backing table
/// is externally editable, so they are parsed when scanned and bad values are
/// skipped rather than trusted wholesale.
#[derive(minicbor::Encode, minicbor::Decode, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    #[n(0)]
    pub request_id: String,
    #[n(1)]
    pub employee_id: String,
    #[n(2)]
    pub display_name: String,
    #[n(3)]
    pub reason: Reason,
    #[n(4)]
    pub details: String,
    #[n(5)]
    pub status: Status,
    #[n(6)]
    pub remark: String,
    #[n(7)]
    pub date: String,
    #[n(8)]
    pub start_time: String,
    #[n(9)]
    pub end_time: String,
    #[n(10)]
    pub submitted_at: String,
}

impl Request {
    /// Parses the stored date/time columns into a comparable interval.
    /// Returns `None` for rows that do not parse or whose end does not come
    /// after their start.
    pub fn interval(&self) -> Option<Interval> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        let start = NaiveTime::parse_from_str(&self.start_time, TIME_FORMAT).ok()?;
        let end = NaiveTime::parse_from_str(&self.end_time, TIME_FORMAT).ok()?;
        Interval::new(date.and_time(start), date.and_time(end))
    }
}

/// Input to the submission workflow. Carries the raw employee id exactly as
/// the user typed it; normalization happens at lookup.
#[derive(Debug, Clone)]
pub struct RequestDraft {
    employee_id: String,
    reason: Reason,
    details: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl RequestDraft {
    pub fn new(employee_id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            reason: Reason::Other,
            details: String::new(),
            start,
            end,
        }
    }

    pub fn set_reason(mut self, reason: Reason) -> Self {
        self.reason = reason;
        self
    }

    pub fn set_details(mut self, details: &str) -> Self {
        self.details = details.to_string();
        self
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}
