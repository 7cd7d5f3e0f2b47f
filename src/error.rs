use crate::request::{Interval, Status};
use chrono::NaiveDateTime;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("ledger read failed")]
    Read(#[source] anyhow::Error),
    #[error("ledger write failed")]
    Write(#[source] anyhow::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("employee id {0} was not found in the roster")]
    UnknownEmployee(String),
    #[error("start {start} must come before end {end}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("requested time overlaps an existing request ({0})")]
    SchedulingConflict(Interval),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(thiserror::Error, Debug)]
pub enum ReviewError {
    #[error("no request with id {0}")]
    UnknownRequest(String),
    #[error("request {id} is already {status}")]
    AlreadyDecided { id: String, status: Status },
    #[error(transparent)]
    Store(#[from] StoreError),
}
