pub mod error;
pub mod gate;
pub mod ledger;
pub mod overlap;
pub mod report;
pub mod request;
pub mod roster;
pub mod service;
pub mod store;
pub mod utils;
