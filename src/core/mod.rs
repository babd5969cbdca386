pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod import;
pub mod ledger;
pub mod log;
pub mod logic;
