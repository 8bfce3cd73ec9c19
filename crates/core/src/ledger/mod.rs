//! Ledger module - the explicit state container and canonical mutation
//! path.

mod ledger_model;
mod ledger_service;


pub use ledger_model::{AssetSummary, GoalExpense};
pub use ledger_service::Ledger;
