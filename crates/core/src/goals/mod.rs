//! Goals module - savings-goal models and progress tracking.

mod goals_model;
mod goals_service;


pub use goals_model::{Goal, GoalProgress, GoalStatus, NewGoal, OverallProgress};
pub use goals_service::{apply_progress, compute_progress, create_goal, overall_progress};
