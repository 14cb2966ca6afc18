use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the daily plan, joined with its task. The planner process
/// owns these rows; this service only reads them.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PlanEntry {
    pub task_order: i64,
    pub title: String,
    pub duration_minutes: i64,
    pub priority: i64,
    pub deadline: NaiveDate,
}
