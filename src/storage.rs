use crate::models::PlanEntry;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{
    env,
    path::{Path, PathBuf},
};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub fn resolve_database_path() -> PathBuf {
    if let Ok(path) = env::var("PLANNER_DB") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/planner.db")
}

pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    MIGRATOR.run(&pool).await?;
    Ok(pool)
}

/// Rows come back already ordered by `task_order`; the planner process
/// assigns those ordinals and callers render in store order.
pub async fn fetch_plan_for_date(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Vec<PlanEntry>, sqlx::Error> {
    sqlx::query_as::<_, PlanEntry>(
        "SELECT dp.task_order, t.title, t.duration_minutes, t.priority, t.deadline \
         FROM daily_plan dp \
         JOIN tasks t ON t.id = dp.task_id \
         WHERE dp.plan_date = ? \
         ORDER BY dp.task_order ASC",
    )
    .bind(date)
    .fetch_all(pool)
    .await
}
