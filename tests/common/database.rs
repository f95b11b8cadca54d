//! Database test fixtures and utilities
//!
//! PostgreSQL tests need a disposable database named by `TEST_DATABASE_URL`.
//! Without it they return early.

use sqlx::PgPool;

/// Connect to the test database and apply migrations
pub async fn create_test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to create test database pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    Some(pool)
}

/// Remove every chat message for a trip
pub async fn cleanup_trip(pool: &PgPool, trip_id: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM chat_messages WHERE trip_id = $1")
        .bind(trip_id)
        .execute(pool)
        .await?;
    Ok(())
}
