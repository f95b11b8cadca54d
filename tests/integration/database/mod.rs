//! PostgreSQL store tests, skipped unless TEST_DATABASE_URL is set
