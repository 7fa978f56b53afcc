pub mod matches;
pub mod players;

use beachtrack_domain::ServiceError;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

fn create_db_pool() -> Pool<Postgres> {
    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL env var not set");

    PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&db_url)
        .expect("DATABASE_URL is not a valid connection string")
}

// SQLSTATE for insufficient_privilege; row-level-security denials from the
// hosted store arrive with this code.
const PERMISSION_DENIED: &str = "42501";

fn map_db_err(e: sqlx::Error) -> ServiceError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.code().as_deref() == Some(PERMISSION_DENIED)
    {
        return ServiceError::Forbidden(format!(
            "database policy denied the operation: {}",
            db_err.message()
        ));
    }
    ServiceError::Internal(e.to_string())
}
