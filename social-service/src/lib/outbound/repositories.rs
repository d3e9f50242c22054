use sqlx::migrate::Migrator;

pub mod post;
pub mod user;

pub use post::SqlitePostRepository;
pub use user::SqliteUserRepository;

/// Schema migrations for the SQLite store.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}
