//! PostgreSQL provisioning for repository integration tests.
//!
//! Every test gets its own freshly created database. The server is taken from
//! `TEST_DATABASE_URL` when set (the role needs `CREATEDB`); otherwise an
//! embedded cluster is bootstrapped once per test binary and stopped when the
//! binary exits.
//!
//! A server that cannot be reached fails the test. Set `SKIP_TEST_CLUSTER=1`
//! to skip instead.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use postgresql_embedded::blocking::PostgreSQL;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

static ADMIN_OPTIONS: OnceLock<Result<PgConnectOptions, String>> = OnceLock::new();
static EMBEDDED_CLUSTER: Mutex<Option<PostgreSQL>> = Mutex::new(None);
static DATABASE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes" (any case).
fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

extern "C" fn stop_embedded_cluster() {
    let Ok(mut guard) = EMBEDDED_CLUSTER.lock() else {
        return;
    };
    if let Some(postgresql) = guard.take() {
        if let Err(err) = postgresql.stop() {
            eprintln!("failed to stop embedded PostgreSQL: {err}");
        }
    }
}

fn start_embedded_cluster() -> Result<PgConnectOptions, String> {
    let mut postgresql = PostgreSQL::default();
    postgresql
        .setup()
        .map_err(|err| format!("embedded PostgreSQL setup: {err}"))?;
    postgresql
        .start()
        .map_err(|err| format!("embedded PostgreSQL start: {err}"))?;

    let settings = postgresql.settings();
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database("postgres");

    *EMBEDDED_CLUSTER
        .lock()
        .map_err(|_| "embedded cluster lock poisoned".to_string())? = Some(postgresql);
    // SAFETY: `stop_embedded_cluster` is a plain `extern "C"` fn with no captured state.
    unsafe {
        libc::atexit(stop_embedded_cluster);
    }
    Ok(options)
}

/// Connection options for the maintenance database of the test server.
fn admin_options() -> Result<PgConnectOptions, String> {
    ADMIN_OPTIONS
        .get_or_init(|| match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => PgConnectOptions::from_str(&url)
                .map_err(|err| format!("invalid TEST_DATABASE_URL: {err}")),
            // The blocking API drives its own runtime, which cannot nest inside
            // the test's runtime.
            Err(_) => std::thread::spawn(start_embedded_cluster)
                .join()
                .unwrap_or_else(|_| Err("embedded PostgreSQL bootstrap panicked".to_string())),
        })
        .clone()
}

/// Create an empty database and return a pool connected to it.
///
/// Returns `None` only when the cluster is unavailable and `SKIP_TEST_CLUSTER`
/// is set.
pub async fn fresh_database() -> Option<PgPool> {
    let admin = match admin_options() {
        Ok(options) => options,
        Err(reason) => return handle_cluster_setup_failure(reason),
    };

    let name = format!(
        "user_crud_test_{}_{}",
        std::process::id(),
        DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    let admin_pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect_with(admin.clone())
        .await
    {
        Ok(pool) => pool,
        Err(err) => return handle_cluster_setup_failure(format!("connect: {err}")),
    };
    sqlx::raw_sql(&format!("DROP DATABASE IF EXISTS {name}"))
        .execute(&admin_pool)
        .await
        .expect("failed to drop stale test database");
    sqlx::raw_sql(&format!("CREATE DATABASE {name}"))
        .execute(&admin_pool)
        .await
        .expect("failed to create test database");
    admin_pool.close().await;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(admin.database(&name))
        .await
        .expect("failed to connect to test database");
    Some(pool)
}
