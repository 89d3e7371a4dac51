use std::sync::Arc;
use stressboard::domain::ports::clock::Clock;
use stressboard::infrastructure::persistence::Database;
use tempfile::TempDir;
use uuid::Uuid;

pub struct TestDb {
    db: Database,
    _dir: TempDir,
}

impl TestDb {
    pub fn db(&self) -> &Database {
        &self.db
    }
}

pub async fn setup_test_db() -> TestDb {
    // Unique file per test for parallel execution
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(format!("test_{}.db", Uuid::new_v4()));
    let db_url = format!("sqlite://{}?mode=rwc", path.display());

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDb { db, _dir: dir }
}

pub async fn setup_test_db_with_clock(clock: Arc<dyn Clock>) -> TestDb {
    let test_db = setup_test_db().await;
    TestDb {
        db: test_db.db.with_clock(clock),
        _dir: test_db._dir,
    }
}

pub async fn teardown_test_db(test_db: TestDb) {
    test_db.db.pool().close().await;
    drop(test_db);
}
