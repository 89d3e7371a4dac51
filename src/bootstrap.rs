use crate::application::services::MemberService;
use crate::config::{Config, StoreBackend};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::member_store::MemberStore;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::{Database, InMemoryMemberStore};
use crate::infrastructure::runtime::clock::SystemClock;
use std::sync::Arc;

/// Builds the member store selected by `STORE_BACKEND`.
pub async fn build_member_store(
    config: &Config,
) -> Result<Arc<dyn MemberStore>, Box<dyn std::error::Error>> {
    let clock = Arc::new(SystemClock::new()) as Arc<dyn Clock>;

    let store: Arc<dyn MemberStore> = match config.store_backend {
        StoreBackend::Memory => {
            if config.seed_roster {
                tracing::info!("Using in-memory member store with seed roster");
                Arc::new(InMemoryMemberStore::with_seed_roster(clock)?) as Arc<dyn MemberStore>
            } else {
                tracing::info!("Using empty in-memory member store");
                Arc::new(InMemoryMemberStore::new(clock)) as Arc<dyn MemberStore>
            }
        }
        StoreBackend::Database => {
            let db = Database::connect(&config.database_url).await?;
            tracing::info!("Database connection established");

            db.run_migrations().await?;
            tracing::info!("Database migrations applied");

            Arc::new(db.with_clock(clock)) as Arc<dyn MemberStore>
        }
    };

    Ok(store)
}

pub fn build_app_state(store: Arc<dyn MemberStore>) -> AppState {
    AppState {
        member_service: MemberService::new(store),
    }
}
