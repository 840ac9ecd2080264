//! NodeX HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, storage, the membership service, and the HTTP router,
//! then starts the API server and the metrics endpoint.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup logic.
mod api;
mod app;
mod auth;
mod config;
mod i18n;
mod model;
mod observability;
mod service;
mod store;

use api::types::FeatureFlags;
use app::{AppState, build_router};
use service::EventMembershipService;
use std::future::Future;
use std::sync::Arc;
use store::{DocumentStore, memory::InMemoryStore, null::NullStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::NodexConfig::from_env_or_yaml().expect("nodex config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::NodexConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability("nodex");
    let state = build_state(config.clone());
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "nodex listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

fn build_state(config: config::NodexConfig) -> AppState {
    let store: Arc<dyn DocumentStore> = match config.storage {
        config::StorageKind::Memory => Arc::new(InMemoryStore::new()),
        config::StorageKind::None => {
            tracing::warn!("no storage backend configured, running read-only with empty data");
            Arc::new(NullStore)
        }
    };

    AppState {
        features: FeatureFlags {
            durable_storage: store.is_durable(),
            admin_enabled: config.admin_token.is_some(),
        },
        service: EventMembershipService::new(store),
        api_version: "v1".to_string(),
        default_lang: config.default_lang,
        admin_token: config.admin_token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::Lang;
    use serial_test::serial;

    fn test_config(storage: config::StorageKind) -> config::NodexConfig {
        config::NodexConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            storage,
            default_lang: Lang::En,
            admin_token: None,
        }
    }

    #[tokio::test]
    async fn build_state_memory_backend() {
        let state = build_state(test_config(config::StorageKind::Memory));
        assert_eq!(state.service.store().backend_name(), "memory");
        assert!(!state.features.durable_storage);
        assert!(!state.features.admin_enabled);
    }

    #[tokio::test]
    async fn build_state_null_backend() {
        let state = build_state(test_config(config::StorageKind::None));
        assert_eq!(state.service.store().backend_name(), "none");
    }

    #[tokio::test]
    async fn build_state_admin_flag_follows_token() {
        let mut config = test_config(config::StorageKind::Memory);
        config.admin_token = Some("operator-token".to_string());
        let state = build_state(config);
        assert!(state.features.admin_enabled);
    }

    #[tokio::test]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(test_config(config::StorageKind::Memory), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
