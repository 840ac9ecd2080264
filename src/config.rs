use crate::i18n::Lang;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

// Service configuration sourced from environment variables.
#[derive(Debug, Clone)]
pub struct NodexConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub storage: StorageKind,
    pub default_lang: Lang,
    pub admin_token: Option<String>,
}

/// Storage backend selector. `None` keeps the service up in a read-only,
/// empty-catalog mode when no real backend is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    None,
}

#[derive(Debug, Deserialize)]
struct NodexConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    storage: Option<String>,
    default_lang: Option<String>,
    admin_token: Option<String>,
}

impl NodexConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("NODEX_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse NODEX_BIND")?;
        let metrics_bind = std::env::var("NODEX_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse NODEX_METRICS_BIND")?;
        let storage = parse_storage(
            &std::env::var("NODEX_STORAGE").unwrap_or_else(|_| "memory".to_string()),
        )?;
        let default_lang = std::env::var("NODEX_DEFAULT_LANG")
            .unwrap_or_else(|_| "en".to_string())
            .parse()
            .map_err(|err: String| anyhow::anyhow!(err))
            .with_context(|| "parse NODEX_DEFAULT_LANG")?;
        let admin_token = std::env::var("NODEX_ADMIN_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        Ok(Self {
            bind_addr,
            metrics_bind,
            storage,
            default_lang,
            admin_token,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("NODEX_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read NODEX_CONFIG: {path}"))?;
            let override_cfg: NodexConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse nodex config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.storage {
                config.storage = parse_storage(&value)?;
            }
            if let Some(value) = override_cfg.default_lang {
                config.default_lang = value
                    .parse()
                    .map_err(|err: String| anyhow::anyhow!(err))
                    .with_context(|| "parse default_lang")?;
            }
            if let Some(value) = override_cfg.admin_token {
                config.admin_token = Some(value).filter(|token| !token.is_empty());
            }
        }
        Ok(config)
    }
}

fn parse_storage(value: &str) -> Result<StorageKind> {
    match value {
        "memory" => Ok(StorageKind::Memory),
        "none" => Ok(StorageKind::None),
        other => anyhow::bail!("unknown storage backend: {other}"),
    }
}
