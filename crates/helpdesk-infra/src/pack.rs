//! FAQ pack adapters: file-backed artifacts plus the compiled-in default.
//!
//! Pack resolution order: `HELPDESK_PACK` env var, then `pack_path` from
//! `config.toml`, then the default pack baked into the binary. A configured
//! pack that fails to load falls back to the default with a warning rather
//! than refusing to start.

use std::path::PathBuf;

use helpdesk_core::pack::PackSource;
use helpdesk_types::config::GlobalConfig;
use helpdesk_types::error::PackError;
use helpdesk_types::faq::FaqPack;

/// The default knowledge pack shipped inside the binary.
const DEFAULT_PACK_JSON: &str = include_str!("../assets/default_pack.json");

/// Parse the compiled-in default pack.
pub fn builtin_pack() -> FaqPack {
    serde_json::from_str(DEFAULT_PACK_JSON).expect("compiled-in default pack must parse")
}

/// Which pack file to load, if any.
///
/// `HELPDESK_PACK` overrides the config's `pack_path`; `None` means the
/// compiled-in default applies.
pub fn resolve_pack_path(config: &GlobalConfig) -> Option<PathBuf> {
    if let Ok(path) = std::env::var("HELPDESK_PACK") {
        return Some(PathBuf::from(path));
    }
    config.pack_path.clone()
}

/// Pack source reading a JSON artifact from disk.
pub struct FilePackSource {
    path: PathBuf,
}

impl FilePackSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PackSource for FilePackSource {
    async fn load(&self) -> Result<FaqPack, PackError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                PackError::NotFound(self.path.display().to_string())
            } else {
                PackError::Read(err.to_string())
            }
        })?;

        let pack: FaqPack =
            serde_json::from_str(&content).map_err(|err| PackError::Parse(err.to_string()))?;
        if pack.is_empty() {
            return Err(PackError::Empty);
        }
        Ok(pack)
    }
}

/// Load the pack the engine should be built from.
///
/// A resolvable path that fails to load logs a warning and yields the
/// compiled-in default, so a bad artifact never takes the service down.
pub async fn load_pack(config: &GlobalConfig) -> FaqPack {
    let Some(path) = resolve_pack_path(config) else {
        let pack = builtin_pack();
        tracing::debug!(entries = pack.len(), "using compiled-in FAQ pack");
        return pack;
    };

    match FilePackSource::new(path.clone()).load().await {
        Ok(pack) => {
            tracing::info!(path = %path.display(), entries = pack.len(), "FAQ pack loaded");
            pack
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "failed to load FAQ pack, using compiled-in default"
            );
            builtin_pack()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_pack_parses_and_is_populated() {
        let pack = builtin_pack();
        assert!(pack.len() >= 20);
        assert!(pack.entries.iter().all(|e| !e.answer.is_empty()));
    }

    #[tokio::test]
    async fn file_source_loads_valid_artifact() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("faq.json");
        tokio::fs::write(
            &path,
            r#"{
                "built_at": "2025-06-01T00:00:00Z",
                "entries": [{"question": "q", "answer": "a"}]
            }"#,
        )
        .await
        .unwrap();

        let pack = FilePackSource::new(&path).load().await.unwrap();
        assert_eq!(pack.len(), 1);
        assert_eq!(pack.version, 1);
    }

    #[tokio::test]
    async fn file_source_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let source = FilePackSource::new(tmp.path().join("absent.json"));
        assert!(matches!(source.load().await, Err(PackError::NotFound(_))));
    }

    #[tokio::test]
    async fn file_source_rejects_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("faq.json");
        tokio::fs::write(&path, "not json {{").await.unwrap();
        assert!(matches!(
            FilePackSource::new(&path).load().await,
            Err(PackError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn file_source_rejects_entryless_pack() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("faq.json");
        tokio::fs::write(
            &path,
            r#"{"built_at": "2025-06-01T00:00:00Z", "entries": []}"#,
        )
        .await
        .unwrap();
        assert!(matches!(
            FilePackSource::new(&path).load().await,
            Err(PackError::Empty)
        ));
    }

    #[tokio::test]
    async fn load_pack_falls_back_to_builtin_on_bad_path() {
        let config = GlobalConfig {
            pack_path: Some(PathBuf::from("/nonexistent/faq.json")),
            ..GlobalConfig::default()
        };
        let pack = load_pack(&config).await;
        assert!(pack.len() >= 20);
    }
}
