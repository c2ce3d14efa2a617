use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "vitrine";
const MANIFEST_FILE: &str = "showcase.json";

/// Environment variable that pins the manifest to an explicit path.
/// Unlike the default lookup, failures on an explicit path are errors.
pub const MANIFEST_ENV: &str = "VITRINE_MANIFEST";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("manifest not found at {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read manifest at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

/// One hoverable timeline item. Field names mirror the attributes the
/// page manifest exposes: what to show in the floating preview card and,
/// separately, what the small-width tap modal should open.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub label: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_src: Option<String>,
    #[serde(default)]
    pub aspect: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub mobile_media: Option<String>,
    #[serde(default)]
    pub mobile_type: Option<String>,
    #[serde(default)]
    pub mobile_alt: Option<String>,
}

/// One feed tile; video tiles participate in visibility autoplay.
#[derive(Debug, Clone, Deserialize)]
pub struct TileEntry {
    pub label: String,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_src: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopbarConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default)]
    pub center: String,
    #[serde(default)]
    pub right: String,
}

impl Default for TopbarConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            center: String::new(),
            right: String::new(),
        }
    }
}

fn default_brand() -> String {
    "vitrine".to_string()
}

/// The page manifest: everything the window builds its widgets from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowcaseManifest {
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub tiles: Vec<TileEntry>,
    #[serde(default)]
    pub topbar: TopbarConfig,
    #[serde(default)]
    pub info_text: String,
}

/// Loads the manifest from `$VITRINE_MANIFEST` if set (errors propagate),
/// otherwise from the default config location (absent or malformed files
/// fall back to the built-in demo manifest).
pub fn load_manifest() -> Result<ShowcaseManifest, ConfigError> {
    if let Some(path) = std::env::var_os(MANIFEST_ENV).map(PathBuf::from) {
        return load_manifest_from(&path);
    }
    Ok(load_default_manifest())
}

pub fn load_manifest_from(path: &Path) -> Result<ShowcaseManifest, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_default_manifest() -> ShowcaseManifest {
    let (xdg_config_home, home) = config_env_dirs();
    load_default_manifest_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_default_manifest_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ShowcaseManifest {
    let path = match manifest_path(APP_DIR, MANIFEST_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return demo_manifest(),
    };
    if !path.exists() {
        tracing::debug!(?path, "no manifest found; using demo manifest");
        return demo_manifest();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse showcase.json; using demo manifest");
            demo_manifest()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read showcase.json; using demo manifest");
            demo_manifest()
        }
    }
}

/// Built-in content so the window is never empty without a manifest.
fn demo_manifest() -> ShowcaseManifest {
    ShowcaseManifest {
        timeline: vec![
            TimelineEntry {
                label: "Field notes app".to_string(),
                media_type: None,
                media_src: None,
                aspect: Some("iphone".to_string()),
                role: Some("design + build".to_string()),
                mobile_media: None,
                mobile_type: None,
                mobile_alt: None,
            },
            TimelineEntry {
                label: "Gallery site".to_string(),
                media_type: None,
                media_src: None,
                aspect: Some("fourthree".to_string()),
                role: Some("frontend".to_string()),
                mobile_media: None,
                mobile_type: None,
                mobile_alt: None,
            },
        ],
        tiles: vec![
            TileEntry {
                label: "Poster study".to_string(),
                media_type: None,
                media_src: None,
            },
            TileEntry {
                label: "Motion reel".to_string(),
                media_type: None,
                media_src: None,
            },
        ],
        topbar: TopbarConfig::default(),
        info_text: "Selected work. Hover a timeline entry for a preview.".to_string(),
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn manifest_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_path_prefers_xdg_config_home() {
        let path = manifest_path(
            "vitrine",
            "showcase.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/vitrine/showcase.json"));
    }

    #[test]
    fn manifest_path_falls_back_to_home_dot_config() {
        let path = manifest_path("vitrine", "showcase.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/vitrine/showcase.json"));
    }

    #[test]
    fn manifest_path_errors_when_home_missing_and_xdg_unset() {
        let error = manifest_path("vitrine", "showcase.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_default_manifest_yields_demo_content() {
        let manifest =
            load_default_manifest_with(Some(Path::new("/nonexistent-config-root")), None);
        assert!(!manifest.timeline.is_empty());
        assert!(!manifest.tiles.is_empty());
    }

    #[test]
    fn explicit_manifest_path_errors_when_missing() {
        let error = load_manifest_from(Path::new("/nonexistent/showcase.json")).unwrap_err();
        assert!(matches!(error, ConfigError::NotFound { .. }));
    }

    #[test]
    fn manifest_fields_all_default() {
        let manifest: ShowcaseManifest = serde_json::from_str("{}").expect("empty object parses");
        assert!(manifest.timeline.is_empty());
        assert_eq!(manifest.topbar.brand, "vitrine");
    }
}
