//! Settings for the tutorialweb server.
//!
//! Values are read from `TUTORIALWEB_*` environment variables with
//! sensible defaults. The resulting `Settings` is passed through
//! unchanged to the application factory in `server`.
//!
use std::{env, path::PathBuf};

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 6543;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_SITE_NAME: &str = "tutorialweb";

/// Application settings for binding, assets and page rendering
#[derive(Clone, Debug)]
pub struct Settings {
    /// Listen address
    pub bind_addr: String,
    /// Listen port
    pub port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Site title interpolated into rendered pages
    pub site_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind_addr: DEFAULT_BIND.into(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.into(),
            site_name: DEFAULT_SITE_NAME.into(),
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to the defaults
    /// for anything missing or unparsable.
    pub fn from_env() -> Self {
        Settings {
            bind_addr: env::var("TUTORIALWEB_BIND").unwrap_or_else(|_| DEFAULT_BIND.into()),
            port: env::var("TUTORIALWEB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: env::var("TUTORIALWEB_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.into()),
            site_name: env::var("TUTORIALWEB_SITE_NAME")
                .unwrap_or_else(|_| DEFAULT_SITE_NAME.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "0.0.0.0");
        assert_eq!(settings.port, 6543);
        assert_eq!(settings.static_dir, PathBuf::from("static"));
        assert_eq!(settings.site_name, "tutorialweb");
    }
}
