
use std::env;

use tempfile::TempDir;

/// Sets or clears one variable for the life of the guard, then puts back
/// whatever was there before. Tests using it must be `#[serial]`.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    fn replace(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        // SAFETY: config tests run serially, so no other thread reads the environment
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
        Self { key, previous }
    }

    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        Self::replace(key, None)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // SAFETY: see `EnvGuard::replace`
        unsafe {
            match previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and point ORI_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("ORI_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Write config.toml into the temp config directory
pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join(crate::CONFIG_FILENAME), contents).unwrap();
}

/// Set the two required settings so validation can pass
pub(crate) fn required_settings() -> (EnvGuard, EnvGuard) {
    (
        EnvGuard::set("ORI_IDENTITY_API_KEY", "test-api-key"),
        EnvGuard::set("ORI_STORE_PROJECT_ID", "test-project"),
    )
}
