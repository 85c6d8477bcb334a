use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const ISOLATED_VARS: [&str; 5] = [
    "ZOOLINGO_CONFIG_HOME",
    "ENVIRONMENT",
    "LOG_LEVEL",
    "MODEL_PATH",
    "MURF_API_KEY",
];

/// Serializes env mutation and restores every touched variable on drop.
pub struct ZoolingoEnvGuard {
    previous: Vec<(&'static str, Option<String>)>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl ZoolingoEnvGuard {
    /// Point the config root at `path` and clear every settings override.
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = ISOLATED_VARS
            .iter()
            .map(|&name| (name, std::env::var(name).ok()))
            .collect();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            for name in ISOLATED_VARS {
                std::env::remove_var(name);
            }
            std::env::set_var("ZOOLINGO_CONFIG_HOME", path);
        }
        Self {
            previous,
            _lock: lock,
        }
    }

    pub fn set(&self, name: &str, value: &str) {
        // SAFETY: the guard holds the global env lock.
        unsafe {
            std::env::set_var(name, value);
        }
    }
}

impl Drop for ZoolingoEnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.previous.drain(..) {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(name, value),
                    None => std::env::remove_var(name),
                }
            }
        }
    }
}
