use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

use docpick::app_dirs::CONFIG_HOME_ENV;
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Points `DOCPICK_CONFIG_HOME` at a fresh temp directory for one test.
///
/// Holds a process-wide lock so tests touching the variable run one at a time;
/// the previous value comes back on drop.
pub struct ConfigHome {
    home: TempDir,
    previous: Option<std::ffi::OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl ConfigHome {
    pub fn fresh() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
        let home = tempfile::tempdir().expect("create config home");
        let previous = std::env::var_os(CONFIG_HOME_ENV);
        // SAFETY: every writer of this variable holds ENV_LOCK.
        unsafe { std::env::set_var(CONFIG_HOME_ENV, home.path()) };
        Self {
            home,
            previous,
            _lock: lock,
        }
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }
}

impl Drop for ConfigHome {
    fn drop(&mut self) {
        // SAFETY: ENV_LOCK is still held by this guard.
        unsafe {
            match self.previous.take() {
                Some(value) => std::env::set_var(CONFIG_HOME_ENV, value),
                None => std::env::remove_var(CONFIG_HOME_ENV),
            }
        }
    }
}
