use std::collections::{BTreeMap, HashMap};
use std::env;

/// A read-only view of named environment values.
///
/// The CGI gateway hands request metadata to the handler as process
/// environment variables. Everything that reads them goes through this trait
/// so the pipeline can be driven from an in-memory map in tests.
pub trait Environment {
    /// Returns the value for `key`, or `None` if it was not supplied.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
