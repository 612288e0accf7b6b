//! Key-value configuration sources.
//!
//! A [`ConfigSource`] is the "environment layer" of option resolution: either the
//! live process environment ([`ProcessEnv`]) or any other string-keyed store that a
//! host application wants to resolve from instead.
use std::{
    collections::{BTreeMap, HashMap},
    env,
};

/// Read-only accessor for string configuration values.
pub trait ConfigSource {
    /// Raw value for `key`, if the source has one.
    fn get(&self, key: &str) -> Option<String>;

    /// Short label used in logs to tell sources apart.
    fn name(&self) -> &'static str {
        "config"
    }
}

/// The current process environment.
///
/// Values are read at call time, so a resolver always sees the environment as it
/// is when the reader gets constructed. Non-UTF-8 values are returned lossily and
/// will therefore fail numeric parsing instead of being silently dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn name(&self) -> &'static str {
        "env"
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T> ConfigSource for &T
where
    T: ConfigSource + ?Sized,
{
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_maps_are_sources() {
        let mut hm = HashMap::new();
        hm.insert("K".to_string(), "v".to_string());
        assert_eq!(ConfigSource::get(&hm, "K").as_deref(), Some("v"));
        assert_eq!(ConfigSource::get(&hm, "missing"), None);

        let bt: BTreeMap<String, String> = [("K".to_string(), "w".to_string())].into();
        assert_eq!(ConfigSource::get(&bt, "K").as_deref(), Some("w"));
        assert_eq!(bt.name(), "config");
    }

    #[test]
    fn references_delegate() {
        fn name_of<S: ConfigSource>(s: S) -> &'static str {
            s.name()
        }
        let dynamic: &dyn ConfigSource = &ProcessEnv;
        assert_eq!(name_of(&ProcessEnv), "env");
        assert_eq!(name_of(dynamic), "env");
    }

    #[test]
    fn process_env_misses_unset_key() {
        assert!(
            ProcessEnv
                .get("METRONOME_MODEL_TEST_KEY_THAT_IS_NEVER_SET")
                .is_none()
        );
    }
}
