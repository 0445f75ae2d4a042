//! Environment lookup

use std::collections::HashMap;
use std::env;

/// Source of environment variable values.
///
/// `None` means the variable is not present at all; `Some("")` means it is
/// present but blank.
pub trait Environment {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Look up a variable after trimming surrounding whitespace from its name.
pub(crate) fn from_env(env: &dyn Environment, name: &str) -> Option<String> {
    env.lookup(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_process_env_present_and_absent() {
        env::set_var("ENVFLAG_TEST_LOOKUP", "value");
        env::remove_var("ENVFLAG_TEST_LOOKUP_MISSING");

        assert_eq!(
            ProcessEnv.lookup("ENVFLAG_TEST_LOOKUP"),
            Some("value".to_string())
        );
        assert_eq!(ProcessEnv.lookup("ENVFLAG_TEST_LOOKUP_MISSING"), None);

        env::remove_var("ENVFLAG_TEST_LOOKUP");
    }

    #[test]
    #[serial]
    fn test_process_env_blank_is_present() {
        env::set_var("ENVFLAG_TEST_BLANK", "");
        assert_eq!(ProcessEnv.lookup("ENVFLAG_TEST_BLANK"), Some(String::new()));
        env::remove_var("ENVFLAG_TEST_BLANK");
    }

    #[test]
    fn test_from_env_trims_name() {
        let vars = HashMap::from([("PORT".to_string(), "9090".to_string())]);
        assert_eq!(from_env(&vars, "  PORT\t"), Some("9090".to_string()));
        assert_eq!(from_env(&vars, "HOST"), None);
    }
}
