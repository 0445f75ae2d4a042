//! A single environment-backed flag

use std::fmt;

use tracing::{debug, warn};

use crate::env::{from_env, Environment, ProcessEnv};
use crate::error::FlagError;
use crate::scalar::{Scalar, ScalarKind, Value};
use crate::table::Table;

pub(crate) const TITLE: &str = "Base Flag";
pub(crate) const HEADER: [&str; 4] = ["Var Name", "Default Value", "Required", "Current Value"];

/// Something that can be resolved from the environment and described afterwards.
///
/// This is the uniform interface [`Flags`](crate::Flags) stores, so flags bound to
/// different scalar types can live in one ordered collection.
pub trait Resolve {
    /// Resolve the flag against the given environment and write its destination.
    ///
    /// # Errors
    ///
    /// - [`FlagError::FlagRequired`] when the variable is absent, the default is
    ///   empty and the flag is required
    /// - [`FlagError::ParseFailure`] when the value cannot be parsed
    fn resolve_from(&mut self, env: &dyn Environment) -> Result<(), FlagError>;

    /// Resolve the flag against the process environment.
    ///
    /// # Errors
    ///
    /// See [`Resolve::resolve_from`].
    fn resolve(&mut self) -> Result<(), FlagError> {
        self.resolve_from(&ProcessEnv)
    }

    fn name(&self) -> &str;

    fn is_required(&self) -> bool;

    fn kind(&self) -> ScalarKind;

    fn default_value(&self) -> Value;

    /// Value currently held by the destination.
    fn current_value(&self) -> Value;
}

/// Binds an environment variable to a typed destination.
///
/// The destination is borrowed, not owned: resolving writes into the caller's
/// variable exactly once, and only on success.
///
/// A value that parses to the type's zero value (`0`, `0.0`, `""`) is treated
/// as not set, so an explicit `PORT=0` is replaced by a non-zero default.
///
/// # Example
///
/// ```rust
/// use envflag::{Flag, Resolve};
///
/// # fn main() -> Result<(), envflag::FlagError> {
/// # std::env::remove_var("EXAMPLE_PORT");
/// let mut port: i32 = 0;
/// Flag::optional("EXAMPLE_PORT", &mut port, 8080).resolve()?;
/// assert_eq!(port, 8080);
/// # Ok(())
/// # }
/// ```
///
/// Destinations outside the supported scalar set do not compile:
///
/// ```compile_fail
/// use envflag::Flag;
///
/// let mut enabled = false;
/// let _flag = Flag::optional("ENABLED", &mut enabled, true);
/// ```
pub struct Flag<'a, T: Scalar> {
    name: String,
    value: &'a mut T,
    default: T,
    required: bool,
}

impl<'a, T: Scalar> Flag<'a, T> {
    pub fn new(name: impl Into<String>, value: &'a mut T, default: T, required: bool) -> Self {
        Self {
            name: name.into(),
            value,
            default,
            required,
        }
    }

    /// A flag that falls back to `default` when the variable is not set.
    pub fn optional(name: impl Into<String>, value: &'a mut T, default: T) -> Self {
        Self::new(name, value, default, false)
    }

    /// A flag that must be present in the environment.
    pub fn required(name: impl Into<String>, value: &'a mut T) -> Self {
        Self::new(name, value, T::default(), true)
    }

    pub fn default(&self) -> &T {
        &self.default
    }

    pub fn value(&self) -> &T {
        &*self.value
    }
}

impl<T: Scalar> Resolve for Flag<'_, T> {
    fn resolve_from(&mut self, env: &dyn Environment) -> Result<(), FlagError> {
        let name = self.name.trim();
        let raw = from_env(env, name);

        if raw.is_none() && self.default.is_empty() && self.required {
            return Err(FlagError::required(name));
        }

        let parsed = T::parse(raw.as_deref().unwrap_or_default())
            .map_err(|e| FlagError::parse(name, e))?;

        if parsed.is_empty() {
            if raw.as_deref().is_some_and(|r| !r.is_empty()) && !self.default.is_empty() {
                warn!(
                    flag = name,
                    raw = raw.as_deref().unwrap_or_default(),
                    "explicit zero value replaced by default"
                );
            }
            debug!(flag = name, source = "default", value = %self.default.to_value());
            *self.value = self.default.clone();
        } else {
            debug!(flag = name, source = "env", value = %parsed.to_value());
            *self.value = parsed;
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn default_value(&self) -> Value {
        self.default.to_value()
    }

    fn current_value(&self) -> Value {
        self.value.to_value()
    }
}

impl<T: Scalar> fmt::Debug for Flag<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("default", &self.default)
            .field("required", &self.required)
            .finish()
    }
}

impl<T: Scalar> fmt::Display for Flag<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new(HEADER).title(TITLE);
        table.push_row(row(self));
        f.write_str(&table.render())
    }
}

pub(crate) fn row(flag: &dyn Resolve) -> [String; 4] {
    [
        flag.name().to_string(),
        flag.default_value().to_string(),
        flag.is_required().to_string(),
        flag.current_value().to_string(),
    ]
}
