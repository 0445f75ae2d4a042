//! Ordered collections of flags

use std::fmt;

use anyhow::Context;
use tracing::debug;

use crate::env::{Environment, ProcessEnv};
use crate::flag::{self, Resolve, HEADER, TITLE};
use crate::table::Table;

/// An ordered registry of flags of any scalar type.
///
/// Flags are resolved and rendered in insertion order. Resolution is fail-fast:
/// the first error stops the batch, flags before it keep their new values and
/// flags after it are never touched.
pub struct Flags<'a> {
    title: String,
    flags: Vec<Box<dyn Resolve + 'a>>,
}

impl<'a> Flags<'a> {
    pub fn new() -> Self {
        Self {
            title: TITLE.to_string(),
            flags: Vec::new(),
        }
    }

    /// Title shown above the rendered table.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Append a flag, builder style.
    pub fn with(mut self, flag: impl Resolve + 'a) -> Self {
        self.push(flag);
        self
    }

    pub fn push(&mut self, flag: impl Resolve + 'a) {
        self.flags.push(Box::new(flag));
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Resolve + 'a)> {
        self.flags.iter().map(|flag| flag.as_ref())
    }

    /// Resolve every flag against the process environment.
    ///
    /// # Errors
    ///
    /// Returns the first [`FlagError`](crate::FlagError) encountered, wrapped in a
    /// batch-level context. The flag error, which names the failing variable,
    /// stays reachable through [`anyhow::Error::downcast_ref`].
    pub fn resolve(&mut self) -> anyhow::Result<()> {
        self.resolve_from(&ProcessEnv)
    }

    /// Resolve every flag against the given environment.
    ///
    /// # Errors
    ///
    /// See [`Flags::resolve`].
    pub fn resolve_from(&mut self, env: &dyn Environment) -> anyhow::Result<()> {
        for flag in &mut self.flags {
            flag.resolve_from(env).context("fail to parse flags")?;
        }
        debug!(count = self.flags.len(), "resolved flags");
        Ok(())
    }

    /// Render all flags as a table, one row per flag.
    pub fn render(&self) -> String {
        let mut table = Table::new(HEADER).title(self.title.as_str());
        for flag in self.iter() {
            table.push_row(flag::row(flag));
        }
        table.render()
    }
}

impl Default for Flags<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Extend<Box<dyn Resolve + 'a>> for Flags<'a> {
    fn extend<I: IntoIterator<Item = Box<dyn Resolve + 'a>>>(&mut self, iter: I) {
        self.flags.extend(iter);
    }
}

impl<'a> FromIterator<Box<dyn Resolve + 'a>> for Flags<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Resolve + 'a>>>(iter: I) -> Self {
        let mut flags = Self::new();
        flags.extend(iter);
        flags
    }
}

impl fmt::Display for Flags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Flags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|flag| flag.name()))
            .finish()
    }
}

/// Resolve `flags` in order against the process environment.
///
/// # Errors
///
/// See [`Flags::resolve`].
pub fn parse(flags: &mut Flags<'_>) -> anyhow::Result<()> {
    flags.resolve()
}
