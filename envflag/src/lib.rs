//! Typed environment variable flags
//!
//! `envflag` binds environment variables to existing variables of a handful of
//! scalar types, resolves them in one pass at startup, and renders the result as
//! a table for diagnostics.
//!
//! # Features
//!
//! - **Typed destinations**: `isize`, `i32`, `i64`, `f32`, `f64` and `String`
//! - **Default values**: used when a variable is absent or parses to zero
//! - **Required flags**: fail when a variable is absent and has no default
//! - **Fail-fast batches**: resolve many flags in order, stop at the first error
//! - **Diagnostics**: render every flag's name, default and current value
//!
//! # Value Parsing
//!
//! - Integers: base-10, width of the destination (`PORT=8080`)
//! - Floats: base-10, width of the destination (`RATIO=0.75`)
//! - Strings: verbatim (`HOST=db.local`)
//!
//! A value that parses to the zero value of its type (`0`, `0.0`, empty) counts
//! as not set. The default then applies, even when the variable was set
//! explicitly.
//!
//! # Example
//!
//! ```rust
//! use envflag::{Flag, Flags};
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DOC_HOST", "db.local");
//! #     std::env::remove_var("DOC_PORT");
//! let mut host = String::new();
//! let mut port: i32 = 0;
//!
//! let mut flags = Flags::new()
//!     .with(Flag::required("DOC_HOST", &mut host))
//!     .with(Flag::optional("DOC_PORT", &mut port, 8080));
//! flags.resolve()?;
//! println!("{flags}");
//! drop(flags);
//!
//! assert_eq!(host, "db.local");
//! assert_eq!(port, 8080);
//! #     Ok(())
//! # }
//! ```

mod env;
mod error;
mod flag;
mod flags;
mod scalar;
mod table;

pub use env::{Environment, ProcessEnv};
pub use error::{FlagError, ParseError};
pub use flag::{Flag, Resolve};
pub use flags::{parse, Flags};
pub use scalar::{Scalar, ScalarKind, Value};
