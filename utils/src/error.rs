
///
/// The error stack shared by every crate in the workspace.
///
/// Fallible functions return `Result<T>`, attach a human-readable context
/// with `.context(...)`, and build ad-hoc errors with `error::error!`. Errors
/// that callers are expected to match on are declared with `thiserror` in the
/// crate that raises them, and survive the context chain for `downcast_ref`.
///
pub use anyhow::{anyhow as error, bail, Context, Error, Result};
