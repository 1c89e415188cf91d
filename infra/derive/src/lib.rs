#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the SDK crates.
//!
//! ## Usage
//! Depend on the crate from any workspace member that declares its own error type:
//! ```toml
//! [dependencies]
//! rorg-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Examples below are `ignore`d to avoid compiling in this crate; the UI tests under
//! `tests/ui` exercise the macro end to end.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring a crate-level error enum.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context(..)`
///   to `Result<T, Name>` and to `Result<T, Source>` for every wrapped source type.
/// * **Standard Conversions**: Implements `From<Source>` for variants carrying a `source`
///   field (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal { message, context }` variant is present.
/// * **`format_context`**: Emits a private helper that renders `" (context)"` or nothing,
///   for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant uses **named fields**; tuple and unit variants are rejected.
/// 3. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 4. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use rorg_derive::rorg_error;
/// use std::borrow::Cow;
///
/// #[rorg_error]
/// pub enum WireError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal wire error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn decode(raw: &str) -> Result<serde_json::Value, WireError> {
///     serde_json::from_str(raw).context("Decoding RPC envelope")
/// }
/// ```
#[proc_macro_attribute]
pub fn rorg_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
