#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Orrery crates.
//! Currently this is the `#[orrery_error]` attribute, which every error enum in the
//! workspace is declared with.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! orrery-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for declaring error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<ErrorName>Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>` and to `Result<T, SourceError>` for wrapped sources.
/// * **Standard Conversions**: Implements `From<SourceError>` for variants that consist of a
///   source field and a context field only, so `?` works on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant with a source needs a `context: Option<Cow<'static, str>>` field.
/// 3. Sources are fields named `source` or marked with `#[source]`/`#[from]`.
/// 4. Tuple or unit variants are rejected.
///
/// Variants that carry extra fields next to `source` (for example a unit name) get no
/// `From` impl; they are built explicitly at the call site.
///
/// The macro emits a module-level `format_context` helper, so declare one error enum
/// per module.
///
/// # Example
///
/// ```rust,ignore
/// use orrery_derive::orrery_error;
/// use std::borrow::Cow;
///
/// #[orrery_error]
/// pub enum ReportError {
///     #[error("Walk error{}: {source}", format_context(.context))]
///     Walk { source: walkdir::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn scan(root: &Path) -> Result<u64, ReportError> {
///     let entry = WalkDir::new(root).into_iter().next().transpose().context("Scanning output")?;
///     entry.map(|e| e.depth() as u64).ok_or_else(|| "Empty output".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn orrery_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
