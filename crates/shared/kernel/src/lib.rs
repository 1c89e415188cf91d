//! Kernel utilities shared across the SDK crates.
//! Keep this crate lightweight: configuration loading and the localized string provider.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use rorg_kernel::config::load_config;
//!     let cfg: rorg_domain::config::SdkConfig = load_config(Some("rorg")).unwrap();
//! # }
//! ```
//!
//! ## Localized strings
//! Build a [`strings::ResourceBundle`] once and pass it around as
//! `Arc<dyn StringProvider>`; see [`strings`].
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod strings;

pub use rorg_domain as domain;
