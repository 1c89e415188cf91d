//! Facade over the rorg crates.
//! Re-exports the value types, the wire parser and the kernel services so an RPC layer
//! depends on one crate. Keep this crate thin: it composes, it does not implement.
//!
//! ```rust
//! use rorg::{ApiKeyStatus, parse_api_key_status, parse_timestamp};
//!
//! assert_eq!(parse_api_key_status("running").unwrap(), ApiKeyStatus::Running);
//! assert!(parse_timestamp("2019-01-02 15:04:05.1+00:00").is_ok());
//! ```

pub use rorg_domain as domain;
pub use rorg_kernel as kernel;
#[cfg(feature = "logger")]
pub use rorg_logger as logger;
pub use rorg_wire as wire;

pub use rorg_domain::{ApiKeyStatus, FractionPrecision, Timestamp};
pub use rorg_wire::{
    KeyUsage, TimestampLayout, WireError, format_timestamp, parse_api_key_status,
    parse_timestamp,
};

#[cfg(not(target_arch = "wasm32"))]
pub use rorg_kernel::config::load_config;

/// Cargo features compiled into this build.
pub mod features {
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "logger")]
        "logger",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
