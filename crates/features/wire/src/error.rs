use std::borrow::Cow;

/// Errors raised while turning wire strings into typed values.
#[rorg_derive::rorg_error]
pub enum WireError {
    /// The string does not match the expected layout.
    #[error("Invalid wire format{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A token outside a closed set. The service and this client disagree about the
    /// protocol; callers should not retry.
    #[error("Unsupported {kind} value{}: '{value}'", format_context(.context))]
    UnsupportedValue { kind: &'static str, value: String, context: Option<Cow<'static, str>> },

    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Wire settings that cannot describe a layout.
    #[error("Invalid wire configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal wire error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
