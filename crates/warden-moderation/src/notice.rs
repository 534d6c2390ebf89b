//! Warning notice composer.

/// Formatted warning text, ready for the transport send call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningNotice {
    pub body: String,
}

/// Compose the transient warning posted after a violating message is removed.
///
/// `display_name` is inserted verbatim — escaping for the chat protocol's
/// markup is the transport's job. An empty name yields an empty placeholder,
/// never an error. Deterministic: same input, same body.
pub fn compose_warning(display_name: &str) -> WarningNotice {
    WarningNotice {
        body: format!(
            "⚠️ *{display_name}*, your message was removed for violating the group rules."
        ),
    }
}
