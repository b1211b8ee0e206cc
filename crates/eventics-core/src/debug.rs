//! Debug mirror for dispatched events.
//!
//! A process-wide toggle, set once during startup configuration and read on
//! every dispatch. When enabled, every successfully dispatched event is
//! mirrored to the diagnostic channel as the event name followed by each
//! normalized property, bounded by visual separators. The mirror is a
//! side-channel, not part of the delivery guarantee.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::properties::NormalizedProperties;

/// Environment variable read by [`DebugMode::init_from_env`].
pub const DEBUG_ENV: &str = "EVENTICS_DEBUG";

// The single process-wide flag. Writes happen rarely (startup); reads happen
// on every dispatch. Relaxed ordering is sufficient for a lone boolean.
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

const SEPARATOR_WIDTH: usize = 50;

/// Handle over the process-wide debug flag.
///
/// The flag behaves as a singleton toggle, but all access goes through this
/// type so the lifecycle stays explicit: configure once at startup, read at
/// dispatch time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugMode;

impl DebugMode {
    /// Enables or disables the debug mirror.
    pub fn set(enabled: bool) {
        DEBUG_MODE.store(enabled, Ordering::Relaxed);
    }

    /// Returns true if the debug mirror is enabled.
    pub fn is_enabled() -> bool {
        DEBUG_MODE.load(Ordering::Relaxed)
    }

    /// Initializes the flag from the `EVENTICS_DEBUG` environment variable.
    ///
    /// `1`, `true`, and `yes` (case-insensitive) enable the mirror; any
    /// other value, or an unset variable, disables it.
    pub fn init_from_env() {
        let enabled = std::env::var(DEBUG_ENV)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self::set(enabled);
    }
}

/// Enables or disables debug mode for event logging, process-wide.
///
/// Independent of any manager instance; typically called once at startup.
pub fn enable_debug_mode(enabled: bool) {
    DebugMode::set(enabled);
}

/// Mirrors a successfully dispatched event to the diagnostic channel.
///
/// No-op unless debug mode is enabled.
pub(crate) fn mirror_event(event_name: &str, properties: &NormalizedProperties) {
    if !DebugMode::is_enabled() {
        return;
    }
    for line in render_event(event_name, properties) {
        debug!(target: "eventics", "{}", line);
    }
}

/// Renders the diagnostic block for an event: the event name and each
/// property as a `[key: value]` line, in insertion order, bounded by
/// separators. Pure so the format is testable.
pub(crate) fn render_event(event_name: &str, properties: &NormalizedProperties) -> Vec<String> {
    let separator = "*".repeat(SEPARATOR_WIDTH);
    let mut lines = Vec::with_capacity(properties.len() + 4);

    lines.push(separator.clone());
    lines.push(format!("Event Name: {}", event_name));
    lines.push("Properties:".to_string());
    for (key, value) in properties.iter() {
        lines.push(format!("[{}: {}]", key, value));
    }
    lines.push(separator);

    lines
}
