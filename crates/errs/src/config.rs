//! Process-wide stack trace configuration.
//!
//! Three settings decide what happens when an [`Error`](crate::Error) is
//! constructed:
//!
//! | Setting      | Default | Effect                                            |
//! |--------------|---------|---------------------------------------------------|
//! | `traceable`  | `false` | capture the call stack at construction            |
//! | `stack_skip` | `0`     | caller frames dropped after this crate's frames   |
//! | `content`    | none    | only frames whose text contains it are rendered   |
//!
//! # Startup only
//!
//! The settings are plain relaxed atomics. Set them once during
//! single-threaded startup, before errors are built concurrently. A change
//! made while other threads construct errors is not ordered with respect to
//! those constructions; which setting a racing construction observes is
//! unspecified. Errors already built are never affected: the skip count and
//! filter are copied into each captured [`StackTrace`](crate::StackTrace).
//!
//! # Environment
//!
//! [`init_from_env`] applies these overrides on top of the defaults:
//!
//! - `ERRS_TRACEABLE` - enable capture (1/true/yes/on)
//! - `ERRS_STACK_SKIP` - caller frames to skip
//! - `ERRS_TRACE_CONTENT` - frame filter; setting it also enables capture

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{debug, info};

use crate::env::{env_get, env_get_bool, env_get_opt};

pub const DEFAULT_STACK_SKIP: usize = 0;

static TRACEABLE: AtomicBool = AtomicBool::new(false);
static STACK_SKIP: AtomicUsize = AtomicUsize::new(DEFAULT_STACK_SKIP);
static CONTENT: ArcSwapOption<String> = ArcSwapOption::const_empty();

/// Enable or disable stack capture for subsequently constructed errors.
pub fn set_traceable(traceable: bool) {
    TRACEABLE.store(traceable, Ordering::Relaxed);
    debug!(traceable, "error stack capture toggled");
}

/// Set how many caller frames to drop below this crate's own frames.
pub fn set_stack_skip(skip: usize) {
    STACK_SKIP.store(skip, Ordering::Relaxed);
    debug!(stack_skip = skip, "error stack skip updated");
}

/// Enable stack capture and keep only frames whose function or file
/// contains `content`. An empty string removes the filter.
pub fn set_traceable_with_content(content: impl Into<String>) {
    let content = content.into();
    TRACEABLE.store(true, Ordering::Relaxed);
    debug!(content = %content, "error stack capture enabled with content filter");
    if content.is_empty() {
        CONTENT.store(None);
    } else {
        CONTENT.store(Some(Arc::new(content)));
    }
}

#[inline]
pub fn traceable() -> bool {
    TRACEABLE.load(Ordering::Relaxed)
}

#[inline]
pub fn stack_skip() -> usize {
    STACK_SKIP.load(Ordering::Relaxed)
}

/// The active content filter, if any.
pub fn content() -> Option<Arc<String>> {
    CONTENT.load_full()
}

/// Snapshot of the trace settings.
///
/// ```
/// use errs::config::TraceConfig;
///
/// let cfg = TraceConfig {
///     traceable: true,
///     stack_skip: 1,
///     content: Some("my_service".to_string()),
/// };
/// cfg.apply();
/// assert_eq!(TraceConfig::current(), cfg);
/// # TraceConfig::default().apply();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TraceConfig {
    pub traceable: bool,
    pub stack_skip: usize,
    pub content: Option<String>,
}

impl TraceConfig {
    /// Read the settings currently in effect.
    pub fn current() -> Self {
        Self {
            traceable: traceable(),
            stack_skip: stack_skip(),
            content: content().map(|c| c.as_ref().clone()),
        }
    }

    /// Defaults with environment overrides. See the module docs for the
    /// variable names.
    pub fn from_env() -> Self {
        let content = env_get_opt::<String>("ERRS_TRACE_CONTENT").filter(|c| !c.is_empty());
        Self {
            traceable: env_get_bool("ERRS_TRACEABLE", false) || content.is_some(),
            stack_skip: env_get("ERRS_STACK_SKIP", DEFAULT_STACK_SKIP),
            content,
        }
    }

    /// Install these settings process-wide.
    pub fn apply(&self) {
        STACK_SKIP.store(self.stack_skip, Ordering::Relaxed);
        CONTENT.store(self.content.clone().filter(|c| !c.is_empty()).map(Arc::new));
        TRACEABLE.store(self.traceable, Ordering::Relaxed);
        debug!(
            traceable = self.traceable,
            stack_skip = self.stack_skip,
            content = ?self.content,
            "error trace configuration applied"
        );
    }
}

/// Load [`TraceConfig::from_env`] and apply it. Returns what was applied.
pub fn init_from_env() -> TraceConfig {
    let cfg = TraceConfig::from_env();
    cfg.apply();
    info!(
        traceable = cfg.traceable,
        stack_skip = cfg.stack_skip,
        content = ?cfg.content,
        "error trace configuration loaded from environment"
    );
    cfg
}
