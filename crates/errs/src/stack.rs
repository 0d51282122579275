//! Call-stack capture for errors.
//!
//! Capture only records instruction pointers. Symbols are resolved the first
//! time a trace is inspected or rendered and cached from then on, so errors
//! that are never printed verbosely pay for the walk and nothing else.
//!
//! Frame selection, innermost first:
//!
//! ```text
//! unwinder + errs frames    dropped (everything up to the last errs frame)
//! stack_skip caller frames  dropped
//! next MAX_DEPTH frames     kept, in call order
//! content filter            applied when rendering
//! ```

use core::fmt;
use std::sync::{Arc, OnceLock};

use crate::config;

/// Maximum number of caller frames kept per trace.
pub const MAX_DEPTH: usize = 32;

/// Headroom for unwinder and crate frames walked before the caller's.
const INTERNAL_FRAMES: usize = 24;

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");
const CRATE_GENERIC_PREFIX: &str = concat!("<", env!("CARGO_CRATE_NAME"), "::");
const CRATE_TRAIT_INFIX: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::");

/// One resolved call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    function: String,
    file: Option<String>,
    line: Option<u32>,
}

impl Frame {
    pub fn new(function: impl Into<String>, file: Option<String>, line: Option<u32>) -> Self {
        Self {
            function: function.into(),
            file,
            line,
        }
    }

    /// Demangled function path, without the hash suffix.
    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    /// True if the function path or the file name contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.function.contains(needle)
            || self.file.as_deref().is_some_and(|file| file.contains(needle))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\t", self.function)?;
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{file}:{line}"),
            (Some(file), None) => f.write_str(file),
            (None, _) => f.write_str("<unknown>"),
        }
    }
}

/// A call stack captured when an error was constructed.
///
/// `Display` writes each retained frame as `"\n<function>\n\t<file>:<line>"`,
/// so it can be appended directly after a one-line error header. A trace
/// filtered down to nothing writes nothing.
pub struct StackTrace {
    ips: Vec<usize>,
    skip: usize,
    filter: Option<Arc<String>>,
    frames: OnceLock<Vec<Frame>>,
}

impl StackTrace {
    /// Walk the current stack, keeping the settings needed to render it later.
    #[cfg(feature = "backtrace")]
    #[inline(never)]
    pub(crate) fn capture(skip: usize, filter: Option<Arc<String>>) -> Self {
        let limit = INTERNAL_FRAMES
            .saturating_add(skip)
            .saturating_add(MAX_DEPTH);
        let mut ips = Vec::with_capacity(limit.min(INTERNAL_FRAMES + MAX_DEPTH));
        backtrace::trace(|frame| {
            // Return addresses point past the call; step back into it.
            ips.push((frame.ip() as usize).saturating_sub(1));
            ips.len() < limit
        });
        Self {
            ips,
            skip,
            filter,
            frames: OnceLock::new(),
        }
    }

    /// Caller frames, innermost first, before the content filter.
    pub fn frames(&self) -> &[Frame] {
        self.frames.get_or_init(|| {
            let resolved = resolve(&self.ips);
            let start = caller_start(&resolved);
            resolved
                .into_iter()
                .skip(start)
                .skip(self.skip)
                .take(MAX_DEPTH)
                .collect()
        })
    }

    /// Frames that survive the content filter, in call order.
    pub fn visible_frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        let filter = self.filter();
        self.frames()
            .iter()
            .filter(move |frame| filter.map_or(true, |needle| frame.contains(needle)))
    }

    /// Content filter captured with this trace.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().map(String::as_str)
    }

    pub fn skip(&self) -> usize {
        self.skip
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.visible_frames() {
            write!(f, "\n{frame}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("StackTrace");
        d.field("depth", &self.ips.len());
        d.field("skip", &self.skip);
        if let Some(filter) = self.filter() {
            d.field("filter", &filter);
        }
        d.finish()
    }
}

/// Capture a trace if the process-wide configuration asks for one.
pub(crate) fn capture() -> Option<StackTrace> {
    if !config::traceable() {
        return None;
    }

    #[cfg(feature = "backtrace")]
    {
        Some(StackTrace::capture(config::stack_skip(), config::content()))
    }
    #[cfg(not(feature = "backtrace"))]
    {
        None
    }
}

/// Index of the first frame after the last frame owned by this crate,
/// looking no further than `INTERNAL_FRAMES` past the first one. Everything
/// before it is unwinder or constructor machinery, including std adapters
/// such as `Option::map` called between two of our frames.
fn caller_start(frames: &[Frame]) -> usize {
    let Some(first) = frames.iter().position(|f| is_own(f.function())) else {
        return 0;
    };
    let end = frames.len().min(first + INTERNAL_FRAMES);
    frames[first..end]
        .iter()
        .rposition(|f| is_own(f.function()))
        .map_or(first, |last| first + last + 1)
}

fn is_own(function: &str) -> bool {
    function.starts_with(CRATE_PREFIX)
        || function.starts_with(CRATE_GENERIC_PREFIX)
        || function.contains(CRATE_TRAIT_INFIX)
}

#[cfg(feature = "backtrace")]
fn resolve(ips: &[usize]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(ips.len());
    for &ip in ips {
        let before = frames.len();
        // Inlined calls resolve to several symbols for one address,
        // innermost first.
        backtrace::resolve(ip as *mut std::ffi::c_void, |symbol| {
            let function = match symbol.name() {
                Some(name) => format!("{name:#}"),
                None => format!("{ip:#x}"),
            };
            frames.push(Frame {
                function,
                file: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        });
        if frames.len() == before {
            frames.push(Frame::new(format!("{ip:#x}"), None, None));
        }
    }
    frames
}

#[cfg(not(feature = "backtrace"))]
fn resolve(_ips: &[usize]) -> Vec<Frame> {
    Vec::new()
}
