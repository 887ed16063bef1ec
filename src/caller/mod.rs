//! Attribute a failure to user code by walking a filtered window of the stack

mod source;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;

pub use source::{CurrentStack, FrameSource, RawFrame};

/// Marker files for compiler-generated frames
pub const SYNTHETIC_FILES: &[&str] = &["<autogenerated>"];

/// libtest functions that dispatch into test bodies
///
/// Matched against the function path with generic arguments and closure
/// segments removed, so `test::run_test::{closure#1}` matches `test::run_test`.
/// Functions nested inside one of these match too.
pub const TEST_RUNNER_FUNCTIONS: &[&str] = &[
    "test::run_test",
    "test::run_test_in_process",
    "test::__rust_begin_short_backtrace",
    "test::types::RunnableTest::run",
    "test::run_tests",
    "test::console::run_tests_console",
    "test::test_main",
    "test::test_main_static",
];

/// This crate's own namespace
pub const LIBRARY_NAMESPACES: &[&str] = &[concat!(env!("CARGO_CRATE_NAME"), "::")];

/// Standard library and runtime entry points, e.g. `core::ops::function::FnOnce::call_once`
pub const RUNTIME_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "backtrace::",
    "<std::",
    "<core::",
    "<alloc::",
    "__rust",
    "__libc_start",
    "_start",
];

/// Self types of runtime trait shims, e.g. `<fn() as core::ops::function::FnOnce<()>>::call_once`
pub const RUNTIME_SHIM_TYPES: &[&str] = &["fn(", "unsafe fn(", "extern \""];

/// A user-code location on the stack at failure time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallerFrame {
    pub file: PathBuf,
    pub line: u32,
}

impl CallerFrame {
    /// `path:line`, with either the full path or only the file name
    pub fn display(&self, show_full_path: bool) -> String {
        let path = if show_full_path {
            self.file.as_path()
        } else {
            self.file
                .file_name()
                .map(Path::new)
                .unwrap_or(self.file.as_path())
        };
        format!("{}:{}", path.display(), self.line)
    }
}

impl fmt::Display for CallerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(true))
    }
}

/// Why a frame was left out of the caller chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No function name could be resolved
    Unresolved,
    /// Generated code or no source file
    Synthetic,
    /// The test harness dispatching into the test
    TestRunner,
    /// Inside this crate
    Library,
    /// Inside std or the runtime
    Runtime,
}

/// Exclusion rules applied to each candidate frame
#[derive(Debug, Clone)]
pub struct FrameFilter {
    /// Exact file names marking generated frames
    pub synthetic_files: Vec<String>,
    /// Test dispatcher paths, compared without generics or closure segments
    pub runner_functions: Vec<String>,
    /// Substrings identifying the assertion library
    pub library_namespaces: Vec<String>,
    /// Function name prefixes of runtime internals
    pub runtime_prefixes: Vec<String>,
    /// Self types whose runtime trait impls are treated as runtime internals
    pub runtime_shim_types: Vec<String>,
}

impl Default for FrameFilter {
    fn default() -> Self {
        Self {
            synthetic_files: to_owned(SYNTHETIC_FILES),
            runner_functions: to_owned(TEST_RUNNER_FUNCTIONS),
            library_namespaces: to_owned(LIBRARY_NAMESPACES),
            runtime_prefixes: to_owned(RUNTIME_PREFIXES),
            runtime_shim_types: to_owned(RUNTIME_SHIM_TYPES),
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl FrameFilter {
    /// Add another namespace to treat as library-internal
    pub fn with_library_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.library_namespaces.push(namespace.into());
        self
    }

    /// The first rule that excludes `frame`, or `None` if it is user code
    pub fn skip_reason(&self, frame: &RawFrame) -> Option<SkipReason> {
        let Some(function) = frame.function.as_deref() else {
            return Some(SkipReason::Unresolved);
        };

        let Some(file) = frame.file.as_deref() else {
            return Some(SkipReason::Synthetic);
        };
        if self.synthetic_files.iter().any(|s| file == Path::new(s)) {
            return Some(SkipReason::Synthetic);
        }
        if frame.line.is_none() {
            return Some(SkipReason::Unresolved);
        }

        let path = base_path(function);
        if self.runner_functions.iter().any(|s| is_within(&path, s)) {
            return Some(SkipReason::TestRunner);
        }
        if self.library_namespaces.iter().any(|s| function.contains(s.as_str())) {
            return Some(SkipReason::Library);
        }

        if self.runtime_prefixes.iter().any(|s| function.starts_with(s.as_str())) {
            return Some(SkipReason::Runtime);
        }
        if let Some((self_type, trait_path)) = impl_parts(function)
            && self.runtime_shim_types.iter().any(|s| self_type.starts_with(s.as_str()))
            && self.runtime_prefixes.iter().any(|s| trait_path.starts_with(s.as_str()))
        {
            return Some(SkipReason::Runtime);
        }

        None
    }
}

/// Function path without generic arguments or trailing closure/shim segments
///
/// `test::__rust_begin_short_backtrace::<fn() -> ()>` and
/// `test::run_test::{closure#0}` reduce to their plain paths.
fn base_path(function: &str) -> String {
    let mut out = String::with_capacity(function.len());
    let mut depth = 0_usize;
    let mut prev = '\0';

    for c in function.chars() {
        match c {
            '<' if depth > 0 => depth += 1,
            '<' if out.ends_with("::") => {
                out.truncate(out.len() - 2);
                depth = 1;
            }
            // `->` in fn signatures
            '>' if prev == '-' && depth > 0 => {}
            '>' if depth > 0 => depth -= 1,
            _ if depth > 0 => {}
            _ => out.push(c),
        }
        prev = c;
    }

    let mut path = out.as_str();
    while let Some((head, last)) = path.rsplit_once("::")
        && last.starts_with('{')
    {
        path = head;
    }
    path.to_string()
}

/// `path` is `function` or an item nested inside it
fn is_within(path: &str, function: &str) -> bool {
    path.strip_prefix(function)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

/// Split `<Self as Trait>::method` into its self type and trait path
fn impl_parts(function: &str) -> Option<(&str, &str)> {
    let inner = function.strip_prefix('<')?;
    let mut depth = 0_usize;
    let mut prev = '\0';
    let mut as_at = None;

    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' if prev == '-' => {}
            '>' if depth == 0 => {
                let at = as_at?;
                return Some((&inner[..at], &inner[at + " as ".len()..i]));
            }
            '>' => depth -= 1,
            ' ' if depth == 0 && as_at.is_none() && inner[i..].starts_with(" as ") => {
                as_at = Some(i);
            }
            _ => {}
        }
        prev = c;
    }

    None
}

/// Walk `config.caller_depth` frames after `config.caller_skip`, keeping user frames
///
/// Filtered frames still count against the window. The result is
/// innermost first and may be empty.
pub fn collect_frames(
    source: &dyn FrameSource,
    filter: &FrameFilter,
    config: &Config,
) -> Vec<CallerFrame> {
    let mut callers = Vec::with_capacity(config.caller_depth);

    for frame in source
        .frames()
        .skip(config.caller_skip)
        .take(config.caller_depth)
    {
        if let Some(reason) = filter.skip_reason(&frame) {
            tracing::trace!(function = ?frame.function, ?reason, "skipping stack frame");
            continue;
        }

        // skip_reason guarantees a file and line
        if let (Some(file), Some(line)) = (frame.file, frame.line) {
            callers.push(CallerFrame { file, line });
        }
    }

    tracing::debug!(count = callers.len(), "collected caller frames");
    callers
}

/// Caller frames rendered as `path:line` per `config.show_full_path`
pub fn collect_callers(
    source: &dyn FrameSource,
    filter: &FrameFilter,
    config: &Config,
) -> Vec<String> {
    collect_frames(source, filter, config)
        .iter()
        .map(|frame| frame.display(config.show_full_path))
        .collect()
}

/// Caller chain of the current thread with the default filter
///
/// The skip window starts at this function, so the default skip of 2
/// drops it and the library function that called it.
#[inline(never)]
pub fn caller_infos(config: &Config) -> Vec<String> {
    let stack = CurrentStack::capture();
    collect_callers(&stack, &FrameFilter::default(), config)
}
