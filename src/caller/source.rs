use std::path::PathBuf;

/// One unfiltered stack frame, as much of it as could be resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFrame {
    /// Demangled function name without the trailing hash
    pub function: Option<String>,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl RawFrame {
    pub fn new(function: &str, file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            function: Some(function.to_string()),
            file: Some(file.into()),
            line: Some(line),
        }
    }
}

/// Anything that can produce stack frames, innermost first
pub trait FrameSource {
    fn frames(&self) -> Box<dyn Iterator<Item = RawFrame> + '_>;
}

impl FrameSource for [RawFrame] {
    fn frames(&self) -> Box<dyn Iterator<Item = RawFrame> + '_> {
        Box::new(self.iter().cloned())
    }
}

impl FrameSource for Vec<RawFrame> {
    fn frames(&self) -> Box<dyn Iterator<Item = RawFrame> + '_> {
        self.as_slice().frames()
    }
}

/// The calling thread's stack, captured unresolved
///
/// Symbols are resolved one frame at a time while iterating, so callers
/// that stop early never pay for the rest of the stack.
pub struct CurrentStack {
    frames: Vec<backtrace::Frame>,
}

impl CurrentStack {
    /// Capture the stack of the caller of this function
    #[inline(never)]
    pub fn capture() -> Self {
        let mut frames = Vec::new();
        backtrace::trace(|frame| {
            frames.push(frame.clone());
            true
        });
        Self { frames }
    }
}

impl FrameSource for CurrentStack {
    fn frames(&self) -> Box<dyn Iterator<Item = RawFrame> + '_> {
        Box::new(
            self.frames
                .iter()
                .flat_map(resolve)
                .skip_while(is_unwinder_frame),
        )
    }
}

/// Resolve one physical frame into its (possibly inlined) logical frames
fn resolve(frame: &backtrace::Frame) -> Vec<RawFrame> {
    let mut resolved = Vec::new();
    backtrace::resolve_frame(frame, |symbol| {
        resolved.push(RawFrame {
            function: symbol.name().map(|name| format!("{:#}", name)),
            file: symbol.filename().map(PathBuf::from),
            line: symbol.lineno(),
        });
    });

    if resolved.is_empty() {
        resolved.push(RawFrame::default());
    }
    resolved
}

/// Frames of the unwinder and of the capture itself
fn is_unwinder_frame(frame: &RawFrame) -> bool {
    frame.function.as_deref().is_none_or(|name| {
        name.starts_with("backtrace::")
            || name.starts_with("_Unwind")
            || name.contains("CurrentStack")
    })
}
