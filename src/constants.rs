// Constants for the syntax checker

/// Default maximum number of nested expressions (parentheses and call
/// arguments both count one level each)
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Upper bound on any configured nesting limit. Every level costs a few
/// parser frames, and this many fit in a 2 MiB thread stack even in debug
/// builds.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Number of input bytes quoted in a diagnostic
pub const SNIPPET_LEN: usize = 10;

/// Capacity of the diagnostic message buffer, terminator included.
/// At most `MESSAGE_CAPACITY - 1` bytes are visible.
pub const MESSAGE_CAPACITY: usize = 100;

/// Parser limits supplied when an [`Engine`](crate::engine::Engine) is created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_depth: usize,
}

impl Limits {
    /// Requested depths above [`MAX_DEPTH_LIMIT`] are clamped to it
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.min(MAX_DEPTH_LIMIT),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
