//! Parser configuration

use serde::{Deserialize, Serialize};

/// Default limit on plan nesting depth
///
/// Real plans rarely nest beyond a few dozen levels. The JSON parsers also
/// hit `serde_json`'s 128-level decoding limit at roughly this many plan
/// levels, which is reported as the same depth failure.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options shared by every engine parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum number of nested plan levels, the root being level 1
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns true if a node at `depth` (1-based) is within the limit
    pub(crate) fn allows(&self, depth: usize) -> bool {
        depth <= self.max_depth
    }
}
