//! Page qualification by URL path.
//!
//! Paths are split on `/`, so for `/owner/repo/issues/12` segment 0 is the
//! empty string before the leading slash and segment 3 is `issues`.

use serde::Deserialize;
use smol_str::SmolStr;

/// One path segment that must equal `value`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SegmentRule {
    pub index: usize,
    pub value: SmolStr,
}

impl SegmentRule {
    pub fn new(index: usize, value: impl Into<SmolStr>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }

    fn matches(&self, segments: &[&str]) -> bool {
        segments.get(self.index) == Some(&self.value.as_str())
    }
}

/// A page kind the enhancement runs on: all rules must match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageTarget {
    pub segments: Vec<SegmentRule>,
}

impl PageTarget {
    /// A target matching a single segment.
    pub fn segment(index: usize, value: impl Into<SmolStr>) -> Self {
        Self {
            segments: vec![SegmentRule::new(index, value)],
        }
    }

    fn matches(&self, segments: &[&str]) -> bool {
        self.segments.iter().all(|rule| rule.matches(segments))
    }
}

/// Segment holding the repository sub-page kind (`/owner/repo/<kind>`).
pub const REPO_PAGE_SEGMENT: usize = 3;

/// Repository sub-pages with markdown text areas.
pub fn default_targets() -> Vec<PageTarget> {
    ["wiki", "issues", "compare", "pull"]
        .into_iter()
        .map(|kind| PageTarget::segment(REPO_PAGE_SEGMENT, kind))
        .collect()
}

/// Decides whether a path is one the enhancement should be active on.
#[derive(Debug, Clone)]
pub struct PageMatcher {
    targets: Vec<PageTarget>,
}

impl Default for PageMatcher {
    fn default() -> Self {
        Self::new(default_targets())
    }
}

impl PageMatcher {
    pub fn new(targets: Vec<PageTarget>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[PageTarget] {
        &self.targets
    }

    /// True if any target matches `path`.
    pub fn is_target_page(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').collect();
        self.targets.iter().any(|t| t.matches(&segments))
    }
}

/// True on a pull request page (`/owner/repo/pull/...`).
pub fn is_pull_request_conversation_page(path: &str) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    segments.len() > REPO_PAGE_SEGMENT && segments[REPO_PAGE_SEGMENT] == "pull"
}
