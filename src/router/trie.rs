//! Segment tree for efficient route matching
//!
//! This module provides the tree the router walks to match paths in O(k) where
//! k is the number of path segments, independent of how many routes the table
//! holds.
//!
//! ## Key Properties
//!
//! - **O(k) Lookup**: Matching time is proportional to path length, not table size
//! - **Memory Efficient**: Shared prefixes (e.g., `/students/`) are stored only once
//! - **Deterministic**: Literal segments always win over parameters, and parameter
//!   candidates are tried in table declaration order
//! - **Minimal Allocations**: Segment text and parameter names are `Arc<str>`
//!   shared with the compiled patterns
//!
//! ## Implementation Details
//!
//! The tree is built by splitting each compiled pattern into segments:
//! - Each node represents one path segment
//! - Static segments (e.g., `students`) match exactly, after percent-decoding
//! - Parameter segments (e.g., `{id}`) match any value their constraint accepts
//! - A route sits at the terminal node of its pattern
//!
//! Search tries static children first at every depth and backtracks into
//! parameter children when a static branch dead-ends, so `/users/admin/profile`
//! still reaches `/users/{id}/profile` when the static `admin` subtree has no
//! `profile` leaf.

use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

use super::core::ParamVec;
use crate::route::{PathPattern, Route, Segment};

/// Node in the segment tree
///
/// Each node represents one segment of a route pattern and owns the children
/// for the segments beneath it. Static and parameter children are kept apart
/// so precedence is structural, not a property of insertion order.
#[derive(Clone)]
struct TrieNode {
    /// The literal segment this node matches (empty for the root and for
    /// parameter nodes)
    segment: Arc<str>,
    /// Route terminating at this node, if any
    route: Option<Arc<Route>>,
    /// Capture name when this node is a parameter (e.g., `{id}` → `Some("id")`)
    param_name: Option<Arc<str>>,
    /// Anchored constraint a segment must satisfy to take this branch
    constraint: Option<Regex>,
    /// Literal children, tried first
    children: Vec<TrieNode>,
    /// Parameter children, tried in insertion order when no literal matches.
    /// Multiple children at the same position are possible when routes declare
    /// different names or constraints there (e.g., `/users/{id}/posts` vs
    /// `/users/{user_id}/comments`).
    param_children: Vec<TrieNode>,
}

impl TrieNode {
    fn new(segment: Arc<str>) -> Self {
        Self {
            segment,
            route: None,
            param_name: None,
            constraint: None,
            children: Vec::new(),
            param_children: Vec::new(),
        }
    }

    fn new_param(param_name: Arc<str>, constraint: Option<Regex>) -> Self {
        Self {
            segment: Arc::from(""),
            route: None,
            param_name: Some(param_name),
            constraint,
            children: Vec::new(),
            param_children: Vec::new(),
        }
    }

    /// Insert a route at the node its segments lead to.
    fn insert(&mut self, segments: &[Segment], route: Arc<Route>) {
        let Some((first, remaining)) = segments.split_first() else {
            // Table validation guarantees at most one route per structure.
            self.route = Some(route);
            return;
        };

        match first {
            Segment::Static(text) => {
                for child in &mut self.children {
                    if child.segment.as_ref() == text.as_ref() {
                        child.insert(remaining, route);
                        return;
                    }
                }
                let mut new_child = TrieNode::new(Arc::clone(text));
                new_child.insert(remaining, route);
                self.children.push(new_child);
            }
            Segment::Param { name, constraint } => {
                // Reuse a parameter child only when both the name and the
                // constraint source agree; otherwise keep a separate child so
                // declaration order decides which is tried first.
                for param_child in &mut self.param_children {
                    if param_child.param_name.as_deref() == Some(name.as_ref())
                        && constraint_src(param_child.constraint.as_ref())
                            == constraint_src(constraint.as_ref())
                    {
                        param_child.insert(remaining, route);
                        return;
                    }
                }
                let mut new_child = TrieNode::new_param(Arc::clone(name), constraint.clone());
                new_child.insert(remaining, route);
                self.param_children.push(new_child);
            }
        }
    }

    /// Search for a route matching the decoded segments.
    fn search(&self, segments: &[Cow<'_, str>], params: &mut ParamVec) -> Option<Arc<Route>> {
        let Some((segment, remaining)) = segments.split_first() else {
            return self.route.clone();
        };
        let segment_str: &str = segment.as_ref();

        // Literal children win over parameters at every depth.
        for child in &self.children {
            if child.segment.as_ref() == segment_str {
                if let Some(route) = child.search(remaining, params) {
                    return Some(route);
                }
            }
        }

        // Parameter children in declaration order; constraints filter candidates.
        for param_child in &self.param_children {
            if let Some(ref param_name) = param_child.param_name {
                if let Some(ref constraint) = param_child.constraint {
                    if !constraint.is_match(segment_str) {
                        continue;
                    }
                }
                let checkpoint = params.len();
                params.push((Arc::clone(param_name), segment_str.to_string()));
                if let Some(route) = param_child.search(remaining, params) {
                    return Some(route);
                }
                // Backtrack: drop captures from the failed branch
                params.truncate(checkpoint);
            }
        }

        None
    }
}

fn constraint_src(constraint: Option<&Regex>) -> Option<&str> {
    constraint.map(Regex::as_str)
}

/// Segment tree over the compiled patterns of a route table.
///
/// # Performance
///
/// - Insertion: O(k) where k is the pattern's segment count
/// - Lookup: O(k) with bounded backtracking into parameter branches
/// - Memory: O(total segment characters) with shared prefixes stored once
#[derive(Clone)]
pub(super) struct Trie {
    root: TrieNode,
}

impl Trie {
    pub(super) fn new() -> Self {
        Self {
            root: TrieNode::new(Arc::from("")),
        }
    }

    /// Insert a compiled pattern and the route it belongs to.
    pub(super) fn insert(&mut self, pattern: &PathPattern, route: Arc<Route>) {
        self.root.insert(pattern.segments(), route);
    }

    /// Match a concrete path, returning the route and captured parameters.
    ///
    /// Splits the path into segments, percent-decodes each, and walks the
    /// tree. Empty segments are dropped, so `/about/` matches `/about`.
    pub(super) fn find(&self, path: &str) -> Option<(Arc<Route>, ParamVec)> {
        let segments: Vec<Cow<'_, str>> = path
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode_segment)
            .collect();

        let mut params = ParamVec::new();
        let route = self.root.search(&segments, &mut params)?;
        Some((route, params))
    }
}

/// Percent-decode one path segment, falling back to the raw text when the
/// encoded bytes are not valid UTF-8.
fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}
