use regex::Regex;
use std::fmt;
use std::sync::Arc;

use super::RouteError;

/// One compiled segment of a path pattern.
#[derive(Debug, Clone)]
pub enum Segment {
    /// Literal text, matched verbatim after percent-decoding
    Static(Arc<str>),
    /// Named parameter capturing exactly one segment
    Param {
        /// Capture key for the matched value
        name: Arc<str>,
        /// Anchored constraint compiled from `{name:REGEX}`; `None` accepts any
        /// non-empty segment
        constraint: Option<Regex>,
    },
}

/// A compiled path pattern.
///
/// Splits a declared path like `/students/{id:[0-9]+}` into matchable segments and
/// precomputes the structural key used for collision detection. Compilation happens
/// once at table-construction time; matching and reverse routing reuse the compiled
/// form.
///
/// # Example
///
/// ```
/// use wayfinder::route::PathPattern;
///
/// let pattern = PathPattern::compile("/students/{id}").unwrap();
/// assert!(pattern.is_dynamic());
/// assert_eq!(pattern.interpolate(&[("id", "42")]).unwrap(), "/students/42");
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    param_names: Vec<Arc<str>>,
    structural_key: String,
}

impl PathPattern {
    /// Compile a declared path into a pattern.
    ///
    /// The path must be absolute. Empty segments are dropped, so `/about/` and
    /// `/about` compile to the same structure. A segment of the form `{name}`
    /// declares a parameter; `{name:REGEX}` additionally constrains the values the
    /// parameter accepts (the regex is anchored to the whole segment). Anything
    /// else is literal text.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::RelativePath`] when the path lacks a leading `/`, and
    /// [`RouteError::InvalidPattern`] for empty or repeated parameter names and for
    /// constraints that fail to compile.
    pub fn compile(path: &str) -> Result<Self, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::RelativePath {
                path: path.to_string(),
            });
        }

        let mut segments = Vec::new();
        let mut param_names: Vec<Arc<str>> = Vec::new();
        for seg in path.split('/').filter(|s| !s.is_empty()) {
            segments.push(parse_segment(seg, path, &mut param_names)?);
        }

        let structural_key = structural_key_of(&segments);
        Ok(Self {
            raw: path.to_string(),
            segments,
            param_names,
            structural_key,
        })
    }

    /// The path exactly as declared.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Compiled segments in declaration order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in the order they appear in the path.
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    /// Whether the pattern captures any parameters.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        !self.param_names.is_empty()
    }

    /// Collision key: two patterns with equal keys match the same set of paths.
    ///
    /// Parameter names are erased (`{id}` and `{slug}` collide) but constraint
    /// sources are kept, so differently-constrained params stay distinct.
    #[must_use]
    pub(crate) fn structural_key(&self) -> &str {
        &self.structural_key
    }

    /// Build a concrete path by substituting parameter values.
    ///
    /// Values are percent-encoded into their segment. When the same key is
    /// supplied more than once the last value wins, matching lookup order on the
    /// capture side. Values are not checked against constraints.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingParam`] when a declared parameter has no
    /// supplied value.
    pub fn interpolate(&self, params: &[(&str, &str)]) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::with_capacity(self.raw.len() + 16);
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(text) => out.push_str(text),
                Segment::Param { name, .. } => {
                    let value = params
                        .iter()
                        .rev()
                        .find(|(key, _)| *key == name.as_ref())
                        .map(|(_, value)| *value);
                    match value {
                        Some(value) => out.push_str(&urlencoding::encode(value)),
                        None => {
                            return Err(RouteError::MissingParam {
                                path: self.raw.clone(),
                                param: name.to_string(),
                            })
                        }
                    }
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segment(
    seg: &str,
    path: &str,
    param_names: &mut Vec<Arc<str>>,
) -> Result<Segment, RouteError> {
    // Only a segment that is exactly `{...}` declares a parameter; stray braces
    // stay literal.
    let Some(inner) = seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
        return Ok(Segment::Static(Arc::from(seg)));
    };

    let (name, constraint_src) = match inner.split_once(':') {
        Some((name, src)) => (name, Some(src)),
        None => (inner, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(RouteError::InvalidPattern {
            path: path.to_string(),
            reason: format!("parameter name '{name}' must be a non-empty alphanumeric identifier"),
        });
    }
    if param_names.iter().any(|n| n.as_ref() == name) {
        return Err(RouteError::InvalidPattern {
            path: path.to_string(),
            reason: format!("parameter '{name}' appears more than once"),
        });
    }

    let constraint = match constraint_src {
        Some(src) => {
            // Anchor the constraint so it must cover the whole segment.
            let compiled =
                Regex::new(&format!("^(?:{src})$")).map_err(|err| RouteError::InvalidPattern {
                    path: path.to_string(),
                    reason: format!("constraint for '{name}' is not a valid regex: {err}"),
                })?;
            Some(compiled)
        }
        None => None,
    };

    let name: Arc<str> = Arc::from(name);
    param_names.push(Arc::clone(&name));
    Ok(Segment::Param { name, constraint })
}

fn structural_key_of(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut key = String::new();
    for segment in segments {
        key.push('/');
        match segment {
            Segment::Static(text) => key.push_str(text),
            Segment::Param {
                constraint: None, ..
            } => key.push_str("{}"),
            Segment::Param {
                constraint: Some(re),
                ..
            } => {
                key.push_str("{:");
                key.push_str(re.as_str());
                key.push('}');
            }
        }
    }
    key
}
