//! Path grammar validation.
//!
//! An absolute path is either `/` or a sequence of `/`-separated segments.
//! Each segment is a local name, optionally namespace-qualified
//! (`prefix:name`), optionally followed by a positive index (`name[2]`) that
//! disambiguates same-name siblings.

use crate::error::{Error, InvalidPathReason, Result};

/// How a path is going to be used.
///
/// Indices are read-only disambiguators: a path that names a write target
/// must not carry one on any segment.
///
/// # Examples
///
/// ```
/// use arbor::path::{is_valid_absolute_path, PathRole};
///
/// assert!(is_valid_absolute_path("/parent/child[7]", PathRole::Lookup));
/// assert!(!is_valid_absolute_path("/parent/child[7]", PathRole::Destination));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathRole {
    /// The path addresses an existing item.
    #[default]
    Lookup,
    /// The path denotes a write target (create, move or copy destination).
    Destination,
}

/// A single parsed path segment.
///
/// # Examples
///
/// ```
/// use arbor::path::Segment;
///
/// let segment = Segment::parse("jcr:content[2]").unwrap();
/// assert_eq!(segment.name, "jcr:content");
/// assert_eq!(segment.prefix, Some("jcr"));
/// assert_eq!(segment.local, "content");
/// assert_eq!(segment.index, Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The full name without the index suffix, prefix included.
    pub name: &'a str,
    /// The namespace prefix, if the name is namespace-qualified.
    pub prefix: Option<&'a str>,
    /// The name with the namespace prefix removed.
    pub local: &'a str,
    /// The same-name sibling index, if present.
    pub index: Option<u32>,
}

impl<'a> Segment<'a> {
    /// Parse one segment of an absolute path.
    ///
    /// Navigation segments (`.` and `..`) are rejected; they are only
    /// meaningful to [`normalize_path`](crate::path::normalize_path).
    ///
    /// # Errors
    ///
    /// Returns the violated rule if the segment is empty, reserved, has a
    /// malformed index, or has a name containing brackets.
    pub fn parse(segment: &'a str) -> std::result::Result<Self, InvalidPathReason> {
        if segment.is_empty() {
            return Err(InvalidPathReason::EmptySegment);
        }

        let (name, index) = split_index(segment)?;

        if name == "." || name == ".." {
            return Err(InvalidPathReason::ReservedSegment);
        }
        if name.is_empty() || name.contains(['[', ']']) {
            return Err(InvalidPathReason::InvalidName);
        }

        let (prefix, local) = match name.split_once(':') {
            Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => {
                (Some(prefix), local)
            }
            _ => (None, name),
        };

        Ok(Self {
            name,
            prefix,
            local,
            index,
        })
    }

    /// Whether this segment carries a namespace prefix from `prefixes`.
    #[must_use]
    pub fn has_prefix_in(&self, prefixes: &[String]) -> bool {
        self.prefix
            .is_some_and(|prefix| prefixes.iter().any(|p| p == prefix))
    }
}

fn split_index(segment: &str) -> std::result::Result<(&str, Option<u32>), InvalidPathReason> {
    let Some(body) = segment.strip_suffix(']') else {
        return Ok((segment, None));
    };
    let Some((name, digits)) = body.rsplit_once('[') else {
        return Err(InvalidPathReason::InvalidName);
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidPathReason::MalformedIndex);
    }
    if digits.bytes().all(|b| b == b'0') {
        return Err(InvalidPathReason::MalformedIndex);
    }
    digits
        .parse::<u32>()
        .map(|index| (name, Some(index)))
        .map_err(|_| InvalidPathReason::IndexOutOfRange)
}

/// Check one segment of `path` against the grammar for the given role.
pub(crate) fn check_segment<'a>(path: &str, segment: &'a str, role: PathRole) -> Result<Segment<'a>> {
    let parsed = Segment::parse(segment).map_err(|reason| Error::invalid_path(path, reason))?;
    if role == PathRole::Destination && parsed.index.is_some() {
        return Err(Error::invalid_path(path, InvalidPathReason::IndexNotAllowed));
    }
    Ok(parsed)
}

/// Validate that `path` is a syntactically legal absolute path.
///
/// `/` is always valid. Any other path must consist of non-empty,
/// non-navigation segments with no trailing slash. With
/// [`PathRole::Destination`] no segment may carry an index.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] naming the first rule violated.
///
/// # Examples
///
/// ```
/// use arbor::path::{validate_absolute_path, PathRole};
///
/// assert!(validate_absolute_path("/", PathRole::Lookup).is_ok());
/// assert!(validate_absolute_path("/jcr:foo_/b-a/0^.txt", PathRole::Lookup).is_ok());
/// assert!(validate_absolute_path("/parent[7]/child", PathRole::Lookup).is_ok());
///
/// assert!(validate_absolute_path("parent", PathRole::Lookup).is_err());
/// assert!(validate_absolute_path("/parent//child", PathRole::Lookup).is_err());
/// assert!(validate_absolute_path("/parent/../child", PathRole::Lookup).is_err());
/// assert!(validate_absolute_path("/parent/child/", PathRole::Lookup).is_err());
/// ```
pub fn validate_absolute_path(path: &str, role: PathRole) -> Result<()> {
    let rest = strip_root(path)?;
    if rest.is_empty() {
        return Ok(());
    }
    if rest.ends_with('/') {
        return Err(Error::invalid_path(path, InvalidPathReason::TrailingSlash));
    }

    for segment in rest.split('/') {
        check_segment(path, segment, role)?;
    }
    Ok(())
}

/// Non-failing form of [`validate_absolute_path`].
///
/// # Examples
///
/// ```
/// use arbor::path::{is_valid_absolute_path, PathRole};
///
/// assert!(is_valid_absolute_path("/parent/child", PathRole::Lookup));
/// assert!(!is_valid_absolute_path("parent", PathRole::Lookup));
/// ```
#[must_use]
pub fn is_valid_absolute_path(path: &str, role: PathRole) -> bool {
    validate_absolute_path(path, role).is_ok()
}

/// Validate a local (single-segment) node name.
///
/// The empty string is the root node's name and is accepted. `.`, `..` and
/// any name containing `/` are rejected. Namespace-qualified names such as
/// `jcr:content` are accepted.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the name is reserved or contains `/`.
///
/// # Examples
///
/// ```
/// use arbor::path::validate_local_name;
///
/// assert!(validate_local_name("nodename").is_ok());
/// assert!(validate_local_name("").is_ok());
/// assert!(validate_local_name("jcr:nodename").is_ok());
/// assert!(validate_local_name("..").is_err());
/// assert!(validate_local_name("/path").is_err());
/// ```
pub fn validate_local_name(name: &str) -> Result<()> {
    if name == "." || name == ".." {
        return Err(Error::invalid_path(name, InvalidPathReason::ReservedSegment));
    }
    if name.contains('/') {
        return Err(Error::invalid_path(name, InvalidPathReason::SlashInName));
    }
    Ok(())
}

/// Check a property name: a non-empty destination segment without `/`.
pub(crate) fn validate_property_name(name: &str) -> Result<()> {
    validate_local_name(name)?;
    check_segment(name, name, PathRole::Destination).map(|_| ())
}

/// Strip the leading `/`, reporting empty and relative input.
pub(crate) fn strip_root(path: &str) -> Result<&str> {
    if path.is_empty() {
        return Err(Error::invalid_path(path, InvalidPathReason::Empty));
    }
    path.strip_prefix('/')
        .ok_or_else(|| Error::invalid_path(path, InvalidPathReason::NotAbsolute))
}
