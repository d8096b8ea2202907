//! Whole-workspace purge.
//!
//! Removes every property of the root node and every child node of the
//! root, except system items. A system item is one whose name carries a
//! reserved namespace prefix such as `jcr:` or `rep:`.

use crate::error::Result;
use crate::operations::confirm::Confirm;
use crate::path::{join_path, node_name, Segment};
use crate::session::Session;

/// Namespace prefixes reserved for repository-internal items.
pub const DEFAULT_SYSTEM_PREFIXES: &[&str] = &["jcr", "rep"];

/// Decides which root items survive a purge.
///
/// # Examples
///
/// ```
/// use arbor::operations::SystemItemPolicy;
///
/// let policy = SystemItemPolicy::default();
/// assert!(policy.is_system_item("jcr:system"));
/// assert!(policy.is_system_item("rep:policy"));
/// assert!(!policy.is_system_item("cms"));
/// assert!(!policy.is_system_item("app:jcr"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemItemPolicy {
    prefixes: Vec<String>,
}

impl SystemItemPolicy {
    /// A policy protecting items with any of the given prefixes.
    #[must_use]
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy protecting nothing.
    #[must_use]
    pub fn none() -> Self {
        Self {
            prefixes: Vec::new(),
        }
    }

    /// The protected prefixes.
    #[must_use]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether the item named `name` is protected.
    ///
    /// Names that do not parse as a path segment are never protected.
    #[must_use]
    pub fn is_system_item(&self, name: &str) -> bool {
        Segment::parse(name).is_ok_and(|segment| segment.has_prefix_in(&self.prefixes))
    }
}

impl Default for SystemItemPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PREFIXES.iter().copied())
    }
}

/// What a purge did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    /// The user declined; nothing was touched.
    Aborted,
    /// The workspace was purged and saved.
    Purged {
        /// Paths of the removed root child nodes.
        nodes: Vec<String>,
        /// Paths of the removed root properties.
        properties: Vec<String>,
    },
}

impl PurgeOutcome {
    /// Total number of removed items, zero when aborted.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        match self {
            Self::Aborted => 0,
            Self::Purged { nodes, properties } => nodes.len() + properties.len(),
        }
    }
}

/// Purge all non-system content from the session's workspace.
///
/// Root properties are removed first, then root child nodes, then the
/// session is saved once.
///
/// # Errors
///
/// Returns any session or confirmation error unchanged. Nothing is saved
/// if a removal fails.
///
/// # Examples
///
/// ```no_run
/// use arbor::operations::{purge_workspace, FixedAnswer, SystemItemPolicy};
/// use arbor::{Repository, RepositoryConfig};
///
/// let mut repo = Repository::open(RepositoryConfig::new("/tmp/arbor.db"))?;
/// let mut session = repo.session("default")?;
/// purge_workspace(&mut session, &mut FixedAnswer(true), false, &SystemItemPolicy::default())?;
/// # Ok::<(), arbor::Error>(())
/// ```
pub fn purge_workspace<S, C>(
    session: &mut S,
    confirm: &mut C,
    force: bool,
    policy: &SystemItemPolicy,
) -> Result<PurgeOutcome>
where
    S: Session + ?Sized,
    C: Confirm + ?Sized,
{
    if !force {
        let question = format!(
            "Are you sure you want to purge workspace \"{}\"?",
            session.workspace_name()
        );
        if !confirm.confirm(&question)? {
            return Ok(PurgeOutcome::Aborted);
        }
    }

    let mut properties = Vec::new();
    for (name, _) in session.properties("/")? {
        if policy.is_system_item(&name) {
            log::debug!("keeping system property {name}");
            continue;
        }
        session.remove_property("/", &name)?;
        properties.push(join_path("/", &name));
    }

    let mut nodes = Vec::new();
    for child in session.child_nodes("/")? {
        if policy.is_system_item(node_name(&child)) {
            log::debug!("keeping system node {child}");
            continue;
        }
        session.remove_item(&child)?;
        nodes.push(child);
    }

    session.save()?;
    log::debug!(
        "purged {} node(s) and {} propert(ies)",
        nodes.len(),
        properties.len()
    );
    Ok(PurgeOutcome::Purged { nodes, properties })
}
