//! Structural matching: locating a node inside a root, measuring its depth,
//! counting and searching its ancestors, and picking the deepest of several
//! query results.
//!
//! # Locating a child inside a root
//!
//! Every operation that relates a `child` selection to a `root` selection
//! first *locates* the child inside the root. Two strategies exist:
//!
//! - [`Locate::Markup`]: query `root` for every element with the child's
//!   tag name and take the first, in document order, whose flattened markup
//!   equals the child's. This works across documents, but two structurally
//!   identical nodes are indistinguishable: the first one always wins.
//! - [`Locate::Identity`]: use the child's own node handle. Exact and cheap,
//!   but only meaningful when both selections point into the same document.
//!
//! [`Locate::Auto`] (the default) uses identity when the selections share a
//! document and markup equivalence otherwise.
//!
//! # Depth
//!
//! Depth counts parent hops from the located node up to the root, so a direct
//! child of the root has depth 1:
//!
//! ```
//! use domwalk::{HtmlDocument, Parsed};
//! use domwalk::matcher::depth;
//!
//! let parsed = Parsed::<HtmlDocument>::parse("<div><p><span>x</span></p></div>").unwrap();
//! let div = parsed.top_level();
//! let span = div.find("span").unwrap();
//! assert_eq!(depth(&div, &span).unwrap(), 2);
//! ```

use crate::dom::Dom;
use crate::error::{Error, Result};
use crate::selection::Selection;
use crate::walk::DEFAULT_MAX_CLIMB;

/// How a child selection is located inside a root selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locate {
    /// Identity when both selections share a document, markup otherwise.
    #[default]
    Auto,
    /// Node identity. Both selections must share a document.
    Identity,
    /// Serialize-and-compare equivalence; first match in document order wins.
    Markup,
}

/// Matcher configuration.
///
/// ```
/// use domwalk::matcher::{Locate, MatcherConfig};
///
/// let config = MatcherConfig::default().locate(Locate::Markup).max_climb(64);
/// assert_eq!(config.max_climb, 64);
/// ```
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Location strategy.
    pub locate: Locate,
    /// Upper bound on parent hops for any single ancestor walk.
    pub max_climb: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            locate: Locate::Auto,
            max_climb: DEFAULT_MAX_CLIMB,
        }
    }
}

impl MatcherConfig {
    /// Sets the location strategy.
    #[must_use]
    pub fn locate(mut self, locate: Locate) -> Self {
        self.locate = locate;
        self
    }

    /// Sets the climb bound.
    #[must_use]
    pub fn max_climb(mut self, steps: usize) -> Self {
        self.max_climb = steps;
        self
    }
}

/// Outcome of [`Matcher::deepest_match`].
#[derive(Debug)]
pub enum DeepestMatch<'a, D: Dom> {
    /// The deepest node found and its depth.
    Found {
        /// The winning node.
        selection: Selection<'a, D>,
        /// Its depth below the searched selection.
        depth: usize,
    },
    /// No selector matched any node.
    NoCandidates,
    /// A query or depth computation failed; the search stopped there.
    Failed(Error),
}

impl<'a, D: Dom> DeepestMatch<'a, D> {
    /// Collapses the outcome to "a match or nothing", treating a failure the
    /// same as no match.
    pub fn into_option(self) -> Option<Selection<'a, D>> {
        match self {
            Self::Found { selection, .. } => Some(selection),
            Self::NoCandidates | Self::Failed(_) => None,
        }
    }

    /// Keeps failures distinct from "no match".
    ///
    /// # Errors
    ///
    /// Returns the error carried by [`DeepestMatch::Failed`].
    pub fn into_result(self) -> Result<Option<Selection<'a, D>>> {
        match self {
            Self::Found { selection, .. } => Ok(Some(selection)),
            Self::NoCandidates => Ok(None),
            Self::Failed(err) => Err(err),
        }
    }

    /// Returns `true` for [`DeepestMatch::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Runs structural queries under a [`MatcherConfig`].
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatcherConfig,
}

impl Matcher {
    /// Creates a matcher.
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Number of parent hops from the located child up to `root`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `child` is `root` itself, or identity
    ///   location is forced across documents.
    /// - [`Error::NodeNotFound`] if the child cannot be located inside
    ///   `root`, or the climb runs out of ancestors before reaching it.
    /// - [`Error::Serialize`] / [`Error::Selector`] from the backend.
    pub fn depth<'a, D: Dom>(
        &self,
        root: &Selection<'a, D>,
        child: &Selection<'_, D>,
    ) -> Result<usize> {
        let strategy = self.strategy(root, child)?;
        let located = Self::locate_with(strategy, root, child)?;

        let climb = match strategy {
            Locate::Markup => {
                let root_html = root.html()?;
                located.climb_until_bounded(self.config.max_climb, |ancestor| {
                    if ancestor.is_empty() {
                        return Err(Error::NodeNotFound(
                            "ancestor chain ended before reaching the root".to_string(),
                        ));
                    }
                    Ok(ancestor.is_selection(root) || ancestor.html()? == root_html)
                })
            }
            _ => located.climb_until_bounded(self.config.max_climb, |ancestor| {
                Ok(ancestor.is_selection(root))
            }),
        };

        match climb {
            Ok(climb) => {
                tracing::debug!(?strategy, depth = climb.steps, "computed depth");
                Ok(climb.steps)
            }
            Err(Error::AncestorNotFound { steps }) => Err(Error::NodeNotFound(format!(
                "child is not contained in the root ({steps} ancestor(s) checked)"
            ))),
            Err(err) => Err(err),
        }
    }

    /// Counts the ancestors of the located child whose tag name is in `tags`
    /// (ASCII case-insensitive).
    ///
    /// The walk is **not** clipped at `root`: it continues to the topmost
    /// element of the document. See
    /// [`count_matching_ancestor_tags_within`](Self::count_matching_ancestor_tags_within)
    /// for the clipped count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `child` cannot be located inside
    /// `root`, [`Error::InvalidInput`] as for [`depth`](Self::depth), and
    /// [`Error::AncestorNotFound`] if the chain is longer than the climb bound.
    pub fn count_matching_ancestor_tags<D: Dom>(
        &self,
        root: &Selection<'_, D>,
        child: &Selection<'_, D>,
        tags: &[&str],
    ) -> Result<usize> {
        let located = self.locate(root, child)?;
        let mut count = 0;
        self.walk_ancestors(&located, |ancestor| {
            if tag_in(ancestor, tags) {
                count += 1;
            }
            false
        })?;
        Ok(count)
    }

    /// Like [`count_matching_ancestor_tags`](Self::count_matching_ancestor_tags),
    /// but only ancestors strictly below `root` are counted.
    ///
    /// # Errors
    ///
    /// As for [`count_matching_ancestor_tags`](Self::count_matching_ancestor_tags).
    pub fn count_matching_ancestor_tags_within<D: Dom>(
        &self,
        root: &Selection<'_, D>,
        child: &Selection<'_, D>,
        tags: &[&str],
    ) -> Result<usize> {
        let located = self.locate(root, child)?;
        let mut count = 0;
        self.walk_ancestors(&located, |ancestor| {
            if ancestor.is_selection(root) {
                return true;
            }
            if tag_in(ancestor, tags) {
                count += 1;
            }
            false
        })?;
        Ok(count)
    }

    /// Returns `true` if an ancestor of `selection` below `stop_at` carries
    /// any of `names`.
    ///
    /// `stop_at` is compared by identity and is never inspected itself; the
    /// search also ends at the topmost element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AncestorNotFound`] if neither an attribute, `stop_at`
    /// nor the topmost element is reached within the climb bound.
    pub fn has_ancestor_with_attribute<D: Dom>(
        &self,
        selection: &Selection<'_, D>,
        stop_at: &Selection<'_, D>,
        names: &[&str],
    ) -> Result<bool> {
        let mut found = false;
        self.walk_ancestors(selection, |ancestor| {
            if ancestor.is_selection(stop_at) {
                return true;
            }
            found = ancestor.has_any_attr(names);
            found
        })?;
        Ok(found)
    }

    /// Queries `selection` with every selector and returns the matched node
    /// with the greatest depth below `selection`.
    ///
    /// Selectors are tried in order and matches in document order; on equal
    /// depth the first one seen wins. The first failure stops the search and
    /// is reported as [`DeepestMatch::Failed`].
    pub fn deepest_match<'a, D: Dom>(
        &self,
        selection: &Selection<'a, D>,
        selectors: &[&str],
    ) -> DeepestMatch<'a, D> {
        let mut best: Option<(usize, Selection<'a, D>)> = None;

        for selector in selectors {
            let found = match selection.find(selector) {
                Ok(found) => found,
                Err(err) => return Self::downgrade(err),
            };
            for candidate in found.iter() {
                let depth = match self.depth(selection, &candidate) {
                    Ok(depth) => depth,
                    Err(err) => return Self::downgrade(err),
                };
                let deeper = match &best {
                    Some((max, _)) => depth > *max,
                    None => true,
                };
                if deeper {
                    best = Some((depth, candidate));
                }
            }
        }

        match best {
            Some((depth, selection)) => DeepestMatch::Found { selection, depth },
            None => DeepestMatch::NoCandidates,
        }
    }

    /// Returns `true` if any selector matches a descendant of `selection`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Selector`] for a selector the backend rejects.
    pub fn has_matching_elements<D: Dom>(
        &self,
        selection: &Selection<'_, D>,
        selectors: &[&str],
    ) -> Result<bool> {
        for selector in selectors {
            if !selection.find(selector)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Visits the ancestors of `from`, immediate parent first, until `visit`
    /// returns `true` (reported as `Ok(true)`) or the chain ends (`Ok(false)`).
    ///
    /// Needing more than `max_climb` hops fails with
    /// [`Error::AncestorNotFound`].
    fn walk_ancestors<'a, D: Dom>(
        &self,
        from: &Selection<'a, D>,
        mut visit: impl FnMut(&Selection<'a, D>) -> bool,
    ) -> Result<bool> {
        for (steps, ancestor) in from.ancestors().enumerate() {
            if steps >= self.config.max_climb {
                return Err(Error::AncestorNotFound { steps });
            }
            if visit(&ancestor) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn downgrade<'a, D: Dom>(err: Error) -> DeepestMatch<'a, D> {
        tracing::debug!(error = %err, "deepest match abandoned");
        DeepestMatch::Failed(err)
    }

    /// Resolves `Auto` and rejects combinations that cannot work.
    fn strategy<D: Dom>(&self, root: &Selection<'_, D>, child: &Selection<'_, D>) -> Result<Locate> {
        if root.is_empty() || child.is_empty() {
            return Err(Error::NodeNotFound("empty root or child selection".to_string()));
        }
        let same_document = root.shares_document(child);
        if same_document && root.first_node() == child.first_node() {
            return Err(Error::InvalidInput(
                "a node is not a descendant of itself".to_string(),
            ));
        }
        match self.config.locate {
            Locate::Auto if same_document => Ok(Locate::Identity),
            Locate::Auto => Ok(Locate::Markup),
            Locate::Identity if !same_document => Err(Error::InvalidInput(
                "identity location needs root and child in the same document".to_string(),
            )),
            other => Ok(other),
        }
    }

    /// Finds the node inside `root` that stands for `child`.
    fn locate<'a, D: Dom>(
        &self,
        root: &Selection<'a, D>,
        child: &Selection<'_, D>,
    ) -> Result<Selection<'a, D>> {
        let strategy = self.strategy(root, child)?;
        let located = Self::locate_with(strategy, root, child)?;
        if strategy == Locate::Identity
            && !self.walk_ancestors(&located, |ancestor| ancestor.is_selection(root))?
        {
            return Err(Error::NodeNotFound(
                "child is not contained in the root".to_string(),
            ));
        }
        Ok(located)
    }

    fn locate_with<'a, D: Dom>(
        strategy: Locate,
        root: &Selection<'a, D>,
        child: &Selection<'_, D>,
    ) -> Result<Selection<'a, D>> {
        if strategy != Locate::Markup {
            // Same document, so the child's handle is valid under root's borrow.
            return Ok(Selection::new(
                root.document(),
                child.first_node().into_iter().collect(),
            ));
        }

        let child_html = child.html()?;
        let tag = child
            .tag_name()
            .ok_or_else(|| Error::NodeNotFound("child is not an element".to_string()))?;
        for candidate in root.find(tag)?.iter() {
            if candidate.html()? == child_html {
                return Ok(candidate);
            }
        }
        Err(Error::NodeNotFound(format!(
            "no <{tag}> inside the root serializes to {child_html}"
        )))
    }
}

fn tag_in<D: Dom>(selection: &Selection<'_, D>, tags: &[&str]) -> bool {
    selection
        .tag_name()
        .is_some_and(|tag| tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
}

/// [`Matcher::depth`] with the default configuration.
///
/// # Errors
///
/// See [`Matcher::depth`].
pub fn depth<D: Dom>(root: &Selection<'_, D>, child: &Selection<'_, D>) -> Result<usize> {
    Matcher::default().depth(root, child)
}

/// [`Matcher::count_matching_ancestor_tags`] with the default configuration.
///
/// # Errors
///
/// See [`Matcher::count_matching_ancestor_tags`].
pub fn count_matching_ancestor_tags<D: Dom>(
    root: &Selection<'_, D>,
    child: &Selection<'_, D>,
    tags: &[&str],
) -> Result<usize> {
    Matcher::default().count_matching_ancestor_tags(root, child, tags)
}

/// [`Matcher::has_ancestor_with_attribute`] with the default configuration.
///
/// # Errors
///
/// See [`Matcher::has_ancestor_with_attribute`].
pub fn has_ancestor_with_attribute<D: Dom>(
    selection: &Selection<'_, D>,
    stop_at: &Selection<'_, D>,
    names: &[&str],
) -> Result<bool> {
    Matcher::default().has_ancestor_with_attribute(selection, stop_at, names)
}

/// [`Matcher::deepest_match`] with the default configuration.
pub fn deepest_match<'a, D: Dom>(
    selection: &Selection<'a, D>,
    selectors: &[&str],
) -> DeepestMatch<'a, D> {
    Matcher::default().deepest_match(selection, selectors)
}

/// [`Matcher::has_matching_elements`] with the default configuration.
///
/// # Errors
///
/// See [`Matcher::has_matching_elements`].
pub fn has_matching_elements<D: Dom>(selection: &Selection<'_, D>, selectors: &[&str]) -> Result<bool> {
    Matcher::default().has_matching_elements(selection, selectors)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::selection::Parsed;
    use crate::tree::Document;

    fn markup() -> Matcher {
        Matcher::new(MatcherConfig::default().locate(Locate::Markup))
    }

    fn identity() -> Matcher {
        Matcher::new(MatcherConfig::default().locate(Locate::Identity))
    }

    #[test]
    fn test_depth_all_strategies_agree_on_unique_nodes() {
        let parsed = Parsed::<Document>::parse("<div><p><span>x</span></p></div>").unwrap();
        let div = parsed.top_level();
        let span = div.find("span").unwrap();
        let p = div.find("p").unwrap();
        for matcher in [Matcher::default(), markup(), identity()] {
            assert_eq!(matcher.depth(&div, &span).unwrap(), 2);
            assert_eq!(matcher.depth(&div, &p).unwrap(), 1);
        }
    }

    #[test]
    fn test_depth_of_root_in_itself_is_invalid() {
        let parsed = Parsed::<Document>::parse("<div><p>x</p></div>").unwrap();
        let div = parsed.top_level();
        for matcher in [Matcher::default(), markup(), identity()] {
            assert!(matches!(
                matcher.depth(&div, &div),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_depth_of_copy_of_root_is_not_found() {
        let a = Parsed::<Document>::parse("<div><p>x</p></div>").unwrap();
        let b = Parsed::<Document>::parse("<div><p>x</p></div>").unwrap();
        let err = depth(&a.top_level(), &b.top_level()).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(_)));
    }

    #[test]
    fn test_depth_of_node_outside_root() {
        let parsed = Parsed::<Document>::parse("<div><p>x</p></div><aside><p>y</p></aside>").unwrap();
        let div = parsed.top_level().first();
        let outside = parsed.content_root().find("aside").unwrap().find("p").unwrap();
        assert!(matches!(depth(&div, &outside), Err(Error::NodeNotFound(_))));
        assert!(matches!(
            markup().depth(&div, &outside),
            Err(Error::NodeNotFound(_))
        ));
    }

    #[test]
    fn test_identity_across_documents_is_rejected() {
        let a = Parsed::<Document>::parse("<div><p>x</p></div>").unwrap();
        let b = Parsed::<Document>::parse("<p>x</p>").unwrap();
        assert!(matches!(
            identity().depth(&a.top_level(), &b.top_level()),
            Err(Error::InvalidInput(_))
        ));
        // Auto falls back to markup equivalence.
        assert_eq!(depth(&a.top_level(), &b.top_level()).unwrap(), 1);
    }

    #[test]
    fn test_empty_selections() {
        let parsed = Parsed::<Document>::parse("<div></div>").unwrap();
        let div = parsed.top_level();
        let none = div.find("p").unwrap();
        assert!(matches!(depth(&div, &none), Err(Error::NodeNotFound(_))));
        assert!(matches!(depth(&none, &div), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_markup_climb_respects_bound() {
        let parsed = Parsed::<Document>::parse("<a><b><c><d>x</d></c></b></a>").unwrap();
        let a = parsed.top_level();
        let d = a.find("d").unwrap();
        let tight = Matcher::new(MatcherConfig::default().locate(Locate::Markup).max_climb(2));
        assert!(matches!(tight.depth(&a, &d), Err(Error::NodeNotFound(_))));
        assert_eq!(markup().depth(&a, &d).unwrap(), 3);
    }

    #[test]
    fn test_ancestor_walks_report_the_climb_bound() {
        let parsed =
            Parsed::<Document>::parse(r#"<div data-x="1"><p><span>x</span></p></div>"#).unwrap();
        let body = parsed.content_root();
        let p = body.find("p").unwrap();
        let span = p.find("span").unwrap();
        let all = ["p", "div", "body", "html"];
        let bounded = |steps| Matcher::new(MatcherConfig::default().max_climb(steps));

        assert_eq!(Matcher::default().count_matching_ancestor_tags(&p, &span, &all).unwrap(), 4);
        assert_eq!(bounded(4).count_matching_ancestor_tags(&p, &span, &all).unwrap(), 4);
        assert!(matches!(
            bounded(2).count_matching_ancestor_tags(&p, &span, &all),
            Err(Error::AncestorNotFound { steps: 2 })
        ));
        // The clipped count reaches the root before the bound.
        assert_eq!(
            bounded(2).count_matching_ancestor_tags_within(&p, &span, &all).unwrap(),
            0
        );

        assert!(bounded(2).has_ancestor_with_attribute(&span, &body, &["data-x"]).unwrap());
        assert!(matches!(
            bounded(1).has_ancestor_with_attribute(&span, &body, &["data-x"]),
            Err(Error::AncestorNotFound { steps: 1 })
        ));
        assert!(!bounded(3).has_ancestor_with_attribute(&span, &body, &["data-y"]).unwrap());
        assert!(matches!(
            bounded(2).has_ancestor_with_attribute(&span, &body, &["data-y"]),
            Err(Error::AncestorNotFound { steps: 2 })
        ));
    }

    #[test]
    fn test_count_walks_past_root() {
        let parsed =
            Parsed::<Document>::parse("<div><section><div><p><span>x</span></p></div></section></div>")
                .unwrap();
        let section = parsed.content_root().find("section").unwrap();
        let span = section.find("span").unwrap();
        let m = Matcher::default();
        assert_eq!(m.count_matching_ancestor_tags(&section, &span, &["div"]).unwrap(), 2);
        assert_eq!(
            m.count_matching_ancestor_tags_within(&section, &span, &["div"]).unwrap(),
            1
        );
        assert_eq!(
            m.count_matching_ancestor_tags(&section, &span, &["DIV", "Section", "body", "html"])
                .unwrap(),
            5
        );
        assert_eq!(m.count_matching_ancestor_tags(&section, &span, &[]).unwrap(), 0);
    }

    #[test]
    fn test_count_requires_containment() {
        let parsed = Parsed::<Document>::parse("<div></div><p><b>x</b></p>").unwrap();
        let div = parsed.top_level().first();
        let b = parsed.content_root().find("b").unwrap();
        for matcher in [Matcher::default(), markup()] {
            assert!(matches!(
                matcher.count_matching_ancestor_tags(&div, &b, &["p"]),
                Err(Error::NodeNotFound(_))
            ));
        }
    }

    #[test]
    fn test_has_ancestor_with_attribute_stops_at_boundary() {
        let parsed = Parsed::<Document>::parse(
            r#"<div data-scope="outer"><section><p data-x="1"><b>t</b></p></section></div>"#,
        )
        .unwrap();
        let b = parsed.content_root().find("b").unwrap();
        let section = parsed.content_root().find("section").unwrap();
        let body = parsed.content_root();

        assert!(has_ancestor_with_attribute(&b, &section, &["data-x"]).unwrap());
        assert!(!has_ancestor_with_attribute(&b, &section, &["data-scope"]).unwrap());
        assert!(has_ancestor_with_attribute(&b, &body, &["data-scope"]).unwrap());
        // stop_at itself is not inspected.
        let div = parsed.top_level();
        assert!(!has_ancestor_with_attribute(&b, &div, &["data-scope"]).unwrap());
        // No boundary reached: search runs to the top and fails.
        let unrelated = Selection::empty(parsed.document());
        assert!(!has_ancestor_with_attribute(&b, &unrelated, &["nope"]).unwrap());
    }

    #[test]
    fn test_deepest_match_prefers_depth_then_first_seen() {
        let parsed = Parsed::<Document>::parse("<div><b>1</b><i><b>2</b></i><u><b>3</b></u></div>").unwrap();
        let div = parsed.top_level();
        match deepest_match(&div, &["b", "i"]) {
            DeepestMatch::Found { selection, depth } => {
                assert_eq!(selection.html().unwrap(), "<b>2</b>");
                assert_eq!(depth, 2);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_deepest_match_no_candidates() {
        let parsed = Parsed::<Document>::parse("<div><b>1</b></div>").unwrap();
        let outcome = deepest_match(&parsed.top_level(), &["i", "u"]);
        assert!(matches!(outcome, DeepestMatch::NoCandidates));
        assert!(deepest_match(&parsed.top_level(), &[]).into_option().is_none());
    }

    #[test]
    fn test_deepest_match_failure_is_observable() {
        let parsed = Parsed::<Document>::parse("<div><b>1</b></div>").unwrap();
        let outcome = deepest_match(&parsed.top_level(), &["b", "div > b"]);
        assert!(!outcome.is_found());
        assert!(matches!(outcome.into_result(), Err(Error::Selector { .. })));
        assert!(deepest_match(&parsed.top_level(), &["b", "div > b"])
            .into_option()
            .is_none());
    }

    #[test]
    fn test_has_matching_elements() {
        let parsed = Parsed::<Document>::parse("<div><b>1</b></div>").unwrap();
        let div = parsed.top_level();
        assert!(has_matching_elements(&div, &["i", "b"]).unwrap());
        assert!(!has_matching_elements(&div, &["i"]).unwrap());
        assert!(!has_matching_elements(&div, &[]).unwrap());
        assert!(has_matching_elements(&div, &["a b"]).is_err());
    }
}
