//! Upward traversal with a caller-supplied stop condition.
//!
//! [`climb_until`](Selection::climb_until) is an explicit loop, never
//! recursion, and it always terminates: the stop condition sees the empty
//! selection once the walk passes the topmost element, and if it declines to
//! stop there the walk fails with [`Error::AncestorNotFound`]. A step bound
//! ([`DEFAULT_MAX_CLIMB`] unless overridden) caps the walk as well.

use crate::dom::Dom;
use crate::error::{Error, Result};
use crate::selection::Selection;

/// Default upper bound on parent hops for a single climb.
pub const DEFAULT_MAX_CLIMB: usize = 4096;

/// Where a successful climb stopped.
#[derive(Debug)]
pub struct Climb<'a, D: Dom> {
    /// The ancestor the stop condition accepted. Empty if it accepted the
    /// position past the topmost element.
    pub ancestor: Selection<'a, D>,
    /// Parent hops taken; 1 when the immediate parent satisfied the condition.
    pub steps: usize,
}

impl<'a, D: Dom> Selection<'a, D> {
    /// Walks up from the parent of the first node until `stop` returns
    /// `Ok(true)`.
    ///
    /// `stop` is called with each ancestor in turn, starting with the
    /// immediate parent, and finally once with an empty selection standing
    /// for "past the root". An error from `stop` aborts the walk and is
    /// returned as is.
    ///
    /// ```
    /// use domwalk::{Document, Parsed};
    ///
    /// let parsed = Parsed::<Document>::parse("<ul><li><a>x</a></li></ul>").unwrap();
    /// let a = parsed.content_root().find("a").unwrap();
    /// let climb = a.climb_until(|s| Ok(s.tag_name() == Some("ul"))).unwrap();
    /// assert_eq!(climb.steps, 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::AncestorNotFound`] if the condition never holds.
    pub fn climb_until<F>(&self, stop: F) -> Result<Climb<'a, D>>
    where
        F: FnMut(&Selection<'a, D>) -> Result<bool>,
    {
        self.climb_until_bounded(DEFAULT_MAX_CLIMB, stop)
    }

    /// [`climb_until`](Self::climb_until) with an explicit step bound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AncestorNotFound`] if the condition does not hold
    /// within `max_steps` hops or before the ancestors run out.
    pub fn climb_until_bounded<F>(&self, max_steps: usize, mut stop: F) -> Result<Climb<'a, D>>
    where
        F: FnMut(&Selection<'a, D>) -> Result<bool>,
    {
        let mut current = self.clone();
        let mut steps = 0;
        while steps < max_steps {
            let ancestor = current.parent();
            steps += 1;
            tracing::trace!(steps, tag = ?ancestor.tag_name(), "climbing");
            if stop(&ancestor)? {
                return Ok(Climb { ancestor, steps });
            }
            if ancestor.is_empty() {
                break;
            }
            current = ancestor;
        }
        Err(Error::AncestorNotFound { steps })
    }

    /// Iterates over the ancestors of the first node, immediate parent first,
    /// ending at the topmost element.
    pub fn ancestors(&self) -> Ancestors<'a, D> {
        Ancestors {
            doc: self.document(),
            next: self.first_node().and_then(|n| self.document().parent(n)),
        }
    }
}

/// Iterator over ancestor selections. See [`Selection::ancestors`].
pub struct Ancestors<'a, D: Dom> {
    doc: &'a D,
    next: Option<D::NodeId>,
}

impl<'a, D: Dom> Iterator for Ancestors<'a, D> {
    type Item = Selection<'a, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(Selection::new(self.doc, vec![current]))
    }
}
