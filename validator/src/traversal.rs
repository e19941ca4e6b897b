//! Breadth-first walk over declared positions.

use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};

use structcheck_core::{Identity, Inspect, Kind, Step};
use tracing::trace;

use crate::located::Located;

/// Lazy breadth-first sequence of every declared position under a root.
///
/// Declared positions are the root and every member of every composite
/// reached. Pointers, optionals and variant payloads are followed to find the
/// composite to descend into; a referent already reached during this walk is
/// not descended into again, so cyclic graphs terminate.
pub struct Traversal<'a> {
    queue: VecDeque<Located<'a>>,
    visited: HashSet<Identity>,
}

impl<'a> Traversal<'a> {
    /// Start a walk at an already reduced root composite.
    pub(crate) fn new(root: &'a dyn Inspect, name: Cow<'static, str>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(Located::root(root, name));
        Self {
            queue,
            visited: HashSet::new(),
        }
    }

    /// Record the first visit of a value. Zero-sized values hold no
    /// references and may share an address, so they are never recorded.
    fn first_visit(&mut self, value: &dyn Inspect) -> bool {
        std::mem::size_of_val(value) == 0 || self.visited.insert(Identity::of(value))
    }

    /// Queue the members of the composite this position leads to, if any.
    fn expand(&mut self, node: &Located<'a>) {
        let mut current = node.value();
        let mut labels = Vec::new();
        let mut followed = false;

        loop {
            let kind = current.kind();
            match kind {
                Kind::Composite(composite) => {
                    // Referents were recorded when followed.
                    if !followed && !self.first_visit(current) {
                        trace!(field = %node.qualified_name(), "composite already expanded");
                        return;
                    }
                    for (index, member) in composite.members().into_iter().enumerate() {
                        self.queue.push_back(node.member(&labels, index, member));
                    }
                    return;
                }
                Kind::Variant { name, .. } => labels.push(Cow::Owned(format!("({name})"))),
                _ => {}
            }

            match kind.step() {
                Step::Follow(next) if self.first_visit(next) => {
                    current = next;
                    followed = true;
                }
                Step::Follow(next) => {
                    trace!(
                        field = %node.qualified_name(),
                        referent = next.type_name(),
                        "referent already visited"
                    );
                    return;
                }
                Step::Absent | Step::Stop => return,
            }
        }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = Located<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        trace!(field = %node.qualified_name(), order = ?node.order(), "visiting");
        self.expand(&node);
        Some(node)
    }
}
