//! Walks a container's flow elements, descending into subprocesses.

use std::slice;

use crate::model::{Container, FlowElement};

use super::context::ValidationContext;
use super::node_rules;

/// Apply the node rule catalog to every element of `container` and of every
/// nested subprocess, depth-first in document order.
///
/// Subprocess contents are checked right after the subprocess itself, before
/// its next sibling. The walk keeps its own stack so nesting depth is bounded
/// by heap, not by the call stack. The ad-hoc flag in `ctx` is not
/// re-evaluated for nested containers.
pub fn check_flow_elements(container: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let mut stack: Vec<(Container<'_>, slice::Iter<'_, FlowElement>)> =
        vec![(container, container.flow_elements().iter())];

    while let Some((current, elements)) = stack.last_mut() {
        let current = *current;
        let Some(element) = elements.next() else {
            stack.pop();
            continue;
        };

        node_rules::check_element(element, current, ctx);

        if let Some(nested) = Container::of_element(element) {
            stack.push((nested, nested.flow_elements().iter()));
        }
    }
}
