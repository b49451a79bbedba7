//! Borrowed views over the model: flow-element containers and id lookup.

use super::types::{Definitions, ElementKind, FlowElement, Process, SubProcess};

/// A process or subprocess, i.e. anything owning flow elements.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    Process(&'a Process),
    SubProcess(&'a FlowElement, &'a SubProcess),
}

impl<'a> Container<'a> {
    pub fn id(&self) -> Option<&'a str> {
        match self {
            Container::Process(p) => p.id.as_deref(),
            Container::SubProcess(element, _) => Some(element.id.as_str()),
        }
    }

    pub fn flow_elements(&self) -> &'a [FlowElement] {
        match self {
            Container::Process(p) => &p.flow_elements,
            Container::SubProcess(_, sub) => &sub.flow_elements,
        }
    }

    /// Direct child with the given id.
    pub fn find(&self, id: &str) -> Option<&'a FlowElement> {
        self.flow_elements().iter().find(|fe| fe.id == id)
    }

    /// The container view of a flow element, if it is a subprocess.
    pub fn of_element(element: &'a FlowElement) -> Option<Container<'a>> {
        match &element.kind {
            ElementKind::SubProcess(sub) => Some(Container::SubProcess(element, sub)),
            _ => None,
        }
    }
}

/// Immediate enclosing flow-elements container of the element with `id`.
///
/// Returns `None` for unknown ids and for ids whose parent is not a flow
/// container (processes and other root elements live directly under the
/// definitions).
pub fn container_of<'a>(definitions: &'a Definitions, id: &str) -> Option<Container<'a>> {
    let mut pending: Vec<Container<'a>> = definitions.processes().map(Container::Process).collect();

    while let Some(container) = pending.pop() {
        for element in container.flow_elements() {
            if element.id == id {
                return Some(container);
            }
            if let Some(nested) = Container::of_element(element) {
                pending.push(nested);
            }
        }
    }

    None
}

/// Looks up a flow element anywhere in the document.
pub fn find_element<'a>(definitions: &'a Definitions, id: &str) -> Option<&'a FlowElement> {
    container_of(definitions, id).and_then(|c| c.find(id))
}
