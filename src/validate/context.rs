//! Run-scoped state: collected diagnostics, process context and the problem sink.

use crate::error::Diagnostic;
use crate::model::{Definitions, FlowElement, Process};

use super::predicates::is_ad_hoc;

/// Host callback notified once per element-attached diagnostic
/// (e.g. to place an editor marker).
pub trait ProblemSink {
    fn report_failure(&mut self, element_id: &str);
}

/// Sink that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProblemSink for NullSink {
    fn report_failure(&mut self, _element_id: &str) {}
}

/// Sink that keeps reported element ids in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub reported: Vec<String>,
}

impl ProblemSink for RecordingSink {
    fn report_failure(&mut self, element_id: &str) {
        self.reported.push(element_id.to_string());
    }
}

/// Created fresh for every validation run and passed by `&mut` to each rule.
pub struct ValidationContext<'a> {
    pub definitions: &'a Definitions,
    process: Option<&'a Process>,
    ad_hoc: bool,
    diagnostics: Vec<Diagnostic>,
    sink: &'a mut dyn ProblemSink,
}

impl<'a> ValidationContext<'a> {
    pub fn new(definitions: &'a Definitions, sink: &'a mut dyn ProblemSink) -> Self {
        ValidationContext {
            definitions,
            process: None,
            ad_hoc: false,
            diagnostics: Vec::new(),
            sink,
        }
    }

    /// Sets the enclosing process whose flags govern nested rule decisions.
    pub fn enter_process(&mut self, process: Option<&'a Process>) {
        self.process = process;
        self.ad_hoc = is_ad_hoc(process);
    }

    pub fn process(&self) -> Option<&'a Process> {
        self.process
    }

    pub fn is_ad_hoc(&self) -> bool {
        self.ad_hoc
    }

    /// Records a process-level error with no offending element.
    pub fn error(&mut self, code: &str, message: &str) {
        tracing::trace!(code, message, "diagnostic");
        self.diagnostics.push(Diagnostic::error(code, message, None));
    }

    /// Records an error attached to `element` and notifies the sink.
    pub fn element_error(&mut self, element: &FlowElement, code: &str, message: &str) {
        tracing::trace!(code, message, element = %element.id, "diagnostic");
        self.diagnostics
            .push(Diagnostic::error(code, message, Some(element.id.clone())));
        self.sink.report_failure(&element.id);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Activity, ElementKind};

    fn definitions() -> Definitions {
        Definitions {
            id: "defs".into(),
            name: None,
            root_elements: vec![],
            diagrams: vec![],
        }
    }

    #[test]
    fn element_errors_notify_sink_process_errors_do_not() {
        let defs = definitions();
        let task = FlowElement {
            id: "task-1".into(),
            name: None,
            attributes: Default::default(),
            extension_values: vec![],
            kind: ElementKind::Task(Activity::default()),
        };
        let mut sink = RecordingSink::default();
        let mut ctx = ValidationContext::new(&defs, &mut sink);

        ctx.error("P004", "Process has no name.");
        ctx.element_error(&task, "N003", "Node has no outgoing connections");
        ctx.element_error(&task, "N004", "Node has no incoming connections");

        let diagnostics = ctx.into_diagnostics();
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics[0].element_id, None);
        assert_eq!(diagnostics[1].element_id.as_deref(), Some("task-1"));
        assert_eq!(sink.reported, vec!["task-1", "task-1"]);
    }

    #[test]
    fn no_process_context_is_not_ad_hoc() {
        let defs = definitions();
        let mut sink = NullSink;
        let mut ctx = ValidationContext::new(&defs, &mut sink);
        ctx.enter_process(None);
        assert!(!ctx.is_ad_hoc());
        assert!(ctx.process().is_none());
    }
}
