//! Validation entry point.
//!
//! Dispatches on the kind of target the host hands over, runs the process-level
//! rules and the container walk, and returns every diagnostic found in one pass.

pub mod attributes;
pub mod context;
pub mod event_rules;
pub mod gateway_rules;
pub mod node_rules;
pub mod predicates;
pub mod process_rules;
pub mod traversal;

pub use context::{NullSink, ProblemSink, RecordingSink, ValidationContext};

use crate::config::{InvocationMode, ValidatorConfig};
use crate::error::Diagnostic;
use crate::model::{Definitions, Diagram, container_of};

/// What the host asked to validate.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// A diagram; its owning definitions are validated.
    Diagram(&'a Definitions, &'a Diagram),
    /// A whole definitions document.
    Definitions(&'a Definitions),
    /// A single element; its immediate enclosing container is validated.
    Element(&'a Definitions, &'a str),
    /// Any object the validator has no rules for.
    Unknown,
}

impl<'a> Target<'a> {
    /// Classify an id found in `definitions`.
    pub fn resolve(definitions: &'a Definitions, id: &'a str) -> Self {
        if definitions.id == id {
            return Target::Definitions(definitions);
        }
        if let Some(diagram) = definitions.diagram(id) {
            return Target::Diagram(definitions, diagram);
        }
        Target::Element(definitions, id)
    }

    fn kind(&self) -> &'static str {
        match self {
            Target::Diagram(..) => "diagram",
            Target::Definitions(_) => "definitions",
            Target::Element(..) => "element",
            Target::Unknown => "unknown",
        }
    }
}

/// Result of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationOutcome {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Holds configuration only; every run gets its own context.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Validator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn validate(&self, target: Target<'_>) -> ValidationOutcome {
        self.validate_with_sink(target, &mut NullSink)
    }

    /// Like [`Validator::validate`], also notifying `sink` once per
    /// element-attached diagnostic.
    pub fn validate_with_sink(&self, target: Target<'_>, sink: &mut dyn ProblemSink) -> ValidationOutcome {
        if self.config.mode == InvocationMode::Live {
            tracing::debug!(target_kind = target.kind(), "live validation: change observed");
            return ValidationOutcome {
                diagnostics: Vec::new(),
            };
        }

        tracing::debug!(target_kind = target.kind(), "batch validation");

        let diagnostics = match target {
            Target::Diagram(definitions, _) | Target::Definitions(definitions) => {
                let mut ctx = ValidationContext::new(definitions, sink);
                process_rules::validate_definitions(definitions, &mut ctx);
                ctx.into_diagnostics()
            }
            Target::Element(definitions, id) => match container_of(definitions, id) {
                Some(container) => {
                    let mut ctx = ValidationContext::new(definitions, sink);
                    traversal::check_flow_elements(container, &mut ctx);
                    ctx.into_diagnostics()
                }
                None => Vec::new(),
            },
            Target::Unknown => Vec::new(),
        };

        tracing::debug!(count = diagnostics.len(), "validation finished");
        ValidationOutcome { diagnostics }
    }
}

/// Batch-validate a whole definitions document with the default configuration.
pub fn validate_definitions(definitions: &Definitions) -> ValidationOutcome {
    Validator::default().validate(Target::Definitions(definitions))
}

/// Batch-validate the container enclosing the element with `id`.
pub fn validate_element(definitions: &Definitions, id: &str) -> ValidationOutcome {
    Validator::default().validate(Target::Element(definitions, id))
}
