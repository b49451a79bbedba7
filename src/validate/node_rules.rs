//! Per-element rule catalog.
//!
//! Each entry pairs a capability test with a check. An element runs every
//! entry whose test matches, in table order, so a user task gets both the
//! user-task rule and the generic task rule. Adding an element kind means
//! adding (or widening) a table entry.

use crate::model::{Container, ElementKind, ExtensionBlock, FlowElement};

use super::attributes::extension_attribute;
use super::context::ValidationContext;
use super::event_rules;
use super::gateway_rules;
use super::predicates::{contains_whitespace, is_blank};

pub type RuleCheck = fn(&FlowElement, Container<'_>, &mut ValidationContext<'_>);

pub struct NodeRule {
    pub name: &'static str,
    pub applies: fn(&ElementKind) -> bool,
    pub check: RuleCheck,
}

pub static NODE_RULES: &[NodeRule] = &[
    NodeRule {
        name: "connectivity",
        applies: ElementKind::is_flow_node,
        check: check_connectivity,
    },
    NodeRule {
        name: "business-rule-task",
        applies: |k| matches!(k, ElementKind::BusinessRuleTask(_)),
        check: check_business_rule_task,
    },
    NodeRule {
        name: "script-task",
        applies: |k| matches!(k, ElementKind::ScriptTask(_)),
        check: check_script_task,
    },
    NodeRule {
        name: "send-task",
        applies: |k| matches!(k, ElementKind::SendTask(_)),
        check: check_send_task,
    },
    NodeRule {
        name: "user-task",
        applies: |k| matches!(k, ElementKind::UserTask(_)),
        check: check_user_task,
    },
    NodeRule {
        name: "task-simulation",
        applies: ElementKind::is_task,
        check: check_task_simulation,
    },
    NodeRule {
        name: "catch-event",
        applies: |k| k.catch_event().is_some(),
        check: event_rules::check_catch_event,
    },
    NodeRule {
        name: "throw-event",
        applies: |k| k.throw_event().is_some(),
        check: event_rules::check_throw_event,
    },
    NodeRule {
        name: "sequence-flow",
        applies: |k| matches!(k, ElementKind::SequenceFlow(_)),
        check: check_sequence_flow,
    },
    NodeRule {
        name: "gateway",
        applies: |k| k.gateway().is_some(),
        check: gateway_rules::check_gateway,
    },
    NodeRule {
        name: "call-activity",
        applies: |k| matches!(k, ElementKind::CallActivity(_)),
        check: check_call_activity,
    },
    NodeRule {
        name: "data-object",
        applies: |k| matches!(k, ElementKind::DataObject(_)),
        check: check_data_object,
    },
];

/// Run every matching catalog entry against one element.
pub fn check_element(element: &FlowElement, container: Container<'_>, ctx: &mut ValidationContext<'_>) {
    for rule in NODE_RULES {
        if (rule.applies)(&element.kind) {
            (rule.check)(element, container, ctx);
        }
    }
}

fn check_connectivity(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let Some(connections) = element.kind.connections() else {
        return;
    };

    match &element.kind {
        ElementKind::StartEvent(_) => {
            if connections.outgoing.is_empty() {
                ctx.element_error(element, "N001", "Start node has no outgoing connections");
            }
        }
        ElementKind::EndEvent(_) => {
            if connections.incoming.is_empty() {
                ctx.element_error(element, "N002", "End node has no incoming connections");
            }
        }
        _ => {
            // Ad-hoc processes have no fixed entry/exit, so loose nodes are fine.
            if ctx.is_ad_hoc() {
                return;
            }
            if connections.outgoing.is_empty() {
                ctx.element_error(element, "N003", "Node has no outgoing connections");
            }
            if connections.incoming.is_empty() {
                ctx.element_error(element, "N004", "Node has no incoming connections");
            }
        }
    }
}

fn check_business_rule_task(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    if is_blank(extension_attribute(&element.attributes, "ruleFlowGroup")) {
        ctx.element_error(element, "N005", "Business Rule Task has no ruleflow-group.");
    }
}

fn check_script_task(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let ElementKind::ScriptTask(task) = &element.kind else {
        return;
    };
    if is_blank(task.script.as_deref()) {
        ctx.element_error(element, "N006", "Script Task has no script.");
    }
    if is_blank(task.script_format.as_deref()) {
        ctx.element_error(element, "N007", "Script Task has no script format.");
    }
}

fn check_send_task(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let ElementKind::SendTask(task) = &element.kind else {
        return;
    };
    if task.operation_ref.is_none() {
        ctx.element_error(element, "N008", "Send Task has no operation.");
    }
    if task.message_ref.is_none() {
        ctx.element_error(element, "N009", "Send Task has no message.");
    }
}

fn check_user_task(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    if is_blank(extension_attribute(&element.attributes, "taskName")) {
        ctx.element_error(element, "N010", "User Task has no task name.");
    }

    if !element.extension_values.is_empty() && !staff_availability(&element.extension_values) {
        ctx.element_error(element, "S001", "User Task has no staff availability defined.");
    }
}

/// Simulation parameters recognised on a task's extension blocks.
#[derive(Debug, Default)]
struct SimulationFields<'a> {
    distribution_type: Option<&'a str>,
    duration: bool,
    time_units: bool,
    range: bool,
    standard_deviation: bool,
}

// TODO: read staffAvailability, distributionType, duration, timeUnits, range and
// standardDeviation out of the blocks once the simulation extension schema is
// agreed. Until then every task carrying extension values reports them missing.
fn staff_availability(_blocks: &[ExtensionBlock]) -> bool {
    false
}

fn simulation_fields(_blocks: &[ExtensionBlock]) -> SimulationFields<'_> {
    SimulationFields::default()
}

fn check_task_simulation(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    if element.extension_values.is_empty() {
        return;
    }

    let fields = simulation_fields(&element.extension_values);
    if fields.distribution_type.is_none() {
        ctx.element_error(element, "S002", "Task has no distribution type defined.");
    }
    if !fields.duration {
        ctx.element_error(element, "S003", "Task has no duration defined.");
    }
    if !fields.time_units {
        ctx.element_error(element, "S004", "Task has no Time Units defined.");
    }
    if let Some(distribution) = fields.distribution_type {
        if matches!(distribution, "random" | "uniform") && !fields.range {
            ctx.element_error(element, "S005", "Task has no Range defined.");
        }
        if distribution == "normal" && !fields.standard_deviation {
            ctx.element_error(element, "S006", "Task has no Standard Deviation defined.");
        }
    }
}

fn check_sequence_flow(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let ElementKind::SequenceFlow(flow) = &element.kind else {
        return;
    };
    if flow.source_ref.is_none() {
        ctx.element_error(element, "N011", "An Edge must have a source node.");
    }
    if flow.target_ref.is_none() {
        ctx.element_error(element, "N012", "An Edge must have a target node.");
    }
}

fn check_call_activity(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let ElementKind::CallActivity(call) = &element.kind else {
        return;
    };
    if call.called_element_ref.is_none() {
        ctx.element_error(
            element,
            "N013",
            "Reusable Subprocess has no called element specified.",
        );
    }
}

fn check_data_object(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let name = element.name.as_deref();
    if is_blank(name) {
        ctx.element_error(element, "N014", "Data Object has no name defined.");
    }
    if name.is_some_and(contains_whitespace) {
        ctx.element_error(element, "N015", "Data Object name contains white spaces.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = NODE_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NODE_RULES.len());
    }

    #[test]
    fn user_task_matches_task_rules() {
        let kind = ElementKind::UserTask(Default::default());
        let matched: Vec<&str> = NODE_RULES
            .iter()
            .filter(|r| (r.applies)(&kind))
            .map(|r| r.name)
            .collect();
        assert_eq!(matched, vec!["connectivity", "user-task", "task-simulation"]);
    }

    #[test]
    fn start_event_is_flow_node_and_catch_event() {
        let kind = ElementKind::StartEvent(Default::default());
        let matched: Vec<&str> = NODE_RULES
            .iter()
            .filter(|r| (r.applies)(&kind))
            .map(|r| r.name)
            .collect();
        assert_eq!(matched, vec!["connectivity", "catch-event"]);
    }

    #[test]
    fn sequence_flow_only_gets_edge_rule() {
        let kind = ElementKind::SequenceFlow(Default::default());
        let matched: Vec<&str> = NODE_RULES
            .iter()
            .filter(|r| (r.applies)(&kind))
            .map(|r| r.name)
            .collect();
        assert_eq!(matched, vec!["sequence-flow"]);
    }
}
