//! Event-definition checks for catching and throwing events.
//!
//! Both sides check the same references; only the wording differs, except
//! for timers: a catching timer needs any one of date/duration/cycle, while a
//! throwing timer needs date and duration and must not carry a cycle.

use crate::model::{Container, EventDefinition, FlowElement, FormalExpression};

use super::context::ValidationContext;

fn unset(expression: &Option<FormalExpression>) -> bool {
    expression.is_none()
}

/// Error definitions must reference a declared error that carries a code.
fn error_ref_unresolved(error_ref: Option<&str>, ctx: &ValidationContext<'_>) -> bool {
    error_ref
        .and_then(|id| ctx.definitions.error(id))
        .and_then(|error| error.error_code.as_deref())
        .is_none()
}

fn condition_body_unset(condition: &Option<FormalExpression>) -> bool {
    condition.as_ref().and_then(|c| c.body.as_deref()).is_none()
}

pub fn check_catch_event(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let Some(event) = element.kind.catch_event() else {
        return;
    };

    for definition in &event.event_definitions {
        match definition {
            EventDefinition::Timer {
                time_date,
                time_duration,
                time_cycle,
            } => {
                if unset(time_date) && unset(time_duration) && unset(time_cycle) {
                    ctx.element_error(element, "E001", "Catch Event has no timedate.");
                    ctx.element_error(element, "E002", "Catch Event has no timeduration.");
                    ctx.element_error(element, "E003", "Catch Event has no timecycle.");
                }
            }
            EventDefinition::Signal { signal_ref } => {
                if signal_ref.is_none() {
                    ctx.element_error(element, "E004", "Catch Event has no signalref.");
                }
            }
            EventDefinition::Error { error_ref } => {
                if error_ref_unresolved(error_ref.as_deref(), ctx) {
                    ctx.element_error(element, "E005", "Catch Event has no errorref.");
                }
            }
            EventDefinition::Conditional { condition } => {
                if condition_body_unset(condition) {
                    ctx.element_error(element, "E006", "Catch Event has no condition expression.");
                }
            }
            EventDefinition::Escalation { escalation_ref } => {
                if escalation_ref.is_none() {
                    ctx.element_error(element, "E007", "Catch Event has no escalationref.");
                }
            }
            EventDefinition::Message { message_ref } => {
                if message_ref.is_none() {
                    ctx.element_error(element, "E008", "Catch Event has no messageref.");
                }
            }
            EventDefinition::Compensate { activity_ref } => {
                if activity_ref.is_none() {
                    ctx.element_error(element, "E009", "Catch Event has no activityref.");
                }
            }
            EventDefinition::Terminate | EventDefinition::Link { .. } | EventDefinition::Cancel => {}
        }
    }
}

pub fn check_throw_event(element: &FlowElement, _: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let Some(event) = element.kind.throw_event() else {
        return;
    };

    for definition in &event.event_definitions {
        match definition {
            EventDefinition::Timer {
                time_date,
                time_duration,
                time_cycle,
            } => {
                if unset(time_date) {
                    ctx.element_error(element, "E101", "Throw Event has no timedate.");
                }
                if unset(time_duration) {
                    ctx.element_error(element, "E102", "Throw Event has no timeduration.");
                }
                if !unset(time_cycle) {
                    ctx.element_error(element, "E103", "Throw Event has no timecycle.");
                }
            }
            EventDefinition::Signal { signal_ref } => {
                if signal_ref.is_none() {
                    ctx.element_error(element, "E104", "Throw Event has no signalref.");
                }
            }
            EventDefinition::Error { error_ref } => {
                if error_ref_unresolved(error_ref.as_deref(), ctx) {
                    ctx.element_error(element, "E105", "Throw Event has no errorref.");
                }
            }
            EventDefinition::Conditional { condition } => {
                if condition_body_unset(condition) {
                    ctx.element_error(element, "E106", "Throw Event has no conditional expression.");
                }
            }
            EventDefinition::Escalation { escalation_ref } => {
                if escalation_ref.is_none() {
                    ctx.element_error(
                        element,
                        "E107",
                        "Throw Event has no conditional escalationref.",
                    );
                }
            }
            EventDefinition::Message { message_ref } => {
                if message_ref.is_none() {
                    ctx.element_error(element, "E108", "Throw Event has no conditional messageref.");
                }
            }
            EventDefinition::Compensate { activity_ref } => {
                if activity_ref.is_none() {
                    ctx.element_error(
                        element,
                        "E109",
                        "Throw Event has no conditional activityref.",
                    );
                }
            }
            EventDefinition::Terminate | EventDefinition::Link { .. } | EventDefinition::Cancel => {}
        }
    }
}
