//! Definitions- and process-level rules (P001–P006).

use crate::model::{Container, Definitions, ElementKind, Process};

use super::attributes::extension_attribute;
use super::context::ValidationContext;
use super::predicates::{is_blank, is_ncname};
use super::traversal;

/// Validate every process of the definitions, then walk its flow elements.
pub fn validate_definitions<'a>(definitions: &'a Definitions, ctx: &mut ValidationContext<'a>) {
    for process in definitions.processes() {
        validate_process(process, ctx);
    }
}

fn validate_process<'a>(process: &'a Process, ctx: &mut ValidationContext<'a>) {
    ctx.enter_process(Some(process));

    p001_p002_process_id(process, ctx);
    p003_package_name(process, ctx);
    p004_process_name(process, ctx);
    p005_p006_start_and_end(process, ctx);

    traversal::check_flow_elements(Container::Process(process), ctx);
}

fn p001_p002_process_id(process: &Process, ctx: &mut ValidationContext<'_>) {
    match process.id.as_deref() {
        id if is_blank(id) => ctx.error("P001", "Process has no id."),
        Some(id) if !is_ncname(id) => ctx.error(
            "P002",
            "Invalid process id. See http://www.w3.org/TR/REC-xml-names/#NT-NCName for more info.",
        ),
        _ => {}
    }
}

fn p003_package_name(process: &Process, ctx: &mut ValidationContext<'_>) {
    if is_blank(extension_attribute(&process.attributes, "packageName")) {
        ctx.error("P003", "Process has no package name.");
    }
}

fn p004_process_name(process: &Process, ctx: &mut ValidationContext<'_>) {
    if is_blank(process.name.as_deref()) {
        ctx.error("P004", "Process has no name.");
    }
}

/// Only direct children count; ad-hoc processes need neither.
fn p005_p006_start_and_end(process: &Process, ctx: &mut ValidationContext<'_>) {
    let mut found_start = false;
    let mut found_end = false;
    for element in &process.flow_elements {
        match element.kind {
            ElementKind::StartEvent(_) => found_start = true,
            ElementKind::EndEvent(_) => found_end = true,
            _ => {}
        }
    }

    if ctx.is_ad_hoc() {
        return;
    }
    if !found_start {
        ctx.error("P005", "Process has no start node.");
    }
    if !found_end {
        ctx.error("P006", "Process has no end node.");
    }
}
