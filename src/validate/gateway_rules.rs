//! Gateway direction and outgoing-probability checks.

use crate::model::{Container, ElementKind, FlowElement, GatewayDirection};

use super::attributes::extension_value;
use super::context::ValidationContext;

const SPLIT_OR_JOIN: &[GatewayDirection] = &[GatewayDirection::Diverging, GatewayDirection::Converging];
const SPLIT_ONLY: &[GatewayDirection] = &[GatewayDirection::Diverging];

/// Directions accepted per gateway kind, with the diagnostic used when violated.
fn allowed_directions(
    kind: &ElementKind,
) -> Option<(&'static [GatewayDirection], &'static str, &'static str)> {
    match kind {
        ElementKind::ExclusiveGateway(_) => Some((
            SPLIT_OR_JOIN,
            "G002",
            "Invalid Gateway direction for Exclusing Gateway. It should be 'Converging' or 'Diverging'.",
        )),
        ElementKind::EventBasedGateway(_) => Some((
            SPLIT_ONLY,
            "G003",
            "Invalid Gateway direction for EventBased Gateway. It should be 'Diverging'.",
        )),
        ElementKind::ParallelGateway(_) => Some((
            SPLIT_OR_JOIN,
            "G004",
            "Invalid Gateway direction for Parallel Gateway. It should be 'Converging' or 'Diverging'.",
        )),
        ElementKind::InclusiveGateway(_) => Some((
            SPLIT_ONLY,
            "G005",
            "Invalid Gateway direction for Inclusive Gateway. It should be 'Diverging'.",
        )),
        ElementKind::ComplexGateway(_) => Some((
            SPLIT_OR_JOIN,
            "G006",
            "Invalid Gateway direction for Complex Gateway. It should be 'Converging' or 'Diverging'.",
        )),
        _ => None,
    }
}

pub fn check_gateway(element: &FlowElement, container: Container<'_>, ctx: &mut ValidationContext<'_>) {
    let Some(gateway) = element.kind.gateway() else {
        return;
    };
    let direction = gateway.gateway_direction;

    if matches!(direction, None | Some(GatewayDirection::Unspecified)) {
        ctx.element_error(element, "G001", "Gateway does not specify a valid direction.");
    }

    if let Some((allowed, code, message)) = allowed_directions(&element.kind) {
        if !direction.is_some_and(|d| allowed.contains(&d)) {
            ctx.element_error(element, code, message);
        }
    }

    if !matches!(element.kind, ElementKind::ParallelGateway(_)) {
        check_outgoing_probabilities(element, container, ctx);
    }
}

/// Every outgoing flow that carries extension blocks must define a probability.
///
/// The values are not summed: the "must total 100" check stays disabled until
/// product review decides its semantics.
fn check_outgoing_probabilities(
    element: &FlowElement,
    container: Container<'_>,
    ctx: &mut ValidationContext<'_>,
) {
    let Some(connections) = element.kind.connections() else {
        return;
    };

    for flow_id in &connections.outgoing {
        let Some(flow) = container.find(flow_id) else {
            continue;
        };
        if !matches!(flow.kind, ElementKind::SequenceFlow(_)) || flow.extension_values.is_empty() {
            continue;
        }
        if extension_value(&flow.extension_values, "probability").is_none() {
            ctx.element_error(flow, "G007", "Sequence Flow has no probability defined.");
        }
    }
}
