use process_validator::error::Diagnostic;
use process_validator::model::*;

// =============================================================================
// Document builders
// =============================================================================

/// Definitions holding a single process.
pub fn definitions_with(process: Process) -> Definitions {
    Definitions {
        id: "defs".into(),
        name: None,
        root_elements: vec![RootElement::Process(process)],
        diagrams: vec![Diagram {
            id: "diagram-1".into(),
            name: None,
        }],
    }
}

/// Process with valid id, name and package name, owning `elements`.
pub fn process_with(elements: Vec<FlowElement>) -> Process {
    let mut process = Process {
        id: Some("com.sample.process".into()),
        name: Some("Sample Process".into()),
        flow_elements: elements,
        ..Default::default()
    };
    process
        .attributes
        .insert("packageName".into(), "com.sample".into());
    process
}

pub fn ad_hoc(mut process: Process, flag: &str) -> Process {
    process.attributes.insert("adHoc".into(), flag.into());
    process
}

/// start → (node) → end wiring around a single middle element.
pub fn wrapped(middle: FlowElement) -> Vec<FlowElement> {
    let id = middle.id.clone();
    vec![
        start_event("start", &["f-in"]),
        flow("f-in", Some("start"), Some(&id)),
        middle,
        flow("f-out", Some(&id), Some("end")),
        end_event("end", &["f-out"]),
    ]
}

// =============================================================================
// Element builders
// =============================================================================

pub fn element(id: &str, kind: ElementKind) -> FlowElement {
    FlowElement {
        id: id.into(),
        name: None,
        attributes: Attributes::new(),
        extension_values: vec![],
        kind,
    }
}

pub fn connections(incoming: &[&str], outgoing: &[&str]) -> Connections {
    Connections {
        incoming: incoming.iter().map(|s| s.to_string()).collect(),
        outgoing: outgoing.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn start_event(id: &str, outgoing: &[&str]) -> FlowElement {
    element(
        id,
        ElementKind::StartEvent(Event {
            connections: connections(&[], outgoing),
            event_definitions: vec![],
        }),
    )
}

pub fn end_event(id: &str, incoming: &[&str]) -> FlowElement {
    element(
        id,
        ElementKind::EndEvent(Event {
            connections: connections(incoming, &[]),
            event_definitions: vec![],
        }),
    )
}

pub fn catch_event(id: &str, definitions: Vec<EventDefinition>) -> FlowElement {
    element(
        id,
        ElementKind::IntermediateCatchEvent(Event {
            connections: connections(&["f-in"], &["f-out"]),
            event_definitions: definitions,
        }),
    )
}

pub fn throw_event(id: &str, definitions: Vec<EventDefinition>) -> FlowElement {
    element(
        id,
        ElementKind::IntermediateThrowEvent(Event {
            connections: connections(&["f-in"], &["f-out"]),
            event_definitions: definitions,
        }),
    )
}

/// Plain task with no edges.
pub fn task(id: &str) -> FlowElement {
    element(id, ElementKind::Task(Activity::default()))
}

/// Plain task with one incoming and one outgoing edge.
pub fn connected_task(id: &str) -> FlowElement {
    element(
        id,
        ElementKind::Task(Activity {
            connections: connections(&["f-in"], &["f-out"]),
        }),
    )
}

pub fn flow(id: &str, source: Option<&str>, target: Option<&str>) -> FlowElement {
    element(
        id,
        ElementKind::SequenceFlow(SequenceFlow {
            source_ref: source.map(String::from),
            target_ref: target.map(String::from),
            condition_expression: None,
        }),
    )
}

pub fn gateway(
    id: &str,
    make: fn(Gateway) -> ElementKind,
    direction: Option<GatewayDirection>,
    outgoing: &[&str],
) -> FlowElement {
    element(
        id,
        make(Gateway {
            connections: connections(&["f-in"], outgoing),
            gateway_direction: direction,
        }),
    )
}

pub fn sub_process(id: &str, elements: Vec<FlowElement>) -> FlowElement {
    element(
        id,
        ElementKind::SubProcess(SubProcess {
            connections: connections(&["f-in"], &["f-out"]),
            flow_elements: elements,
        }),
    )
}

pub fn data_object(id: &str, name: Option<&str>) -> FlowElement {
    let mut fe = element(id, ElementKind::DataObject(DataObject::default()));
    fe.name = name.map(String::from);
    fe
}

pub fn with_attribute(mut fe: FlowElement, key: &str, value: &str) -> FlowElement {
    fe.attributes.insert(key.into(), value.into());
    fe
}

pub fn with_extension(mut fe: FlowElement, values: &[(&str, &str)]) -> FlowElement {
    fe.extension_values.push(ExtensionBlock {
        values: values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    });
    fe
}

pub fn expr(body: &str) -> Option<FormalExpression> {
    Some(FormalExpression {
        body: Some(body.into()),
        language: None,
    })
}

// =============================================================================
// Assertions
// =============================================================================

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

pub fn assert_has(diagnostics: &[Diagnostic], message: &str) {
    assert!(
        diagnostics.iter().any(|d| d.message == message),
        "Expected '{}', got: {:?}",
        message,
        messages(diagnostics)
    );
}

pub fn assert_lacks(diagnostics: &[Diagnostic], message: &str) {
    assert!(
        !diagnostics.iter().any(|d| d.message == message),
        "Did not expect '{}', but got: {:?}",
        message,
        messages(diagnostics)
    );
}

pub fn count(diagnostics: &[Diagnostic], message: &str) -> usize {
    diagnostics.iter().filter(|d| d.message == message).count()
}

/// One diagnostic per line, for inline snapshots.
pub fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
