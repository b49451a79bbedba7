//! Read-only process model consumed by the validator.
//!
//! These types are the serde target for the JSON interchange form of a
//! definitions document. Every tagged union uses a `"type"` discriminator and
//! camelCase field names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Loosely-typed extension attributes (`packageName`, `adHoc`, `taskName`, ...).
pub type Attributes = BTreeMap<String, String>;

// =============================================================================
// DEFINITIONS
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definitions {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub root_elements: Vec<RootElement>,
    #[serde(default)]
    pub diagrams: Vec<Diagram>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RootElement {
    Process(Process),
    Message(NamedElement),
    Signal(NamedElement),
    Error(ErrorDefinition),
    Escalation(EscalationDefinition),
    Interface(Interface),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedElement {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDefinition {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationDefinition {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub escalation_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interface {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub operations: Vec<NamedElement>,
}

/// Diagram wrapper; always owned by exactly one `Definitions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagram {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl RootElement {
    pub fn id(&self) -> &str {
        match self {
            RootElement::Process(p) => p.id.as_deref().unwrap_or(""),
            RootElement::Message(m) => &m.id,
            RootElement::Signal(s) => &s.id,
            RootElement::Error(e) => &e.id,
            RootElement::Escalation(e) => &e.id,
            RootElement::Interface(i) => &i.id,
        }
    }
}

impl Definitions {
    pub fn processes(&self) -> impl Iterator<Item = &Process> {
        self.root_elements.iter().filter_map(|root| match root {
            RootElement::Process(p) => Some(p),
            _ => None,
        })
    }

    pub fn error(&self, id: &str) -> Option<&ErrorDefinition> {
        self.root_elements.iter().find_map(|root| match root {
            RootElement::Error(e) if e.id == id => Some(e),
            _ => None,
        })
    }

    pub fn diagram(&self, id: &str) -> Option<&Diagram> {
        self.diagrams.iter().find(|d| d.id == id)
    }
}

// =============================================================================
// PROCESS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub flow_elements: Vec<FlowElement>,
}

// =============================================================================
// FLOW ELEMENT — header shared by every kind + tagged kind payload
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowElement {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub extension_values: Vec<ExtensionBlock>,
    #[serde(flatten)]
    pub kind: ElementKind,
}

/// One `extensionElements` block attached to an element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionBlock {
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ElementKind {
    // Events
    StartEvent(Event),
    EndEvent(Event),
    IntermediateCatchEvent(Event),
    BoundaryEvent(Event),
    IntermediateThrowEvent(Event),

    // Tasks
    Task(Activity),
    UserTask(Activity),
    ManualTask(Activity),
    ServiceTask(Activity),
    ReceiveTask(Activity),
    BusinessRuleTask(Activity),
    ScriptTask(ScriptTask),
    SendTask(SendTask),

    // Gateways
    ExclusiveGateway(Gateway),
    EventBasedGateway(Gateway),
    ParallelGateway(Gateway),
    InclusiveGateway(Gateway),
    ComplexGateway(Gateway),

    // Other activities
    CallActivity(CallActivity),
    SubProcess(SubProcess),

    // Non-node elements
    SequenceFlow(SequenceFlow),
    DataObject(DataObject),
    DataObjectReference(DataObjectReference),
}

/// Incoming/outgoing sequence-flow ids of a flow node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Connections {
    #[serde(default)]
    pub incoming: Vec<String>,
    #[serde(default)]
    pub outgoing: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub connections: Connections,
    #[serde(default)]
    pub event_definitions: Vec<EventDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(flatten)]
    pub connections: Connections,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptTask {
    #[serde(flatten)]
    pub connections: Connections,
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub script_format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTask {
    #[serde(flatten)]
    pub connections: Connections,
    #[serde(default)]
    pub operation_ref: Option<String>,
    #[serde(default)]
    pub message_ref: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GatewayDirection {
    Unspecified,
    Converging,
    Diverging,
    Mixed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    #[serde(flatten)]
    pub connections: Connections,
    #[serde(default)]
    pub gateway_direction: Option<GatewayDirection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallActivity {
    #[serde(flatten)]
    pub connections: Connections,
    #[serde(default)]
    pub called_element_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubProcess {
    #[serde(flatten)]
    pub connections: Connections,
    #[serde(default)]
    pub flow_elements: Vec<FlowElement>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceFlow {
    #[serde(default)]
    pub source_ref: Option<String>,
    #[serde(default)]
    pub target_ref: Option<String>,
    #[serde(default)]
    pub condition_expression: Option<FormalExpression>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObject {
    #[serde(default)]
    pub is_collection: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataObjectReference {
    #[serde(default)]
    pub data_object_ref: Option<String>,
}

// =============================================================================
// EVENT DEFINITIONS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormalExpression {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventDefinition {
    #[serde(rename_all = "camelCase")]
    Timer {
        #[serde(default)]
        time_date: Option<FormalExpression>,
        #[serde(default)]
        time_duration: Option<FormalExpression>,
        #[serde(default)]
        time_cycle: Option<FormalExpression>,
    },
    #[serde(rename_all = "camelCase")]
    Signal {
        #[serde(default)]
        signal_ref: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Error {
        #[serde(default)]
        error_ref: Option<String>,
    },
    Conditional {
        #[serde(default)]
        condition: Option<FormalExpression>,
    },
    #[serde(rename_all = "camelCase")]
    Escalation {
        #[serde(default)]
        escalation_ref: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Message {
        #[serde(default)]
        message_ref: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Compensate {
        #[serde(default)]
        activity_ref: Option<String>,
    },
    Terminate,
    Link {
        #[serde(default)]
        name: Option<String>,
    },
    Cancel,
}

// =============================================================================
// CAPABILITIES
// =============================================================================

impl ElementKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::StartEvent(_) => "startEvent",
            ElementKind::EndEvent(_) => "endEvent",
            ElementKind::IntermediateCatchEvent(_) => "intermediateCatchEvent",
            ElementKind::BoundaryEvent(_) => "boundaryEvent",
            ElementKind::IntermediateThrowEvent(_) => "intermediateThrowEvent",
            ElementKind::Task(_) => "task",
            ElementKind::UserTask(_) => "userTask",
            ElementKind::ManualTask(_) => "manualTask",
            ElementKind::ServiceTask(_) => "serviceTask",
            ElementKind::ReceiveTask(_) => "receiveTask",
            ElementKind::BusinessRuleTask(_) => "businessRuleTask",
            ElementKind::ScriptTask(_) => "scriptTask",
            ElementKind::SendTask(_) => "sendTask",
            ElementKind::ExclusiveGateway(_) => "exclusiveGateway",
            ElementKind::EventBasedGateway(_) => "eventBasedGateway",
            ElementKind::ParallelGateway(_) => "parallelGateway",
            ElementKind::InclusiveGateway(_) => "inclusiveGateway",
            ElementKind::ComplexGateway(_) => "complexGateway",
            ElementKind::CallActivity(_) => "callActivity",
            ElementKind::SubProcess(_) => "subProcess",
            ElementKind::SequenceFlow(_) => "sequenceFlow",
            ElementKind::DataObject(_) => "dataObject",
            ElementKind::DataObjectReference(_) => "dataObjectReference",
        }
    }

    /// Edge lists, for every kind that is a flow node.
    pub fn connections(&self) -> Option<&Connections> {
        match self {
            ElementKind::StartEvent(e)
            | ElementKind::EndEvent(e)
            | ElementKind::IntermediateCatchEvent(e)
            | ElementKind::BoundaryEvent(e)
            | ElementKind::IntermediateThrowEvent(e) => Some(&e.connections),
            ElementKind::Task(a)
            | ElementKind::UserTask(a)
            | ElementKind::ManualTask(a)
            | ElementKind::ServiceTask(a)
            | ElementKind::ReceiveTask(a)
            | ElementKind::BusinessRuleTask(a) => Some(&a.connections),
            ElementKind::ScriptTask(t) => Some(&t.connections),
            ElementKind::SendTask(t) => Some(&t.connections),
            ElementKind::ExclusiveGateway(g)
            | ElementKind::EventBasedGateway(g)
            | ElementKind::ParallelGateway(g)
            | ElementKind::InclusiveGateway(g)
            | ElementKind::ComplexGateway(g) => Some(&g.connections),
            ElementKind::CallActivity(c) => Some(&c.connections),
            ElementKind::SubProcess(s) => Some(&s.connections),
            ElementKind::SequenceFlow(_)
            | ElementKind::DataObject(_)
            | ElementKind::DataObjectReference(_) => None,
        }
    }

    pub fn is_flow_node(&self) -> bool {
        self.connections().is_some()
    }

    pub fn is_task(&self) -> bool {
        matches!(
            self,
            ElementKind::Task(_)
                | ElementKind::UserTask(_)
                | ElementKind::ManualTask(_)
                | ElementKind::ServiceTask(_)
                | ElementKind::ReceiveTask(_)
                | ElementKind::BusinessRuleTask(_)
                | ElementKind::ScriptTask(_)
                | ElementKind::SendTask(_)
        )
    }

    /// Event definitions of a catching event (start, intermediate catch, boundary).
    pub fn catch_event(&self) -> Option<&Event> {
        match self {
            ElementKind::StartEvent(e)
            | ElementKind::IntermediateCatchEvent(e)
            | ElementKind::BoundaryEvent(e) => Some(e),
            _ => None,
        }
    }

    /// Event definitions of a throwing event (end, intermediate throw).
    pub fn throw_event(&self) -> Option<&Event> {
        match self {
            ElementKind::EndEvent(e) | ElementKind::IntermediateThrowEvent(e) => Some(e),
            _ => None,
        }
    }

    pub fn gateway(&self) -> Option<&Gateway> {
        match self {
            ElementKind::ExclusiveGateway(g)
            | ElementKind::EventBasedGateway(g)
            | ElementKind::ParallelGateway(g)
            | ElementKind::InclusiveGateway(g)
            | ElementKind::ComplexGateway(g) => Some(g),
            _ => None,
        }
    }
}
