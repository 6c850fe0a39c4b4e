use crate::AgentId;

/// Read-only world access.
///
/// Subsystems (combat, navigation) define extension traits with the queries
/// they need; this trait only fixes the agent handle type.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
pub trait WorldMut: WorldView {}
