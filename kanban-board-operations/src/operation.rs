//! Operation naming and execution traits

use crate::ExecutionResult;

/// Static metadata describing an operation.
///
/// The canonical op string is `"{verb} {noun}"` (e.g. `"move task"`), which is
/// what appears in activity log entries.
pub trait Operation {
    /// The action performed (e.g. "move", "add", "delete")
    fn verb(&self) -> &'static str;

    /// The kind of entity acted on (e.g. "task", "column")
    fn noun(&self) -> &'static str;

    /// One-line human readable description
    fn description(&self) -> &'static str;

    /// Canonical op string used in logs
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run an operation against a state value `S`, failing with `E`.
///
/// Implementations must be pure with respect to `state`: the input is only
/// read, and any new state is returned inside the `ExecutionResult`.
pub trait Execute<S, E>: Operation {
    fn execute(&self, state: &S) -> ExecutionResult<S, E>;
}
