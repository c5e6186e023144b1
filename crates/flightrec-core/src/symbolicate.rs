use crate::identifiers::ModuleId;

/// Boundary for deriving module attribution from captured trace text.
///
/// Symbolication is an external collaborator: given the text of a stack
/// trace, it returns the ordered list of packages/modules implicated by
/// it. The recorder only consumes the output; it never inspects trace
/// text itself.
///
/// Implementations must be pure with respect to a given trace: the
/// recorder memoizes the first result per event and never calls the
/// collaborator again for it.
pub trait Symbolicate: Send + Sync {
    /// Returns the ordered list of modules implicated by `trace`.
    fn collect_all(&self, trace: &str) -> Vec<ModuleId>;
}

/// Symbolicator that attributes nothing.
///
/// Used when a hub is built without a real symbolication collaborator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSymbolicator;

impl Symbolicate for NullSymbolicator {
    fn collect_all(&self, _trace: &str) -> Vec<ModuleId> {
        Vec::new()
    }
}
