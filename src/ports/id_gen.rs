//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Used to name scratch clone directories; replay substitutes a predictable
/// sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
