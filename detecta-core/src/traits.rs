//! Core trait definitions for the detecta workspace.

/// A type that carries a human-readable name (condition label, series name).
pub trait Annotated {
    /// A human-readable name or identifier. Empty when the value is unnamed.
    fn name(&self) -> &str;

    /// An optional description.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
