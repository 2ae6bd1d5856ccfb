use crate::ports::DocumentStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
