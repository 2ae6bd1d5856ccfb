
pub use memory_document_store::MemoryDocumentStore;
