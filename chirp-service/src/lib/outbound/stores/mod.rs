pub mod memory;

pub use memory::InMemoryCredentialStore;
pub use memory::InMemorySessionStore;
