mod memory_store;
mod scripted_view;

pub use memory_store::MemoryStore;
pub use scripted_view::{ScriptedView, ViewEvent};
