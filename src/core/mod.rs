// Public modules
pub mod boilerplate;
pub mod catalog;
pub mod editor;
pub mod error;
pub mod group;
pub mod preset;
pub mod prompt;
pub mod scaffold;
pub mod search;
pub mod section;
pub mod store;
pub mod template;

// Public modules for CLI access
pub mod defaults;
pub mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use preset::PresetRegistry;
pub use section::Section;
pub use store::{LocalStore, ManualStore};
pub use template::{SectionDefinition, Template};
