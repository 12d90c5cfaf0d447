pub mod types;

// Re-export primary types for convenience.
pub use types::{DeviceAttributes, RuntimeKind, ScreenSize};
