// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod client_handle;

pub use client_handle::{ClientHandle, LoggingClientHandle, NoOpClientHandle};
