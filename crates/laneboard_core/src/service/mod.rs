//! Editor use-case orchestration.
//!
//! # Responsibility
//! - Translate widget gestures and key events into validated store
//!   operations, edit-mode transitions and render-sync passes.
//!
//! # Invariants
//! - The session never bypasses the store or the edit coordinator to
//!   mutate shared state directly.

pub mod editor_session;

pub use editor_session::{EditorSession, ResizeEdge, SessionError, SessionResult};
