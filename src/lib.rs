//! # Flowdeck Core
//!
//! Core business logic and domain models for the Flowdeck project
//! management board.
//!
//! This crate provides the fundamental types and operations for a
//! drag-and-drop task board: the board value itself, the reorder engine
//! applied when a drag completes, and the typed boundary to the external
//! identity provider. It has no dependency on any specific UI
//! implementation or identity service.

pub mod domain;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, Column, ColumnId, ColumnSpec},
    card::{Card, CardId},
    reorder::{apply_move, MoveOutcome, MoveRequest},
};
pub use error::{FlowdeckError, Result};
pub use session::{AuthStatus, Credentials, IdentityProvider};
