//! Model-View-Intent (MVI) architecture primitives.
//!
//! The dialog lifecycle is driven through unidirectional data flow: the
//! session translates API calls and key events into intents, a pure reducer
//! produces the next lifecycle state, and the render layer draws from state.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of the dialog lifecycle
//! - **Intent**: API calls or UI events
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
