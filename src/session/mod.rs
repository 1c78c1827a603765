//! Sessions: who is playing what, and the store that holds them.
//!
//! - `GameSession`: one user's counters and active game
//! - `SessionStore`: lazily created sessions keyed by user, safe to share
//!   across request threads
//! - `InitialView` / `TurnResult`: what callers render

pub mod game_session;
pub mod store;
pub mod view;

pub use game_session::GameSession;
pub use store::{SessionHandle, SessionStore};
pub use view::{InitialView, TurnResult};
