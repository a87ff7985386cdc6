//! Presentation contract: maps UI intents onto the round engine.
//!
//! The engine has no clock. A `GameSession` owns one engine plus an
//! injected `Clock`, turns elapsed wall time into one `tick()` per second
//! through a `Ticker`, and keeps the transient score feedback that the UI
//! shows for a moment after each answer.
//!
//! Everything a UI renders comes from `GameSession::view()`.

pub mod clock;
pub mod game;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use game::{Feedback, GameSession, SessionView, CARD_BACK_TEXT};
pub use ticker::Ticker;
