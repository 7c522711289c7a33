//! Change notification for hosts.
//!
//! Renderers and input layers live outside the engine. They learn about
//! state changes by subscribing an observer to the board:
//!
//! - [`BoardEvent`]: what changed
//! - [`BoardObserver`]: anything that wants to hear about it
//! - [`ObserverRegistry`]: subscription storage owned by the board
//! - [`EventLog`]: a recording observer
//!
//! ## Example Usage
//!
//! ```
//! use bio_battle::{Board, BoardConfig};
//! use bio_battle::events::{BoardEvent, EventLog};
//!
//! let mut board = Board::new(BoardConfig::new().with_seed(1)).unwrap();
//! let log = EventLog::new();
//! board.subscribe(Box::new(log.clone()));
//!
//! board.reset();
//! assert_eq!(log.events().first(), Some(&BoardEvent::Reset));
//! ```

mod event;
mod observer;

pub use event::BoardEvent;
pub use observer::{BoardObserver, EventLog, ObserverId, ObserverRegistry};
