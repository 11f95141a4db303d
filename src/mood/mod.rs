#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod level;
pub mod projector;
pub mod resolver;
pub mod state;
pub mod surface;
pub mod tier;

pub use controller::{MoodController, MoodSnapshot};
pub use level::{Level, SegmentIndex};
pub use resolver::{resolve, TrackGeometry};
pub use state::{LevelState, MoodSession, SessionPhase};
pub use surface::{DisplayChanged, MoodSurface, ResponseReady};
pub use tier::{classify, ResponsePayload, Tier};
