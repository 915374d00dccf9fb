//! Fighter state machine, combat resolution and match flow

pub mod channels;
pub mod combat;
pub mod events;
pub mod fighter;
pub mod input;
pub mod match_state;
pub mod session;
pub mod types;


pub use combat::{Hit, Strike};
pub use events::TickEvent;
pub use fighter::{AppliedActions, Fighter};
pub use input::{
    ActionRequest, Controller, ControllerSpec, KeyBindings, KeyboardController, PoseController,
    SideInput,
};
pub use match_state::{Match, MatchPhase, RoundOutcome, StepOutcome};
pub use session::{FighterSnapshot, MatchSession, TickReport};
pub use types::{Arm, Side};
