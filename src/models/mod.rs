pub mod play;
pub mod session;

pub use play::{CallType, Caller, Entry, FormState, Outcome, SecondChance};
pub use session::SessionInfo;
