//! HTML rendering
//!
//! Pure markup renderers for both components, the navigation state machine
//! they share with the client script, and the per-build render session.

pub mod assets;
pub mod cards;
pub mod navigation;
pub mod session;
pub mod stepper;

pub use navigation::{ActiveIndex, NavigationMode};
pub use session::RenderSession;
