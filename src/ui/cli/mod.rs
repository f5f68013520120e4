pub mod drivers;
pub mod form;
mod outcome;
mod portrait;
mod render;
pub mod schema;
mod session;

pub use drivers::{InquireDriver, PromptDriver};
pub use outcome::Outcome;
pub use portrait::Portrait;
pub use render::Renderer;
pub use session::FormSession;
