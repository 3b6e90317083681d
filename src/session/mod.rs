pub mod context;
pub mod middleware;

pub use context::SessionContext;
pub use middleware::{CurrentSession, SessionMiddleware};
