pub mod models;
pub mod session;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserSessionStore;

pub use models::{CachedUser, Session, ADMIN_ROLE};
pub use session::SessionStore;
