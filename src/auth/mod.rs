pub mod client;
pub mod password;
pub mod session;
pub mod storage;

pub use client::AuthClient;
pub use session::{Session, SessionStore};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
