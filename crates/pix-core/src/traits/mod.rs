//! Seams between the screens and the outside world.

mod api;
mod clipboard;
mod store;

pub use api::{PixApi, RegisterOutput};
pub use clipboard::{Clipboard, ClipboardError};
pub use store::{MemoryTokenStore, TokenStore};
