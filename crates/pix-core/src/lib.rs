//! pix-core - Core types, session handling and screens for the pixflow client.

pub mod credentials;
pub mod error;
pub mod messages;
pub mod pix;
pub mod router;
pub mod screens;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use pix::PixInfo;
pub use router::{Resolution, Route};
pub use screens::{LoginScreen, PixScreen, PixView, RegisterScreen, Transition};
pub use session::{SessionContext, SessionState};
pub use tokens::SessionToken;
pub use traits::{Clipboard, ClipboardError, MemoryTokenStore, PixApi, RegisterOutput, TokenStore};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
