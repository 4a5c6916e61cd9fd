//! Session persistence for the CLI.

pub mod storage;

pub use storage::FileTokenStore;
