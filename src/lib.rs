//! Wordlist Forge - fixed-length wordlist generation
//!
//! Enumerates every string of a given length over an ordered alphabet, lazily
//! and in lexicographic order, and streams a window of that enumeration to a file.

pub mod error;
pub mod format;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{Result, WordlistError};
pub use types::{GenerationConfig, RunStatus, WriteProgress, WriteSummary};

// Re-export main functionality
pub use wordlist::{produce, total, Alphabet, CancelToken, Combinations, WordlistWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
