//! Facade over the `minimessage` crate.
//!
//! ```
//! let root = minimessage_rs::parse("<gold>Welcome</gold>, <bold>player</bold>!").unwrap();
//! assert_eq!(root.plain_text(), "Welcome, player!");
//! ```

pub use minimessage::*;
