//! Credential primitives library
//!
//! Provides the two cryptographic building blocks of the authentication
//! service:
//! - Password hashing (Argon2id)
//! - Signed, time-bound token encoding and decoding
//!
//! Both are pure and CPU-bound; neither touches the network or storage.
//! The service defines its own authentication protocol on top of these.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use credentials::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("wrong_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use chrono::Duration;
//! use credentials::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.encode("alice", Duration::minutes(30)).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.subject(), Some("alice"));
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
