//! # convert_core - Measurement Unit Conversion Engine
//!
//! `convert_core` converts values between units of the same category
//! (Length, Weight, Temperature, Speed, Time, Area, Volume) and explains the
//! arithmetic it performed. All results and errors are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless engine**: [`convert`] is a pure function over an immutable registry
//! - **Explicit session**: selection and history live in a caller-owned [`Session`]
//! - **Rich Errors**: structured error variants, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use convert_core::{convert, units};
//!
//! assert_eq!(units("Temperature").unwrap(), ["Celsius", "Fahrenheit", "Kelvin"]);
//!
//! let out = convert(100.0, "Celsius", "Fahrenheit", "Temperature").unwrap();
//! assert_eq!(out.result, 212.0);
//! println!("{}", out.explanation);
//! ```
//!
//! ## Modules
//!
//! - [`category`] - The fixed set of conversion categories
//! - [`units`](mod@units) - Linear and affine unit definitions
//! - [`registry`] - The built-in unit table
//! - [`engine`] - The conversion operation
//! - [`explain`] - Formula explanation text
//! - [`session`] - Caller-side selection state
//! - [`history`] - Bounded conversion log
//! - [`settings`] - TOML-configurable presentation settings
//! - [`errors`] - Structured error types

pub mod category;
pub mod engine;
pub mod errors;
pub mod explain;
pub mod history;
pub mod registry;
pub mod session;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use category::Category;
pub use engine::{categories, convert, units, ConversionRequest, ConversionResult};
pub use errors::{ConvertError, ConvertResult};
pub use history::{History, HistoryEntry};
pub use session::Session;
pub use settings::Settings;
