//! A pocket-calculator core.
//!
//! Keypad events go in, display text comes out:
//!
//! ```
//! use pocketcalc::calculator::{Accumulator, parse_keys};
//!
//! let mut acc = Accumulator::new();
//! let shown = acc.handle_all(parse_keys("5 + 3 =").unwrap());
//! assert_eq!(shown, "8");
//! ```

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{Accumulator, AccumulatorState, KeyEvent, Operator};
pub use config::Config;
