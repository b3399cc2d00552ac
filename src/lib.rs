//! Bind flag-style command-line arguments to a declared schema.
//!
//! ```
//! use argbind::args::{Args, Schema, BOOLEAN, INTEGER, STRING};
//!
//! let schema = Schema::new()
//!     .field("logging", "l", BOOLEAN)
//!     .field("port", "p", INTEGER)
//!     .field("directory", "d", STRING);
//! let arguments: Vec<String> = ["-l", "-p", "8088", "-d", "/usr/logs"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let options = Args::default().parse(&schema, &arguments).unwrap();
//! assert!(options.boolean("logging").unwrap());
//! assert_eq!(options.int("port").unwrap(), 8088);
//! assert_eq!(options.string("directory").unwrap(), "/usr/logs");
//! ```

pub mod args;
pub mod config;
pub mod logging;
