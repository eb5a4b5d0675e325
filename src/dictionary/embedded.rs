//! Embedded word list
//!
//! A compact general-purpose word list compiled into the binary at build time,
//! enough to solve the bundled sample puzzle and to demo the solver without an
//! external dictionary file.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
