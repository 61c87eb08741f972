// Compatibility module for std/no_std builds
// Re-exports the allocation types the interpreter needs plus the map type
// backing the tape.

#[cfg(target_os = "none")]
extern crate alloc;

#[cfg(not(target_os = "none"))]
pub use std::{
    boxed::Box,
    collections::{HashMap as Map, VecDeque},
    fmt,
    format,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(target_os = "none"))]
#[allow(unused_imports)]
pub use std::vec;

#[cfg(target_os = "none")]
pub use self::alloc::{
    boxed::Box,
    collections::{BTreeMap as Map, VecDeque},
    format,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(target_os = "none")]
#[allow(unused_imports)]
pub use self::alloc::vec;

#[cfg(target_os = "none")]
pub use core::fmt;

// RefCell lives in core on every target
pub use core::cell::RefCell;
