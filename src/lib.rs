//! Quote Builder Library
//!
//! This library provides the quoting engine for painting and decorating
//! estimates: a rate catalog, room and job cost computation, and the session
//! state a host keeps while a quote is being assembled.

// Module declarations
pub mod domain;
pub mod util;
