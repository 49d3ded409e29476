//! Supporting utilities shared by the parser, the emitter, and the binary.

pub mod constraint;
pub mod logging;
