//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod json_output;
