//! Pure decisions: environment layouts and requirements file selection.

pub mod platform;
pub mod requirements;
