//! Text rendering of session screens for the terminal host.

pub mod render;
