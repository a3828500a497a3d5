//! Front-end plumbing
//!
//! [`ChatApp`] drives the engine and the pool on behalf of a [`Presenter`],
//! the trait a terminal, GUI or test harness implements.

mod controller;
mod presenter;

pub use controller::ChatApp;
pub use presenter::Presenter;
