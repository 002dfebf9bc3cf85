//! Query controller for the station map popup.
//!
//! [`QueryController`] owns the station/pollutant/matrix selection, talks to
//! a [`wqp_core::DataEndpoint`] and pushes results into a [`ChartRenderer`]
//! and a [`PopupView`]. The browser app and the command line both drive it.

pub mod controller;
pub mod markers;
pub mod render;
pub mod sequence;

#[cfg(test)]
mod testing;

pub use controller::{PopupState, QueryController};
pub use markers::MarkerRegistry;
pub use render::{ChartRenderer, PopupView};
pub use sequence::{FetchSequence, Ticket};
