//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod controller;
pub mod link_rx;
pub mod link_state;
pub mod link_tx;

pub use controller::{controller_task, ControllerResources, LedTransmitter};
pub use link_rx::link_rx_task;
pub use link_state::link_state_task;
pub use link_tx::link_tx_task;
