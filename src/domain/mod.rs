//! Domain objects for shell state.
//!
//! Each submodule owns one piece of UI-independent state with explicit
//! transitions, so the state machines can be exercised without a terminal.

pub mod connectivity;
pub mod drawer;
pub mod nav_visibility;
pub mod viewport;

pub use connectivity::{Banner, BannerSeverity, BackendStatus, ConnectivityState, ProbeOutcome};
pub use drawer::{DrawerEvent, DrawerState};
pub use nav_visibility::NavVisibility;
pub use viewport::ViewportState;
