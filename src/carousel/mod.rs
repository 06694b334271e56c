//! The carousel: slot layout, scroll bounds and the scroll controller.

pub mod controller;
pub mod layout;

pub use controller::{
    ScrollController, ScrollDirection, ScrollImpulse, ScrollPhase,
};
pub use layout::{Layout, LayoutProfile, ScrollBounds};
