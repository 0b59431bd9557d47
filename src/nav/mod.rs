//! Navigation targets and the controller that acts on them.
//!
//! - `controller`: menu/scroll state and the select → route/scroll logic
//!
//! The navbar renders [`NAV_LINKS`] in order. Each entry either scrolls the
//! landing page to a section anchor or switches to another route.

pub mod controller;

pub use controller::{
    NavigationController, NavigationState, ScrollTrigger, DEFAULT_SCROLLED_THRESHOLD,
    DEFAULT_SCROLL_DELAY,
};

use crate::router::PROBLEMS_PATH;

/// Where a navigation entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Section anchor id on the landing page
    Anchor(&'static str),
    /// Absolute route path
    Route(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub name: &'static str,
    pub destination: Destination,
}

impl NavTarget {
    pub const fn anchor(name: &'static str, id: &'static str) -> Self {
        Self {
            name,
            destination: Destination::Anchor(id),
        }
    }

    pub const fn route(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            destination: Destination::Route(path),
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self.destination, Destination::Route(_))
    }
}

pub const NAV_LINKS: &[NavTarget] = &[
    NavTarget::anchor("Home", "home"),
    NavTarget::anchor("About", "about"),
    NavTarget::route("Problem Statements", PROBLEMS_PATH),
    NavTarget::anchor("Contribute", "contribute"),
    NavTarget::anchor("Guidelines", "guidelines"),
    NavTarget::anchor("Timeline", "timeline"),
];
