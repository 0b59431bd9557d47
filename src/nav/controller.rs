//! `NavigationController` turns a navbar selection into a route change,
//! a scroll, or a route change followed by a deferred scroll.
//!
//! The controller owns the mobile-menu flag, the "page has scrolled" flag
//! and the list of deferred scrolls. Router, document and theme are host
//! state and are passed in by reference on each call.
//!
//! Deferred scrolls are one-shot. With [`ScrollTrigger::FixedDelay`] they
//! fire from [`NavigationController::tick`] once their deadline passes and
//! cannot be cancelled: leaving the landing page before the delay elapses
//! turns the stale scroll into a lookup miss. With
//! [`ScrollTrigger::AwaitMount`] they wait for
//! [`NavigationController::document_ready`] instead, and a route selection
//! drops them.

use std::time::{Duration, Instant};

use crate::document::{Document, ScrollBehavior};
use crate::router::{Router, ROOT_PATH};
use crate::theme::{Theme, ThemeHost};

use super::{Destination, NavTarget};

pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_SCROLLED_THRESHOLD: f32 = 10.0;

/// When a cross-route anchor scroll is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTrigger {
    /// Fire a fixed time after navigating back to the root
    FixedDelay(Duration),
    /// Fire when the root document reports it has mounted
    AwaitMount,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::FixedDelay(DEFAULT_SCROLL_DELAY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub menu_open: bool,
    pub scrolled: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingScroll {
    anchor: &'static str,
    /// `None` while waiting for a mount signal
    due: Option<Instant>,
}

impl PendingScroll {
    fn is_due(&self, now: Instant) -> bool {
        self.due.is_some_and(|due| now >= due)
    }
}

pub struct NavigationController {
    targets: Vec<NavTarget>,
    state: NavigationState,
    trigger: ScrollTrigger,
    scrolled_threshold: f32,
    pending: Vec<PendingScroll>,
}

impl NavigationController {
    pub fn new(targets: &[NavTarget]) -> Self {
        Self {
            targets: targets.to_vec(),
            state: NavigationState::default(),
            trigger: ScrollTrigger::default(),
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            pending: Vec::new(),
        }
    }

    pub fn with_trigger(mut self, trigger: ScrollTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_scrolled_threshold(mut self, threshold: f32) -> Self {
        self.scrolled_threshold = threshold;
        self
    }

    pub fn targets(&self) -> &[NavTarget] {
        &self.targets
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.state.scrolled
    }

    pub fn pending_scrolls(&self) -> usize {
        self.pending.len()
    }

    /// Hamburger button.
    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }

    /// Act on a navbar selection.
    pub fn select<R, D>(&mut self, target: &NavTarget, router: &mut R, doc: &mut D, now: Instant)
    where
        R: Router,
        D: Document,
    {
        if !self.targets.contains(target) {
            log::warn!("Ignoring unknown navigation target: {}", target.name);
            return;
        }
        self.state.menu_open = false;

        match target.destination {
            Destination::Route(path) => {
                log::debug!("Select {} -> route {}", target.name, path);
                if self.trigger == ScrollTrigger::AwaitMount {
                    self.pending.retain(|p| p.due.is_some());
                }
                router.navigate_to(path);
            }
            Destination::Anchor(id) if router.current_path() == ROOT_PATH => {
                log::debug!("Select {} -> #{}", target.name, id);
                scroll_to_anchor(doc, id);
            }
            Destination::Anchor(id) => {
                log::debug!(
                    "Select {} -> / then #{} (from {})",
                    target.name,
                    id,
                    router.current_path()
                );
                router.navigate_to(ROOT_PATH);
                let due = match self.trigger {
                    ScrollTrigger::FixedDelay(delay) => Some(now + delay),
                    ScrollTrigger::AwaitMount => None,
                };
                self.pending.push(PendingScroll { anchor: id, due });
            }
        }
    }

    /// Logo link: back to the landing page, no scroll.
    pub fn select_logo<R: Router>(&mut self, router: &mut R) {
        self.state.menu_open = false;
        router.navigate_to(ROOT_PATH);
    }

    /// Fire deferred scrolls whose deadline has passed. Returns the number
    /// of lookups attempted.
    pub fn tick<D: Document>(&mut self, now: Instant, doc: &mut D) -> usize {
        if !self.pending.iter().any(|p| p.is_due(now)) {
            return 0;
        }
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.is_due(now));
        self.pending = waiting;
        for p in &due {
            scroll_to_anchor(doc, p.anchor);
        }
        due.len()
    }

    /// Root document finished its first layout. Fires scrolls waiting on a
    /// mount signal; returns the number of lookups attempted.
    pub fn document_ready<D: Document>(&mut self, doc: &mut D) -> usize {
        if self.pending.iter().all(|p| p.due.is_some()) {
            return 0;
        }
        let (ready, timed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.due.is_none());
        self.pending = timed;
        for p in &ready {
            scroll_to_anchor(doc, p.anchor);
        }
        ready.len()
    }

    /// Earliest deadline among timed deferred scrolls.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().filter_map(|p| p.due).min()
    }

    pub fn on_scroll(&mut self, vertical_offset: f32) {
        self.state.scrolled = vertical_offset > self.scrolled_threshold;
    }

    pub fn toggle_theme<H: ThemeHost>(&self, host: &mut H) -> Theme {
        let next = host.theme().toggle();
        host.set_theme(next);
        log::debug!("Theme -> {}", next);
        next
    }

    /// Whether `target` is the page currently shown.
    pub fn is_active(&self, target: &NavTarget, current_path: &str) -> bool {
        match target.destination {
            Destination::Route(path) => path == current_path,
            Destination::Anchor(_) => false,
        }
    }
}

fn scroll_to_anchor<D: Document>(doc: &mut D, id: &str) -> bool {
    match doc.find_element_by_anchor_id(id) {
        Some(handle) => {
            doc.scroll_into_view(handle, ScrollBehavior::Smooth);
            true
        }
        None => {
            log::trace!("Anchor #{} not in document", id);
            false
        }
    }
}
