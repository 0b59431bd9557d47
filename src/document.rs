//! Host document: anchor lookup and scroll requests.
//!
//! [`SectionMap`] is the egui-side implementation. The landing page
//! registers each section's top offset as it lays the section out; the
//! page renderer later takes the pending [`ScrollRequest`] and applies it to
//! its `ScrollArea`. Any other page unmounts the map, so anchor lookups
//! made while the landing page is not on screen find nothing.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// The document surface the navigation controller consumes.
pub trait Document {
    type Handle;

    fn find_element_by_anchor_id(&self, id: &str) -> Option<Self::Handle>;
    fn scroll_into_view(&mut self, handle: Self::Handle, behavior: ScrollBehavior);
}

/// A located section: its anchor id and top offset in content coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHandle {
    pub id: String,
    pub top: f32,
}

/// Scroll the renderer should perform on its next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f32,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Default)]
pub struct SectionMap {
    sections: HashMap<String, f32>,
    request: Option<ScrollRequest>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or move) a section's top offset.
    pub fn register(&mut self, id: &str, top: f32) {
        match self.sections.get_mut(id) {
            Some(existing) => *existing = top,
            None => {
                self.sections.insert(id.to_string(), top);
            }
        }
    }

    /// Forget every section. Called while a non-root page is shown.
    pub fn unmount(&mut self) {
        if !self.sections.is_empty() {
            log::trace!("Section map unmounted ({} sections)", self.sections.len());
        }
        self.sections.clear();
        self.request = None;
    }

    pub fn is_mounted(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Hand the pending scroll to the renderer.
    pub fn take_request(&mut self) -> Option<ScrollRequest> {
        self.request.take()
    }
}

impl Document for SectionMap {
    type Handle = SectionHandle;

    fn find_element_by_anchor_id(&self, id: &str) -> Option<SectionHandle> {
        self.sections.get(id).map(|&top| SectionHandle {
            id: id.to_string(),
            top,
        })
    }

    fn scroll_into_view(&mut self, handle: SectionHandle, behavior: ScrollBehavior) {
        log::debug!("Scroll to #{} (top {:.1}, {:?})", handle.id, handle.top, behavior);
        // Latest request wins
        self.request = Some(ScrollRequest {
            top: handle.top,
            behavior,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_section() {
        let mut doc = SectionMap::new();
        assert!(!doc.is_mounted());
        doc.register("about", 720.0);
        doc.register("about", 740.0);
        assert!(doc.is_mounted());
        assert_eq!(doc.len(), 1);

        let handle = doc.find_element_by_anchor_id("about").unwrap();
        assert_eq!(handle.id, "about");
        assert!((handle.top - 740.0).abs() < 1e-6);
        assert!(doc.find_element_by_anchor_id("timeline").is_none());
    }

    #[test]
    fn test_request_handoff() {
        let mut doc = SectionMap::new();
        doc.register("guidelines", 1500.0);
        let handle = doc.find_element_by_anchor_id("guidelines").unwrap();
        doc.scroll_into_view(handle, ScrollBehavior::Smooth);

        let req = doc.take_request().unwrap();
        assert_eq!(req.behavior, ScrollBehavior::Smooth);
        assert!((req.top - 1500.0).abs() < 1e-6);
        assert!(doc.take_request().is_none());
    }

    #[test]
    fn test_unmount_clears_sections_and_request() {
        let mut doc = SectionMap::new();
        doc.register("home", 0.0);
        let handle = doc.find_element_by_anchor_id("home").unwrap();
        doc.scroll_into_view(handle, ScrollBehavior::Instant);

        doc.unmount();
        assert!(doc.is_empty());
        assert!(doc.take_request().is_none());
        assert!(doc.find_element_by_anchor_id("home").is_none());
    }
}
