//! Navigation methods for `SiteApp`.
//!
//! Thin glue between egui events and [`NavigationController`]: navbar
//! clicks, history shortcuts, and driving deferred scrolls from the frame
//! loop.
//!
//! [`NavigationController`]: hackfest_site::nav::NavigationController

use std::time::Instant;

use eframe::egui;

use hackfest_site::nav::NavTarget;

use super::SiteApp;

impl SiteApp {
    /// Navbar or menu entry clicked.
    pub fn select(&mut self, target: NavTarget) {
        self.nav
            .select(&target, &mut self.router, &mut self.sections, Instant::now());
    }

    pub fn go_home(&mut self) {
        self.nav.select_logo(&mut self.router);
    }

    pub fn go_back(&mut self) {
        if self.router.back() {
            self.nav.close_menu();
        }
    }

    pub fn go_forward(&mut self) {
        if self.router.forward() {
            self.nav.close_menu();
        }
    }

    pub fn toggle_theme(&mut self) {
        self.nav.toggle_theme(&mut self.theme);
    }

    /// Fire due deferred scrolls and keep frames coming until the next one.
    pub fn tick_deferred(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.nav.tick(now, &mut self.sections) > 0 {
            ctx.request_repaint();
        }
        if let Some(deadline) = self.nav.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    /// Landing page finished its first layout since being shown.
    pub fn landing_mounted(&mut self, ctx: &egui::Context) {
        if self.nav.document_ready(&mut self.sections) > 0 {
            ctx.request_repaint();
        }
    }

    pub fn handle_keys(&mut self, ctx: &egui::Context) {
        let (back, forward, escape) = ctx.input(|i| {
            (
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if back {
            self.go_back();
        }
        if forward {
            self.go_forward();
        }
        if escape {
            self.nav.close_menu();
        }
    }
}
