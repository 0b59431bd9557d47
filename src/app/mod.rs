//! `SiteApp`: the top-level egui application state.
//!
//! This module declares the `SiteApp` struct and its `eframe::App` impl.
//! All other methods are split across the sibling sub-modules:
//!
//! - `navigation` - navbar actions, deferred scrolls, keyboard shortcuts
//! - `toolbar`    - navbar strip and the mobile menu overlay
//! - `content`    - page rendering (landing sections, problem statements)

pub mod content;
pub mod navigation;
pub mod toolbar;

use eframe::egui;

use hackfest_site::config::SiteConfig;
use hackfest_site::document::SectionMap;
use hackfest_site::nav::{NavigationController, NAV_LINKS};
use hackfest_site::router::HistoryRouter;
use hackfest_site::theme::Theme;

// ─── Application state ───────────────────────────────────────────────────────

pub struct SiteApp {
    pub config: SiteConfig,
    pub theme: Theme,
    /// Theme whose visuals are currently installed on the context
    pub applied_theme: Option<Theme>,
    pub router: HistoryRouter,
    pub nav: NavigationController,
    pub sections: SectionMap,
}

impl SiteApp {
    pub fn new(config: SiteConfig) -> Self {
        let nav = NavigationController::new(NAV_LINKS)
            .with_trigger(config.navigation.scroll_trigger())
            .with_scrolled_threshold(config.navigation.scrolled_threshold);
        Self {
            theme: config.theme.mode,
            applied_theme: None,
            router: HistoryRouter::new(),
            nav,
            sections: SectionMap::new(),
            config,
        }
    }

    /// Narrow windows collapse the navbar links into the menu overlay.
    pub fn is_mobile(&self, ctx: &egui::Context) -> bool {
        ctx.screen_rect().width() < self.config.navigation.mobile_breakpoint
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.theme) {
            ctx.set_visuals(self.theme.visuals());
            self.applied_theme = Some(self.theme);
        }
    }
}

impl SiteApp {
    /// One frame of the whole shell.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.handle_keys(ctx);
        self.tick_deferred(ctx);
        self.apply_theme(ctx);

        let frame = self.navbar_frame(ctx);
        egui::TopBottomPanel::top("navbar")
            .frame(frame)
            .show(ctx, |ui| {
                self.draw_toolbar(ui, ctx);
            });

        self.draw_mobile_menu(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_page(ui, ctx);
        });
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use hackfest_site::config::ScrollTriggerKind;
    use hackfest_site::nav::NavTarget;
    use hackfest_site::router::{Router, PROBLEMS_PATH, ROOT_PATH};

    fn run_frames(ctx: &egui::Context, app: &mut SiteApp, size: egui::Vec2, frames: usize) {
        for _ in 0..frames {
            run_frame(ctx, app, size, Vec::new());
        }
    }

    fn run_frame(ctx: &egui::Context, app: &mut SiteApp, size: egui::Vec2, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, size)),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn named(name: &str) -> NavTarget {
        *NAV_LINKS.iter().find(|t| t.name == name).unwrap()
    }

    fn app_at_problems(config: SiteConfig) -> SiteApp {
        let mut app = SiteApp::new(config);
        app.router.navigate_to(PROBLEMS_PATH);
        app
    }

    const DESKTOP: egui::Vec2 = egui::vec2(1024.0, 600.0);

    #[test]
    fn test_cross_route_scroll_after_delay() {
        let ctx = egui::Context::default();
        let mut app = app_at_problems(SiteConfig::default());
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert!(!app.sections.is_mounted());

        app.select(named("Guidelines"));
        run_frames(&ctx, &mut app, DESKTOP, 3);
        assert_eq!(app.router.current_path(), ROOT_PATH);
        assert!(app.sections.is_mounted());
        assert_eq!(app.nav.pending_scrolls(), 1);
        assert!(!app.nav.scrolled());

        std::thread::sleep(Duration::from_millis(150));
        run_frames(&ctx, &mut app, DESKTOP, 60);
        assert_eq!(app.nav.pending_scrolls(), 0);
        assert!(app.nav.scrolled());
    }

    #[test]
    fn test_cross_route_scroll_on_mount() {
        let ctx = egui::Context::default();
        let mut config = SiteConfig::default();
        config.navigation.scroll_trigger = ScrollTriggerKind::AwaitMount;
        let mut app = app_at_problems(config);
        run_frames(&ctx, &mut app, DESKTOP, 1);

        app.select(named("Guidelines"));
        assert_eq!(app.nav.pending_scrolls(), 1);
        assert_eq!(app.nav.next_deadline(), None);

        // Landing lays out in the next frame and fires the scroll
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert!(app.sections.is_mounted());
        assert_eq!(app.nav.pending_scrolls(), 0);

        run_frames(&ctx, &mut app, DESKTOP, 60);
        assert!(app.nav.scrolled());
    }

    #[test]
    fn test_anchor_at_root_scrolls_landing() {
        let ctx = egui::Context::default();
        let mut app = SiteApp::new(SiteConfig::default());
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert!(!app.nav.scrolled());

        app.select(named("Timeline"));
        run_frames(&ctx, &mut app, DESKTOP, 60);
        assert_eq!(app.nav.pending_scrolls(), 0);
        assert!(app.nav.scrolled());

        app.select(named("Home"));
        run_frames(&ctx, &mut app, DESKTOP, 60);
        assert!(!app.nav.scrolled());
    }

    #[test]
    fn test_route_target_unmounts_landing() {
        let ctx = egui::Context::default();
        let mut app = SiteApp::new(SiteConfig::default());
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert!(app.sections.is_mounted());

        app.select(named("Problem Statements"));
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert_eq!(app.router.current_path(), PROBLEMS_PATH);
        assert!(!app.sections.is_mounted());
    }

    #[test]
    fn test_problems_page_scroll_updates_scrolled() {
        let ctx = egui::Context::default();
        let short = egui::vec2(1024.0, 240.0);
        let mut app = app_at_problems(SiteConfig::default());
        run_frames(&ctx, &mut app, short, 1);
        assert!(!app.nav.scrolled());

        let wheel = vec![
            egui::Event::PointerMoved(egui::pos2(512.0, 160.0)),
            egui::Event::MouseWheel {
                unit: egui::MouseWheelUnit::Point,
                delta: egui::vec2(0.0, -200.0),
                modifiers: egui::Modifiers::NONE,
            },
        ];
        run_frame(&ctx, &mut app, short, wheel);
        run_frames(&ctx, &mut app, short, 60);
        assert!(app.nav.scrolled());
    }

    #[test]
    fn test_theme_toggle_installs_visuals() {
        let ctx = egui::Context::default();
        let mut app = SiteApp::new(SiteConfig::default());
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert!(ctx.style().visuals.dark_mode);

        app.toggle_theme();
        run_frames(&ctx, &mut app, DESKTOP, 1);
        assert_eq!(app.theme, hackfest_site::theme::Theme::Light);
        assert!(!ctx.style().visuals.dark_mode);
    }
}
