//! Navbar rendering for `SiteApp`.
//!
//! Draws the logo link, the navigation entries (inline on wide windows,
//! behind a menu button on narrow ones), the theme toggle, and the mobile
//! menu overlay.

use eframe::egui;

use hackfest_site::content::EVENT_NAME;
use hackfest_site::nav::NavTarget;
use hackfest_site::router::Router;

use super::SiteApp;

const MENU_ICON: &str = "\u{2630}";
const CLOSE_ICON: &str = "\u{2715}";

impl SiteApp {
    /// Flat while at the top of the page, raised once scrolled.
    pub fn navbar_frame(&self, ctx: &egui::Context) -> egui::Frame {
        let style = ctx.style();
        if self.nav.scrolled() {
            egui::Frame::side_top_panel(&style).shadow(style.visuals.popup_shadow)
        } else {
            egui::Frame::none()
                .fill(style.visuals.extreme_bg_color)
                .inner_margin(egui::Margin::symmetric(8.0, 6.0))
        }
    }

    /// Render the top navbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mobile = self.is_mobile(ctx);
        let current = self.router.current_path().to_string();
        let mut clicked: Option<NavTarget> = None;
        let mut logo = false;
        let mut theme = false;
        let mut menu = false;

        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let brand = egui::RichText::new(EVENT_NAME)
                .size(20.0)
                .strong()
                .color(self.theme.accent());
            if ui
                .add(egui::Label::new(brand).sense(egui::Sense::click()))
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .clicked()
            {
                logo = true;
            }

            if !mobile {
                ui.add_space(24.0);
                for target in self.nav.targets() {
                    let active = self.nav.is_active(target, &current);
                    if ui.selectable_label(active, target.name).clicked() {
                        clicked = Some(*target);
                    }
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if mobile {
                    let icon = if self.nav.menu_open() { CLOSE_ICON } else { MENU_ICON };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(icon).size(22.0)).frame(false))
                        .clicked()
                    {
                        menu = true;
                    }
                }
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new(self.theme.toggle_icon()).size(20.0))
                            .frame(false),
                    )
                    .on_hover_text("Toggle theme")
                    .clicked()
                {
                    theme = true;
                }
            });
        });

        if logo {
            self.go_home();
        }
        if let Some(target) = clicked {
            self.select(target);
        }
        if theme {
            self.toggle_theme();
        }
        if menu {
            self.nav.toggle_menu();
        }
    }

    /// Mobile overlay listing every entry; shown while the menu is open.
    pub fn draw_mobile_menu(&mut self, ctx: &egui::Context) {
        if !self.nav.menu_open() || !self.is_mobile(ctx) {
            return;
        }
        let current = self.router.current_path().to_string();
        let mut clicked: Option<NavTarget> = None;

        egui::Area::new(egui::Id::new("mobile_menu"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 52.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(200.0);
                    for target in self.nav.targets() {
                        let active = self.nav.is_active(target, &current);
                        let text = egui::RichText::new(target.name).size(16.0);
                        if ui.selectable_label(active, text).clicked() {
                            clicked = Some(*target);
                        }
                    }
                });
            });

        if let Some(target) = clicked {
            self.select(target);
        }
    }
}
