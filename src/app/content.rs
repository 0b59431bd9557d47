//! Page rendering for `SiteApp`.
//!
//! The landing page lays its sections out inside one vertical `ScrollArea`,
//! registering each section's offset in the `SectionMap` as it goes and
//! applying any scroll request the navigation controller left there. Other
//! pages unmount the map.

use eframe::egui;

use hackfest_site::content::{
    Section, ABOUT, CONTRIBUTE_STEPS, EVENT_NAME, FOOTER_LINES, GUIDELINES,
    HOST_INSTITUTION, PROBLEM_STATEMENTS, SECTIONS, TIMELINE, VIDEO_TITLE, VIDEO_URL,
};
use hackfest_site::document::ScrollBehavior;
use hackfest_site::router::Page;
use hackfest_site::theme::Theme;

use super::SiteApp;

impl SiteApp {
    /// Render whichever page the router currently points at.
    pub fn draw_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match self.router.page() {
            Page::Landing => self.draw_landing(ui, ctx),
            Page::ProblemStatements => {
                self.sections.unmount();
                let offset = draw_problem_statements(ui, self.theme);
                self.nav.on_scroll(offset);
            }
            Page::NotFound(path) => {
                self.sections.unmount();
                self.nav.on_scroll(0.0);
                if draw_not_found(ui, &path) {
                    self.go_home();
                }
            }
        }
    }

    fn draw_landing(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let was_mounted = self.sections.is_mounted();
        let request = self.sections.take_request();
        let theme = self.theme;
        let sections = &mut self.sections;

        let mut area = egui::ScrollArea::vertical()
            .id_salt("landing")
            .auto_shrink([false; 2]);
        if let Some(req) = request.filter(|r| r.behavior == ScrollBehavior::Instant) {
            area = area.vertical_scroll_offset(req.top);
        }

        let output = area.show(ui, |ui| {
            let origin = ui.cursor().top();
            let min_height = ui.clip_rect().height();
            for section in SECTIONS {
                sections.register(section.id, ui.cursor().top() - origin);
                draw_section(ui, section, theme, min_height);
            }
            if let Some(req) = request.filter(|r| r.behavior == ScrollBehavior::Smooth) {
                let target = egui::Rect::from_min_size(
                    egui::pos2(ui.min_rect().left(), origin + req.top),
                    egui::vec2(ui.available_width().max(1.0), min_height),
                );
                ui.scroll_to_rect(target, Some(egui::Align::TOP));
            }
        });

        self.nav.on_scroll(output.state.offset.y);
        if !was_mounted && self.sections.is_mounted() {
            self.landing_mounted(ctx);
        }
    }
}

fn section_frame(
    ui: &mut egui::Ui,
    min_height: f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::group(ui.style())
        .inner_margin(32.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(min_height);
            ui.vertical_centered(add_contents);
        });
}

fn heading(ui: &mut egui::Ui, text: &str, theme: Theme) {
    ui.add_space(16.0);
    ui.label(
        egui::RichText::new(text)
            .size(28.0)
            .strong()
            .color(theme.accent()),
    );
    ui.add_space(12.0);
}

fn draw_section(ui: &mut egui::Ui, section: &Section, theme: Theme, min_height: f32) {
    section_frame(ui, min_height, |ui| match section.id {
        "home" => {
            ui.add_space(min_height * 0.25);
            ui.label(egui::RichText::new(EVENT_NAME).size(20.0).color(theme.accent()));
            ui.add_space(8.0);
            ui.label(egui::RichText::new(HOST_INSTITUTION).size(40.0).strong());
        }
        "about" => {
            heading(ui, section.title, theme);
            ui.label(egui::RichText::new(ABOUT).size(16.0));
        }
        "contribute" => {
            heading(ui, section.title, theme);
            for (i, step) in CONTRIBUTE_STEPS.iter().enumerate() {
                ui.label(egui::RichText::new(format!("{}. {}", i + 1, step)).size(16.0));
            }
        }
        "guidelines" => {
            heading(ui, section.title, theme);
            for rule in GUIDELINES {
                ui.label(egui::RichText::new(format!("\u{2022} {}", rule)).size(16.0));
            }
        }
        "timeline" => {
            heading(ui, section.title, theme);
            egui::Grid::new("timeline_grid")
                .num_columns(2)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    for m in TIMELINE {
                        ui.label(egui::RichText::new(m.when).strong().color(theme.accent()));
                        ui.label(m.what);
                        ui.end_row();
                    }
                });
        }
        "video" => {
            heading(ui, section.title, theme);
            ui.label(VIDEO_TITLE);
            ui.hyperlink_to("Open on YouTube", VIDEO_URL);
        }
        "footer" => {
            heading(ui, section.title, theme);
            for line in FOOTER_LINES {
                ui.weak(*line);
            }
        }
        _ => heading(ui, section.title, theme),
    });
}

/// Returns the vertical scroll offset of the page.
fn draw_problem_statements(ui: &mut egui::Ui, theme: Theme) -> f32 {
    let output = egui::ScrollArea::vertical()
        .id_salt("problems")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| heading(ui, "Problem Statements", theme));
            for ps in PROBLEM_STATEMENTS {
                egui::Frame::group(ui.style())
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(ps.code).monospace().color(theme.accent()));
                            ui.label(egui::RichText::new(ps.title).size(18.0).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(ps.domain);
                                },
                            );
                        });
                        ui.label(ps.summary);
                    });
                ui.add_space(8.0);
            }
        });
    output.state.offset.y
}

/// Returns `true` when the "home" link was clicked.
fn draw_not_found(ui: &mut egui::Ui, path: &str) -> bool {
    let mut home = false;
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("Page not found");
        ui.label(egui::RichText::new(path).monospace());
        ui.add_space(12.0);
        if ui.button(format!("Back to {}", SECTIONS[0].title)).clicked() {
            home = true;
        }
    });
    home
}
