mod app;

use eframe::egui;

use hackfest_site::config::SiteConfig;
use hackfest_site::content::{EVENT_NAME, HOST_INSTITUTION};

fn main() -> eframe::Result<()> {
    env_logger::init();

    if let Err(e) = SiteConfig::create_default() {
        log::warn!("Could not write default config: {}", e);
    }
    let config = SiteConfig::load();
    log::info!(
        "Starting {} (theme {}, scroll trigger {:?})",
        EVENT_NAME,
        config.theme.mode,
        config.navigation.scroll_trigger()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 480.0])
            .with_title(format!("{} | {}", EVENT_NAME, HOST_INSTITUTION)),
        ..Default::default()
    };

    eframe::run_native(
        EVENT_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(app::SiteApp::new(config)))),
    )
}
