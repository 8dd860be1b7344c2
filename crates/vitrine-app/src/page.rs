//! The landing page hosting the image viewer.

use std::rc::Rc;

use egui::text::LayoutJob;
use egui::{Align, Color32, CornerRadius, FontId, Frame, Layout, Margin, RichText, Stroke, TextFormat, Ui};
use vitrine_core::{ImageViewer, KeyHook};
use vitrine_widgets::{
    footer_frame, header_frame, muted_text, section_label, separator, sizing, CtaButton, NavLink,
    ZoomableImage, BLUE, GRAY,
};

use crate::config::AppConfig;
use crate::error::AppResult;

const NAV_LINKS: [&str; 3] = ["Features", "Pricing", "Support"];
const PRODUCT_LINKS: [&str; 5] = [
    "Solutions",
    "Features",
    "Pricing Plans",
    "Analytics",
    "Support Center",
];
const LEGAL_LINKS: [&str; 5] = [
    "Team",
    "Terms of Service",
    "Privacy Policy",
    "Cookies",
    "Refunds",
];

/// Landing page state.
pub struct LandingPage {
    viewer: ImageViewer,
    newsletter_email: String,
}

impl LandingPage {
    /// Build the page and its showcase viewer.
    pub fn new(config: &AppConfig, hook: Rc<dyn KeyHook>) -> AppResult<Self> {
        let showcase = config.showcase.clone();
        #[cfg(target_arch = "wasm32")]
        let showcase = vitrine_core::ImageProps {
            src: crate::web::resolve_asset_url(&showcase.src),
            ..showcase
        };

        let viewer = ImageViewer::new(showcase, config.viewer.clone(), hook)?;
        Ok(Self {
            viewer,
            newsletter_email: String::new(),
        })
    }

    /// Whether the image overlay is showing.
    pub fn is_viewer_open(&self) -> bool {
        self.viewer.is_open()
    }

    /// Render one frame of the page.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(Frame::new().fill(GRAY.level(100)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.header(ui);
                        self.hero(ui);
                        self.showcase(ui);
                        self.footer(ui);
                    });
            });
    }

    fn header(&self, ui: &mut Ui) {
        header_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("◆")
                        .size(18.0)
                        .color(BLUE.level(600)),
                );
                ui.label(
                    RichText::new("Company")
                        .size(18.0)
                        .strong()
                        .color(GRAY.level(900)),
                );

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if CtaButton::secondary("Sign In →").height(36.0).show(ui) {
                        log::info!("Sign in requested");
                    }
                    ui.add_space(24.0);
                    for link in NAV_LINKS.iter().rev() {
                        if NavLink::new(link).show(ui) {
                            log::debug!("Navigate: {}", link);
                        }
                        ui.add_space(16.0);
                    }
                });
            });
        });
    }

    fn hero(&self, ui: &mut Ui) {
        Frame::new()
            .fill(Color32::WHITE)
            .inner_margin(Margin::symmetric(24, 64))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(sizing::CONTENT_WIDTH);

                    Frame::new()
                        .fill(GRAY.level(100))
                        .stroke(Stroke::new(1.0, GRAY.level(200)))
                        .corner_radius(CornerRadius::same(2))
                        .inner_margin(Margin::symmetric(8, 4))
                        .show(ui, |ui| {
                            ui.label(RichText::new("Extra Info").size(13.0).color(GRAY.level(800)));
                        });
                    ui.add_space(8.0);

                    let mut title = LayoutJob::default();
                    let font = FontId::proportional(36.0);
                    title.append(
                        "Hero title ",
                        0.0,
                        TextFormat::simple(font.clone(), Color32::BLACK),
                    );
                    title.append(
                        "about what you do",
                        0.0,
                        TextFormat::simple(font, BLUE.level(600)),
                    );
                    ui.label(title);
                    ui.add_space(16.0);

                    ui.label(
                        RichText::new(
                            "Additional information explaining what your service provides \
                             and how it solves your customers’ problems.",
                        )
                        .size(18.0)
                        .color(GRAY.level(700)),
                    );
                    ui.add_space(32.0);

                    ui.horizontal(|ui| {
                        // Rough width of both buttons
                        let buttons_width = 260.0;
                        ui.add_space(((ui.available_width() - buttons_width) / 2.0).max(0.0));
                        if CtaButton::primary("Get Started").height(48.0).show(ui) {
                            log::info!("Get started requested");
                        }
                        ui.add_space(12.0);
                        if CtaButton::secondary("Learn more").height(48.0).show(ui) {
                            log::info!("Learn more requested");
                        }
                    });
                });
            });
    }

    fn showcase(&mut self, ui: &mut Ui) {
        Frame::new()
            .inner_margin(Margin::symmetric(24, 64))
            .show(ui, |ui| {
                Frame::new()
                    .fill(GRAY.level(50))
                    .stroke(Stroke::new(2.0, GRAY.level(200)))
                    .corner_radius(CornerRadius::same(12))
                    .inner_margin(Margin::symmetric(16, 96))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            let response = ZoomableImage::new(&mut self.viewer)
                                .id_salt("showcase")
                                .show(ui);
                            if response.opened() || response.closed() {
                                ui.ctx().request_repaint();
                            }
                        });
                    });
            });
    }

    fn footer(&mut self, ui: &mut Ui) {
        footer_frame().show(ui, |ui| {
            ui.columns(3, |columns| {
                link_column(&mut columns[0], "Products", &PRODUCT_LINKS);
                link_column(&mut columns[1], "Legal", &LEGAL_LINKS);

                let ui = &mut columns[2];
                section_label(ui, "Company Inc");
                muted_text(ui, "San Francisco, CA 85214");
                ui.add_space(16.0);
                section_label(ui, "Join Our Newsletter");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.newsletter_email)
                            .hint_text("Enter your email")
                            .desired_width(180.0),
                    );
                    if CtaButton::primary("Subscribe").height(32.0).show(ui) {
                        log::info!("Newsletter subscription requested");
                    }
                });
            });

            separator(ui);
            muted_text(ui, "© Company Inc");
        });
    }
}

fn link_column(ui: &mut Ui, title: &str, links: &[&str]) {
    section_label(ui, title);
    for link in links {
        if NavLink::new(link).show(ui) {
            log::debug!("Navigate: {}", link);
        }
        ui.add_space(6.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::{ImageProps, KeyHookRegistry, NoopKeyHook, PropsError, ViewerError};

    use crate::error::AppError;

    fn run_frame(page: &mut LandingPage, ctx: &egui::Context) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| page.show(ctx));
    }

    #[test]
    fn test_page_starts_closed() {
        let page = LandingPage::new(&AppConfig::default(), Rc::new(NoopKeyHook)).unwrap();
        assert!(!page.is_viewer_open());
    }

    #[test]
    fn test_invalid_showcase_rejected() {
        let config = AppConfig {
            showcase: ImageProps::new("", "Attractive png", 2514, 1406),
            ..AppConfig::default()
        };
        let result = LandingPage::new(&config, Rc::new(NoopKeyHook));
        assert!(matches!(
            result,
            Err(AppError::Viewer(ViewerError::Props(PropsError::EmptySource)))
        ));
    }

    #[test]
    fn test_frames_render_without_input() {
        let registry = KeyHookRegistry::new();
        let mut page = LandingPage::new(&AppConfig::default(), Rc::new(registry.clone())).unwrap();
        let ctx = egui::Context::default();

        run_frame(&mut page, &ctx);
        run_frame(&mut page, &ctx);

        assert!(!page.is_viewer_open());
        assert_eq!(registry.listener_count(), 0);
    }
}
