use crate::gui::file_browser::{is_supported_image, FileBrowser};
use crate::gui::labels::{self, Outcome, ResultFields};
use crate::lesion::metadata::{all_metadata, Language};
use crate::library::logger::interface::Logger;
use crate::predictor::{PredictError, Predictor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const PREVIEW_SIZE: f32 = 350.0;

pub struct SkinLesionApp {
    predictor: Predictor,
    logger: Arc<dyn Logger + Send + Sync>,
    language: Language,
    outcome: Outcome,
    preview: Option<egui::TextureHandle>,
    show_info: bool,
    browser: FileBrowser,
}

impl SkinLesionApp {
    pub fn new(
        predictor: Predictor,
        logger: Arc<dyn Logger + Send + Sync>,
        language: Language,
        start_dir: PathBuf,
    ) -> Self {
        Self {
            predictor,
            logger: logger.with_namespace("gui"),
            language,
            outcome: Outcome::Empty,
            preview: None,
            show_info: false,
            browser: FileBrowser::new(start_dir),
        }
    }

    fn process_image(&mut self, ctx: &egui::Context, path: &Path) {
        self.preview = load_preview(ctx, path);

        self.outcome = match self.predictor.predict_path(path) {
            Ok(classification) => Outcome::Classified(classification),
            Err(PredictError::MissingInput { path }) => Outcome::MissingInput(path),
            Err(PredictError::PredictionFailed(_)) => Outcome::Failed,
        };
    }

    fn dropped_image(&self, ctx: &egui::Context) -> Option<PathBuf> {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        for path in &dropped {
            if !is_supported_image(path) {
                let _ = self
                    .logger
                    .info(&format!("ignoring dropped file {}", path.display()));
            }
        }

        dropped.into_iter().find(|path| is_supported_image(path))
    }

    fn drop_zone(&self, ui: &mut egui::Ui, hovering: bool) {
        let (rect, _response) =
            ui.allocate_exact_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE), egui::Sense::hover());

        let border_color = if hovering {
            egui::Color32::from_rgb(59, 130, 246)
        } else {
            egui::Color32::from_rgb(204, 204, 204)
        };
        ui.painter().rect_filled(rect, 10.0, egui::Color32::WHITE);
        ui.painter()
            .rect_stroke(rect, 10.0, egui::Stroke::new(2.0, border_color));

        match &self.preview {
            Some(texture) => {
                let size = fit_within(texture.size_vec2(), PREVIEW_SIZE);
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter().image(
                    texture.id(),
                    egui::Rect::from_center_size(rect.center(), size),
                    uv,
                    egui::Color32::WHITE,
                );
            }
            None => {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    labels::drop_hint(self.language),
                    egui::FontId::proportional(16.0),
                    egui::Color32::from_rgb(102, 102, 102),
                );
            }
        }
    }

    fn info_window(&mut self, ctx: &egui::Context) {
        let language = self.language;

        egui::Window::new(labels::info_title(language))
            .open(&mut self.show_info)
            .default_size([650.0, 550.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for entry in all_metadata() {
                        ui.label(
                            egui::RichText::new(entry.category.code().to_uppercase())
                                .strong()
                                .size(16.0),
                        );
                        ui.label(egui::RichText::new(entry.name(language)).size(15.0));
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(labels::danger_heading(language))
                                    .color(egui::Color32::from_rgb(211, 47, 47)),
                            );
                            ui.label(
                                egui::RichText::new(entry.danger_label(language)).strong(),
                            );
                        });
                        ui.separator();
                    }
                });
            });
    }
}

impl eframe::App for SkinLesionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(path) = self.dropped_image(ctx) {
            self.process_image(ctx, &path);
        }
        if let Some(path) = self.browser.show(ctx, self.language) {
            self.process_image(ctx, &path);
        }
        let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let fields = ResultFields::render(&self.outcome, self.language);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                self.drop_zone(ui, hovering);
                ui.add_space(15.0);
                ui.vertical(|ui| {
                    for text in [&fields.result, &fields.confidence, &fields.danger] {
                        ui.add(egui::Label::new(egui::RichText::new(text).size(16.0)).wrap(true));
                        ui.add_space(10.0);
                    }
                });
            });

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                if ui.button(labels::select_button(self.language)).clicked() {
                    self.browser.open();
                }
                if ui.button(labels::info_button(self.language)).clicked() {
                    self.show_info = true;
                }
                if ui.button(labels::language_button(self.language)).clicked() {
                    self.language = self.language.toggled();
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Title(
                        labels::window_title(self.language).to_string(),
                    ));
                }
            });
        });

        if self.show_info {
            self.info_window(ctx);
        }
    }
}

fn load_preview(ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
    let image = image::open(path).ok()?;
    let thumbnail = image
        .thumbnail(PREVIEW_SIZE as u32, PREVIEW_SIZE as u32)
        .to_rgba8();
    let size = [thumbnail.width() as usize, thumbnail.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, thumbnail.as_raw());
    Some(ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR))
}

fn fit_within(size: egui::Vec2, max_side: f32) -> egui::Vec2 {
    let longest = size.x.max(size.y);
    if longest <= 0.0 {
        return egui::Vec2::ZERO;
    }
    size * (max_side / longest).min(1.0)
}
