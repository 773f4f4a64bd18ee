use crate::gui::labels;
use crate::lesion::metadata::Language;
use std::io;
use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(extension))
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEntry {
    Directory(PathBuf),
    Image(PathBuf),
}

impl BrowserEntry {
    pub fn path(&self) -> &Path {
        match self {
            BrowserEntry::Directory(path) | BrowserEntry::Image(path) => path,
        }
    }

    fn name(&self) -> String {
        self.path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Directories first, then supported images, each sorted by name. Hidden
/// entries and other files are left out.
pub fn list_dir(dir: &Path) -> io::Result<Vec<BrowserEntry>> {
    let mut directories = Vec::new();
    let mut images = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.is_dir() {
            directories.push(BrowserEntry::Directory(path));
        } else if is_supported_image(&path) {
            images.push(BrowserEntry::Image(path));
        }
    }

    directories.sort_by_key(BrowserEntry::name);
    images.sort_by_key(BrowserEntry::name);
    directories.extend(images);
    Ok(directories)
}

/// In-window image picker limited to `.png`, `.jpg` and `.jpeg` files.
pub struct FileBrowser {
    open: bool,
    current_dir: PathBuf,
    entries: Vec<BrowserEntry>,
    error: Option<String>,
}

impl FileBrowser {
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            open: false,
            current_dir: start_dir,
            entries: Vec::new(),
            error: None,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        let dir = self.current_dir.clone();
        self.navigate(dir);
    }

    fn navigate(&mut self, dir: PathBuf) {
        match list_dir(&dir) {
            Ok(entries) => {
                self.entries = entries;
                self.current_dir = dir;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("{}: {}", dir.display(), e));
            }
        }
    }

    /// Draws the picker when open. Returns the image the user clicked.
    pub fn show(&mut self, ctx: &egui::Context, language: Language) -> Option<PathBuf> {
        if !self.open {
            return None;
        }

        let mut open = self.open;
        let mut picked = None;
        let mut navigate_to = None;

        egui::Window::new(labels::browser_title(language))
            .open(&mut open)
            .default_size([500.0, 400.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("⬆").clicked() {
                        navigate_to = self.current_dir.parent().map(Path::to_path_buf);
                    }
                    ui.label(self.current_dir.display().to_string());
                });
                ui.separator();

                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(211, 47, 47), error);
                }

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for entry in &self.entries {
                        match entry {
                            BrowserEntry::Directory(path) => {
                                if ui.button(format!("📁 {}", entry.name())).clicked() {
                                    navigate_to = Some(path.clone());
                                }
                            }
                            BrowserEntry::Image(path) => {
                                if ui.button(format!("🖼 {}", entry.name())).clicked() {
                                    picked = Some(path.clone());
                                }
                            }
                        }
                    }
                });
            });

        if let Some(dir) = navigate_to {
            self.navigate(dir);
        }
        if picked.is_some() {
            open = false;
        }
        self.open = open;

        picked
    }
}
