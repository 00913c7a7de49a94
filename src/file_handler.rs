use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_EXTENSION, DEFAULT_FILE_NAME};

/// Where save and load ask the user for a path.
///
/// `None` means the user cancelled.
pub trait FileDialogs {
    fn save_path(&mut self) -> Option<PathBuf>;

    fn open_path(&mut self) -> Option<PathBuf>;
}

/// Blocking native dialogs
#[derive(Debug, Default)]
pub struct NativeFileDialogs {
    /// Directory of the last chosen file, used as the starting directory next time
    last_dir: Option<PathBuf>,
}

impl NativeFileDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new()
            .add_filter("PNG files", &["png"])
            .add_filter("All files", &["*"]);
        match &self.last_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember(&mut self, path: &Path) {
        self.last_dir = path.parent().map(Path::to_path_buf);
    }
}

impl FileDialogs for NativeFileDialogs {
    fn save_path(&mut self) -> Option<PathBuf> {
        let path = self
            .dialog()
            .set_title("Save drawing")
            .set_file_name(DEFAULT_FILE_NAME)
            .save_file()?;
        self.remember(&path);
        Some(with_default_extension(path))
    }

    fn open_path(&mut self) -> Option<PathBuf> {
        let path = self.dialog().set_title("Load drawing").pick_file()?;
        self.remember(&path);
        Some(path)
    }
}

/// Appends `.png` to a save path that has no extension
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
