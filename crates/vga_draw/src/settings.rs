use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use vga_engine::{Color, EditorLayout, PixelAddressing, Size, Symbol};

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "vga_draw";

/// Lazily initialized project directories (computed once on first access)
pub(crate) static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Persisted options, stored in `settings.toml`. Missing keys take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Font used when `--font` isn't given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Glyph size of JSON scanline tables; binary fonts carry their own.
    pub font_table_width: u32,
    pub font_table_height: u32,
    /// Glyphs offered by the editor, the rest of the font is dropped.
    pub glyph_count: usize,
    pub pixel_addressing: PixelAddressing,

    pub grid_width: i32,
    pub grid_height: i32,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub font_chooser_width: i32,
    pub font_chooser_height: i32,
    pub color_chooser_width: i32,
    pub color_chooser_height: i32,

    pub glyph: u32,
    pub foreground: u32,
    pub background: u32,

    /// `#RRGGBB` color of the hover overlay.
    pub hover_color: String,
    pub hover_alpha: u8,

    /// Write a `.spi` command stream next to every MIF file.
    pub export_spi: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let layout = EditorLayout::default();
        Self {
            font_path: None,
            font_table_width: 8,
            font_table_height: 16,
            glyph_count: 255,
            pixel_addressing: PixelAddressing::default(),
            grid_width: layout.grid_size.width,
            grid_height: layout.grid_size.height,
            canvas_width: layout.canvas_size.width,
            canvas_height: layout.canvas_size.height,
            font_chooser_width: layout.font_chooser_size.width,
            font_chooser_height: layout.font_chooser_size.height,
            color_chooser_width: layout.color_chooser_size.width,
            color_chooser_height: layout.color_chooser_size.height,
            glyph: layout.initial_symbol.glyph,
            foreground: layout.initial_symbol.foreground,
            background: layout.initial_symbol.background,
            hover_color: vga_engine::HOVER_COLOR.to_hex(),
            hover_alpha: vga_engine::HOVER_ALPHA,
            export_spi: false,
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "settings.toml";

    /// Loads `path`, or the settings file in the config directory if `path` is `None`.
    ///
    /// A missing default file yields the defaults; an explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_file() {
                Some(file) if file.exists() => file,
                _ => return Ok(Settings::default()),
            },
        };
        let txt = fs::read_to_string(&path).with_context(|| format!("Error reading settings file {}", path.display()))?;
        let settings = Self::from_toml(&txt).with_context(|| format!("Error parsing settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(txt: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(txt)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Atomically writes the settings (temp file, then rename).
    pub fn store(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let text = self.to_toml()?;
        let file_name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_else(|| Self::FILE_NAME.to_string());
        let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();
        if let Err(err) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        if let Err(err) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        log::info!("Stored settings in {}", path.display());
        Ok(())
    }

    pub fn layout(&self) -> EditorLayout {
        EditorLayout {
            grid_size: Size::new(self.grid_width, self.grid_height),
            canvas_size: Size::new(self.canvas_width, self.canvas_height),
            font_chooser_size: Size::new(self.font_chooser_width, self.font_chooser_height),
            color_chooser_size: Size::new(self.color_chooser_width, self.color_chooser_height),
            initial_symbol: Symbol::new(self.glyph, self.foreground, self.background),
        }
    }

    pub fn font_table_size(&self) -> Size {
        Size::new(self.font_table_width as i32, self.font_table_height as i32)
    }

    pub fn hover_color(&self) -> vga_engine::Result<Color> {
        Color::from_hex(&self.hover_color)
    }

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }
}
