#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use vga_engine::{formats::FileFormat, Editor, Font, FontChooser, Palette, PixelBuffer, Size};

mod script;
mod settings;

pub use settings::*;

#[derive(Parser, Debug)]
#[command(version, about = "Headless host for the vga_engine glyph editor", long_about = None)]
pub struct Args {
    /// Settings file to use instead of the one in the config directory
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Log to a rotating file in the config directory instead of stderr
    #[arg(long, global = true, default_value_t = false)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replays a pointer event script and exports the resulting grid
    Replay {
        /// Event script, one `move|down|up|leave|glyph|fg|bg` command per line
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Font file (JSON scanline table, PSF or raw dump)
        #[arg(long, value_name = "PATH")]
        font: Option<PathBuf>,

        /// Write the memory initialization file here (stdout if no output is given)
        #[arg(long, value_name = "PATH")]
        mif: Option<PathBuf>,

        /// Write the SPIVGA command stream here
        #[arg(long, value_name = "PATH")]
        spi: Option<PathBuf>,

        /// Write a rendered image of the grid here
        #[arg(long, value_name = "PATH")]
        png: Option<PathBuf>,
    },

    /// Renders the glyph chooser of a font as PNG
    Chooser {
        #[arg(long, value_name = "PATH")]
        font: Option<PathBuf>,

        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Prints the effective settings as TOML
    Config {
        /// Also store them in the settings file
        #[arg(long, default_value_t = false)]
        save: bool,
    },
}

fn get_log_dir() -> Option<PathBuf> {
    if let Some(dir) = Settings::config_dir() {
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        return Some(dir);
    }
    None
}

fn init_logging(to_file: bool) -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log specification: {err}");
            return None;
        }
    };
    let log_dir = if to_file { get_log_dir() } else { None };
    let logger = if let Some(log_dir) = log_dir {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("vga_draw").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(Duplicate::Warn)
    } else {
        if to_file {
            eprintln!("Failed to create log file");
        }
        logger.log_to_stderr()
    };
    match logger.start() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn load_font(settings: &Settings, path: Option<&Path>) -> anyhow::Result<Arc<Font>> {
    let Some(path) = path.or(settings.font_path.as_deref()) else {
        anyhow::bail!("No font given, use --font or set font_path in {}", Settings::FILE_NAME);
    };
    let mut font = Font::load(path, settings.font_table_size()).with_context(|| format!("Loading font {}", path.display()))?;
    font.truncate(settings.glyph_count);
    let font = font.with_addressing(settings.pixel_addressing);
    log::info!("Loaded font '{}' ({} glyphs, {})", font.name, font.len(), font.size());
    Ok(Arc::new(font))
}

fn write_file(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    fs::write(path, data).with_context(|| format!("Writing {}", path.display()))?;
    log::info!("Wrote {} ({} bytes)", path.display(), data.len());
    Ok(())
}

fn replay(settings: &Settings, script: &Path, font: Option<&Path>, mif: Option<PathBuf>, spi: Option<PathBuf>, png: Option<PathBuf>) -> anyhow::Result<()> {
    let text = fs::read_to_string(script).with_context(|| format!("Reading script {}", script.display()))?;
    let steps = script::parse(&text).with_context(|| format!("Parsing script {}", script.display()))?;

    let font = load_font(settings, font)?;
    let palette = Arc::new(Palette::vga_editor());
    let mut editor = Editor::new(font.clone(), palette.clone(), &settings.layout());
    editor.renderer_mut().set_hover_style(settings.hover_color()?, settings.hover_alpha);
    editor.run();

    for step in &steps {
        log::trace!("line {}: {:?} {:?}", step.line, step.target, step.event);
        editor.handle(step.target, step.event);
    }
    log::info!("Replayed {} events from {}", steps.len(), script.display());

    let spi = spi.or_else(|| mif.as_ref().filter(|_| settings.export_spi).map(|mif| mif.with_extension(FileFormat::Spi.extension())));
    let outputs: Vec<(FileFormat, PathBuf)> = [(FileFormat::Mif, mif), (FileFormat::Spi, spi), (FileFormat::Png, png)]
        .into_iter()
        .filter_map(|(format, path)| path.map(|path| (format, path)))
        .collect();

    if outputs.is_empty() {
        std::io::stdout().write_all(editor.memory_dump().as_bytes())?;
        return Ok(());
    }

    let grid = editor.renderer().grid();
    for (format, path) in outputs {
        let data = format.to_bytes(grid, &font, &palette).with_context(|| format!("Exporting {format}"))?;
        write_file(&path, &data)?;
    }
    Ok(())
}

fn render_chooser(settings: &Settings, font: Option<&Path>, output: &Path) -> anyhow::Result<()> {
    let font = load_font(settings, font)?;
    let size = Size::new(settings.font_chooser_width, settings.font_chooser_height);
    let mut chooser = FontChooser::font(font, PixelBuffer::new(size));
    chooser.render();
    let data = chooser.surface().to_png()?;
    write_file(output, &data)
}

fn show_config(settings: &Settings, config: Option<&Path>, save: bool) -> anyhow::Result<()> {
    print!("{}", settings.to_toml()?);
    if save {
        let Some(path) = config.map(Path::to_path_buf).or_else(Settings::config_file) else {
            anyhow::bail!("Cannot determine config directory for saving settings");
        };
        settings.store(&path)?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = init_logging(args.log_file);

    log::info!("Starting vga_draw {}", env!("CARGO_PKG_VERSION"));
    let settings = Settings::load(args.config.as_deref())?;

    match args.command {
        Command::Replay { script, font, mif, spi, png } => replay(&settings, &script, font.as_deref(), mif, spi, png),
        Command::Chooser { font, output } => render_chooser(&settings, font.as_deref(), &output),
        Command::Config { save } => show_config(&settings, args.config.as_deref(), save),
    }
}
