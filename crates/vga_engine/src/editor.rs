use std::sync::Arc;

use crate::{ColorChooser, Font, FontChooser, GridRenderer, Palette, PixelBuffer, PointerEvent, PointerHandler, Size, Symbol, SymbolGrid, INITIAL_SYMBOL};

/// Surface sizes of an editing session, in pixels (grid in cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorLayout {
    pub grid_size: Size,
    pub canvas_size: Size,
    pub font_chooser_size: Size,
    pub color_chooser_size: Size,
    /// Symbol the canvas paints before anything was chosen.
    pub initial_symbol: Symbol,
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self {
            grid_size: Size::new(80, 30),
            canvas_size: Size::new(640, 480),
            font_chooser_size: Size::new(512, 64),
            color_chooser_size: Size::new(128, 32),
            initial_symbol: INITIAL_SYMBOL,
        }
    }
}

/// The surface a pointer event was delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTarget {
    Canvas,
    FontChooser,
    ForegroundChooser,
    BackgroundChooser,
}

/// One editing session: glyph chooser, foreground and background color
/// choosers and the canvas, wired so a selection updates the canvas' current symbol.
pub struct Editor {
    font_chooser: FontChooser,
    color_chooser: ColorChooser,
    bgcolor_chooser: ColorChooser,
    renderer: GridRenderer,
}

impl Editor {
    pub fn new(font: Arc<Font>, palette: Arc<Palette>, layout: &EditorLayout) -> Self {
        let renderer = GridRenderer::new(
            font.clone(),
            palette.clone(),
            SymbolGrid::new(layout.grid_size),
            PixelBuffer::new(layout.canvas_size),
        );
        renderer.set_current_symbol(layout.initial_symbol);

        let mut font_chooser = FontChooser::font(font, PixelBuffer::new(layout.font_chooser_size));
        let template = renderer.current_symbol_handle();
        font_chooser.on_choose(move |index| template.set(template.get().with_glyph(index as u32)));

        let mut color_chooser = ColorChooser::colors(palette.clone(), PixelBuffer::new(layout.color_chooser_size));
        let template = renderer.current_symbol_handle();
        color_chooser.on_choose(move |index| template.set(template.get().with_foreground(index as u32)));

        let mut bgcolor_chooser = ColorChooser::colors(palette, PixelBuffer::new(layout.color_chooser_size));
        let template = renderer.current_symbol_handle();
        bgcolor_chooser.on_choose(move |index| template.set(template.get().with_background(index as u32)));

        Self {
            font_chooser,
            color_chooser,
            bgcolor_chooser,
            renderer,
        }
    }

    /// Draws all four surfaces from scratch.
    pub fn run(&mut self) {
        self.font_chooser.render();
        self.renderer.full_redraw();
        self.color_chooser.render();
        self.bgcolor_chooser.render();
    }

    pub fn handle(&mut self, target: EditorTarget, event: PointerEvent) {
        log::trace!("{target:?}: {event:?}");
        match target {
            EditorTarget::Canvas => self.renderer.handle_event(event),
            EditorTarget::FontChooser => self.font_chooser.handle_event(event),
            EditorTarget::ForegroundChooser => self.color_chooser.handle_event(event),
            EditorTarget::BackgroundChooser => self.bgcolor_chooser.handle_event(event),
        }
    }

    pub fn memory_dump(&self) -> String {
        self.renderer.export_dump()
    }

    pub fn renderer(&self) -> &GridRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut GridRenderer {
        &mut self.renderer
    }

    pub fn font_chooser(&self) -> &FontChooser {
        &self.font_chooser
    }

    pub fn color_chooser(&self) -> &ColorChooser {
        &self.color_chooser
    }

    pub fn bgcolor_chooser(&self) -> &ColorChooser {
        &self.bgcolor_chooser
    }
}
