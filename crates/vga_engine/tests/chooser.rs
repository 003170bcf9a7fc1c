use std::{cell::RefCell, rc::Rc};

use pretty_assertions::assert_eq;
use vga_engine::{ColorChooser, FontChooser, PixelBuffer, PointerEvent, PointerHandler, Position};

mod common;
use common::*;

const BLACK: [u8; 4] = [0, 0, 0, 0xFF];

fn color_chooser() -> ColorChooser {
    let mut chooser = ColorChooser::colors(palette(), PixelBuffer::new((128, 32)));
    chooser.render();
    chooser
}

fn recorder(chooser: &mut ColorChooser) -> Rc<RefCell<Vec<usize>>> {
    let chosen = Rc::new(RefCell::new(Vec::new()));
    let sink = chosen.clone();
    chooser.on_choose(move |index| sink.borrow_mut().push(index));
    chosen
}

#[test]
fn test_render_swatches() {
    let chooser = color_chooser();
    let palette = palette();
    assert_eq!(8, chooser.cells_per_row());
    for index in 0..16 {
        let pos = Position::new((index % 8) * 16 + 8, (index / 8) * 16 + 8);
        assert_eq!(Some(rgba(&palette, index as u32)), chooser.surface().pixel(pos));
    }
}

#[test]
fn test_swatches_past_palette_are_black() {
    let mut chooser = ColorChooser::colors(palette(), PixelBuffer::new((128, 48)));
    chooser.render();
    assert_eq!(Some(BLACK), chooser.surface().pixel((8, 40)));
    assert_eq!(Some(BLACK), chooser.surface().pixel((120, 40)));
}

#[test]
fn test_click_reports_index() {
    let mut chooser = color_chooser();
    let chosen = recorder(&mut chooser);
    assert_eq!(Some(1), chooser.select_at(Position::new(20, 5)));
    assert_eq!(Some(9), chooser.select_at(Position::new(20, 20)));
    assert_eq!(vec![1, 9], *chosen.borrow());
    assert_eq!(Position::new(1, 1), chooser.selected_cell());
}

#[test]
fn test_click_on_selected_cell_is_ignored() {
    let mut chooser = color_chooser();
    let chosen = recorder(&mut chooser);
    // selection starts on cell 0
    assert_eq!(None, chooser.select_at(Position::new(3, 3)));
    assert_eq!(Some(5), chooser.select_at(Position::new(85, 2)));
    assert_eq!(None, chooser.select_at(Position::new(95, 15)));
    assert_eq!(vec![5], *chosen.borrow());
}

#[test]
fn test_clicks_outside_the_cells_are_ignored() {
    let mut chooser = color_chooser();
    let chosen = recorder(&mut chooser);
    let before = chooser.surface().clone();
    assert_eq!(None, chooser.select_at(Position::new(-5, 20)));
    assert_eq!(None, chooser.select_at(Position::new(130, 0)));
    assert_eq!(None, chooser.select_at(Position::new(20, 32)));
    assert_eq!(None, chooser.select_at(Position::new(20, -1)));
    assert!(chosen.borrow().is_empty());
    assert_eq!(Position::new(0, 0), chooser.selected_cell());
    assert!(before == *chooser.surface());
}

#[test]
fn test_last_registration_wins() {
    let mut chooser = color_chooser();
    let first = recorder(&mut chooser);
    let second = recorder(&mut chooser);
    chooser.select_at(Position::new(50, 5));
    assert!(first.borrow().is_empty());
    assert_eq!(vec![3], *second.borrow());
}

#[test]
fn test_selection_without_callback() {
    let mut chooser = color_chooser();
    assert_eq!(Some(3), chooser.select_at(Position::new(50, 5)));
}

#[test]
fn test_selection_outline() {
    let mut chooser = color_chooser();
    let blue = rgba(&palette(), 3);
    chooser.select_at(Position::new(50, 5));
    assert_eq!(Some(BLACK), chooser.surface().pixel((48, 0)));
    assert_eq!(Some(BLACK), chooser.surface().pixel((63, 15)));
    assert_eq!(Some(blue), chooser.surface().pixel((50, 5)));

    // the previous selection is restored
    chooser.select_at(Position::new(20, 20));
    assert_eq!(Some(blue), chooser.surface().pixel((48, 0)));
    assert_eq!(Some(blue), chooser.surface().pixel((63, 15)));
}

#[test]
fn test_pointer_events() {
    let mut chooser = color_chooser();
    let chosen = recorder(&mut chooser);
    chooser.handle_event(PointerEvent::Move(Position::new(50, 5)));
    chooser.handle_event(PointerEvent::Up);
    chooser.handle_event(PointerEvent::Leave);
    assert!(chosen.borrow().is_empty());
    chooser.handle_event(PointerEvent::Down(Position::new(50, 5)));
    assert_eq!(vec![3], *chosen.borrow());
}

#[test]
fn test_font_chooser() {
    let mut chooser = FontChooser::font(test_font(), PixelBuffer::new((512, 64)));
    chooser.render();
    assert_eq!(64, chooser.cells_per_row());
    assert_eq!(Some(BLACK), chooser.surface().pixel((8, 0)));
    assert_eq!(Some([0xFF, 0xFF, 0xFF, 0xFF]), chooser.surface().pixel((9, 0)));
    // glyphs past the font draw glyph 0
    assert_eq!(Some(BLACK), chooser.surface().pixel((41, 3)));

    let chosen = Rc::new(RefCell::new(Vec::new()));
    let sink = chosen.clone();
    chooser.on_choose(move |index| sink.borrow_mut().push(index));
    assert_eq!(Some(133), chooser.select_at(Position::new(8 * 5 + 1, 16 * 2 + 3)));
    assert_eq!(Some(1), chooser.select_at(Position::new(9, 0)));
    assert_eq!(vec![133, 1], *chosen.borrow());

    // selected glyph gets the translucent green overlay
    assert_eq!(Some([128, 0xFF, 128, 0xFF]), chooser.surface().pixel((9, 0)));
    assert_eq!(Some([0, 127, 0, 0xFF]), chooser.surface().pixel((8, 0)));
}
