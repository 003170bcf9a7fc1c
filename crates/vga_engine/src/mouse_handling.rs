use crate::Position;

/// Pointer input as delivered by the host, in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Move(Position),
    Down(Position),
    Up,
    Leave,
}

/// Entry points the host event layer calls, one per pointer event kind.
///
/// Events are handled synchronously in the order they arrive.
pub trait PointerHandler {
    fn pointer_move(&mut self, pos: Position);

    fn pointer_down(&mut self, pos: Position);

    fn pointer_up(&mut self) {}

    fn pointer_leave(&mut self) {}

    fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }
}
