//! Event entry points and command dispatch for CarouselEngine.

use glam::Vec2;

use super::{CarouselCommand, CarouselEngine};
use crate::input::{InputEvent, PointerZone};

impl CarouselEngine {
    /// Process a platform-agnostic input event.
    ///
    /// The event is interpreted against the card last reported through
    /// [`set_hovered`](Self::set_hovered) and the resulting command, if
    /// any, is executed immediately.
    ///
    /// ```ignore
    /// engine.set_hovered(picking.card_under(x, y));
    /// engine.handle_input(InputEvent::PointerMoved { x, y });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(cmd) = self.input.handle_event(event, self.hovered) {
            self.execute(cmd);
        }
    }

    /// Process a key press by key code string (DOM `KeyboardEvent.code`
    /// or winit `KeyCode` debug name). Unbound keys are ignored.
    pub fn handle_key_press(&mut self, key: &str) {
        if let Some(cmd) = self.input.handle_key_press(key) {
            self.execute(cmd);
        }
    }

    /// Execute a command. This only updates pending state; the visible
    /// effect happens on the next [`tick`](Self::tick).
    pub fn execute(&mut self, cmd: CarouselCommand) {
        if cmd.is_user_input() {
            self.camera.exit_intro();
        }
        match cmd {
            CarouselCommand::PointerMoved { position, zone } => {
                self.pointer = position;
                self.zone = zone;
                self.scroll.set_edge_hover(zone.scroll_direction());
            }
            CarouselCommand::PointerLeft => {
                self.pointer = Vec2::ZERO;
                self.zone = PointerZone::Center;
                self.hovered = None;
                self.scroll.set_edge_hover(None);
            }
            CarouselCommand::Scroll { impulse } => self.scroll.wheel(impulse),
            CarouselCommand::Step { direction } => self.scroll.step(direction),
            CarouselCommand::Drag { delta_px } => self.scroll.drag(delta_px),
            CarouselCommand::EndDrag => self.scroll.end_drag(),
            CarouselCommand::Select { id, gesture } => {
                let _ = self.select_with(id, gesture);
            }
            CarouselCommand::Deselect { gesture } => {
                let _ = self.deselect_with(gesture);
            }
            CarouselCommand::ConfirmFocused { gesture } => {
                let _ = self.confirm_focused(gesture);
            }
            CarouselCommand::ToggleFlip => {
                if let Some(id) = self.selected() {
                    let _ = self.toggle_flip(id);
                }
            }
            CarouselCommand::CycleVariant => {
                let _ = self.cycle_selected_variant();
            }
            CarouselCommand::SetVariant { id, index } => {
                let _ = self.set_variant(id, index);
            }
        }
    }
}
