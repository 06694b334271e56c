//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! click pairing, touch drag detection, gesture numbering) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and the engine's
//! [`execute`](crate::engine::CarouselEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mapper::{InputMapper, PointerZone};
use super::mouse::{
    ClickResult, ClickTracker, TouchMotion, TouchRelease, TouchTracker,
};
use crate::card::CardId;
use crate::carousel::ScrollDirection;
use crate::engine::CarouselCommand;
use crate::interaction::GestureId;
use crate::options::{InputOptions, KeybindingOptions};

/// Converts raw window events into [`CarouselCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = processor.handle_event(event, picked_card) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = processor.handle_key_press("ArrowLeft") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Viewport normalization, edge zones and wheel conversion.
    mapper: InputMapper,
    /// Pointer press/release pairing.
    clicks: ClickTracker,
    /// Touch tap/drag detection.
    touch: TouchTracker,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Zone of the last pointer position.
    zone: PointerZone,
    /// Gesture of the press or touch in progress.
    gesture: Option<GestureId>,
    next_gesture: u64,
}

impl InputProcessor {
    /// Create a processor for a viewport of the given size.
    #[must_use]
    pub fn new(
        options: InputOptions,
        key_bindings: KeybindingOptions,
        width: f32,
        height: f32,
    ) -> Self {
        Self {
            mapper: InputMapper::new(options, width, height),
            clicks: ClickTracker::new(),
            touch: TouchTracker::new(),
            key_bindings,
            zone: PointerZone::Center,
            gesture: None,
            next_gesture: 0,
        }
    }

    /// The viewport mapper.
    #[must_use]
    pub fn mapper(&self) -> &InputMapper {
        &self.mapper
    }

    /// Zone of the last pointer position.
    #[must_use]
    pub fn zone(&self) -> PointerZone {
        self.zone
    }

    /// Whether a touch drag is in progress.
    #[must_use]
    pub fn is_touch_dragging(&self) -> bool {
        self.touch.is_dragging()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Update the viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.mapper.resize(width, height);
    }

    /// Apply new input options and key bindings.
    pub fn set_options(&mut self, options: InputOptions, key_bindings: KeybindingOptions) {
        self.mapper.set_options(options);
        self.key_bindings = key_bindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    /// Every press is its own gesture.
    pub fn handle_key_press(&mut self, key: &str) -> Option<CarouselCommand> {
        let action = self.key_bindings.lookup(key)?;
        let gesture = Some(self.begin_gesture());
        Some(match action {
            KeyAction::StepLeft => CarouselCommand::Step {
                direction: ScrollDirection::Left,
            },
            KeyAction::StepRight => CarouselCommand::Step {
                direction: ScrollDirection::Right,
            },
            KeyAction::Confirm => CarouselCommand::ConfirmFocused { gesture },
            KeyAction::Close => CarouselCommand::Deselect { gesture },
            KeyAction::Flip => CarouselCommand::ToggleFlip,
            KeyAction::CycleVariant => CarouselCommand::CycleVariant,
        })
    }

    /// Process a raw input event and return zero or one commands.
    ///
    /// `hovered` is the card currently under the pointer (or touch point),
    /// as reported by the host's picking.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        hovered: Option<CardId>,
    ) -> Option<CarouselCommand> {
        match event {
            InputEvent::PointerMoved { x, y } => Some(self.pointer_moved(x, y)),
            InputEvent::PointerButton { button, pressed } => {
                self.pointer_button(button, pressed, hovered)
            }
            InputEvent::PointerLeft => {
                self.clicks.cancel();
                self.zone = PointerZone::Center;
                Some(CarouselCommand::PointerLeft)
            }
            InputEvent::Wheel {
                delta_x,
                delta_y,
                mode,
            } => self
                .mapper
                .wheel_impulse(delta_x, delta_y, mode)
                .map(|impulse| CarouselCommand::Scroll { impulse }),
            InputEvent::TouchStart { x, y } => {
                self.gesture = Some(self.begin_gesture());
                self.touch.start(Vec2::new(x, y));
                None
            }
            InputEvent::TouchMove { x, y } => {
                let threshold = self.mapper.options().drag_threshold_px;
                match self.touch.move_to(Vec2::new(x, y), threshold) {
                    TouchMotion::Drag(delta_px) => {
                        Some(CarouselCommand::Drag { delta_px })
                    }
                    TouchMotion::Pending => None,
                }
            }
            InputEvent::TouchEnd { .. } => self.touch_released(hovered),
            InputEvent::TouchCancel => {
                self.gesture = None;
                match self.touch.end() {
                    TouchRelease::DragEnded => Some(CarouselCommand::EndDrag),
                    TouchRelease::Tap | TouchRelease::None => None,
                }
            }
        }
    }

    /// Pointer moved: track position, classify the zone.
    fn pointer_moved(&mut self, x: f32, y: f32) -> CarouselCommand {
        let threshold = self.mapper.options().drag_threshold_px;
        self.clicks.handle_pointer_position(Vec2::new(x, y), threshold);
        self.zone = self.mapper.classify(x);
        CarouselCommand::PointerMoved {
            position: self.mapper.normalize(x, y),
            zone: self.zone,
        }
    }

    /// Primary button press/release; clicks resolve on release.
    fn pointer_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        hovered: Option<CardId>,
    ) -> Option<CarouselCommand> {
        if button != MouseButton::Left {
            return None;
        }
        if pressed {
            self.gesture = Some(self.begin_gesture());
            self.clicks.handle_press(hovered);
            return None;
        }

        let gesture = self.gesture.take();
        match self.clicks.handle_release(hovered) {
            ClickResult::NoAction => None,
            ClickResult::Card(id) => Some(CarouselCommand::Select { id, gesture }),
            ClickResult::Background => Some(
                self.zone.scroll_direction().map_or(
                    CarouselCommand::Deselect { gesture },
                    |direction| CarouselCommand::Step { direction },
                ),
            ),
        }
    }

    /// Finger lifted: a tap selects or deselects, a drag ends.
    fn touch_released(&mut self, hovered: Option<CardId>) -> Option<CarouselCommand> {
        let gesture = self.gesture.take();
        match self.touch.end() {
            TouchRelease::None => None,
            TouchRelease::DragEnded => Some(CarouselCommand::EndDrag),
            TouchRelease::Tap => Some(hovered.map_or(
                CarouselCommand::Deselect { gesture },
                |id| CarouselCommand::Select { id, gesture },
            )),
        }
    }

    fn begin_gesture(&mut self) -> GestureId {
        self.next_gesture += 1;
        GestureId(self.next_gesture)
    }
}
