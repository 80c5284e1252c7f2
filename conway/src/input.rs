// input.rs - Raw window events and the actions they map to

use crate::layout::{Hit, Layout};

/// Keys the simulator reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    S,
    L,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A raw event from the windowing layer, in window pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    CloseRequested,
    PointerDown { x: f32, y: f32, button: PointerButton },
    KeyDown(Key),
}

/// A state change requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Advance one generation whether or not the simulation is paused.
    Step,
    ToggleCell { x: usize, y: usize },
    TogglePause,
    Save,
    Load,
}

/// Translate one raw event. Events that mean nothing to the simulator give `None`.
pub fn map_event(layout: &Layout, event: &InputEvent) -> Option<Action> {
    match *event {
        InputEvent::CloseRequested => Some(Action::Quit),
        InputEvent::PointerDown { x, y, button: PointerButton::Primary } => {
            match layout.hit_test(x, y)? {
                Hit::Control => Some(Action::Step),
                Hit::Cell { x, y } => Some(Action::ToggleCell { x, y }),
            }
        }
        InputEvent::PointerDown { .. } => None,
        InputEvent::KeyDown(Key::Space) => Some(Action::TogglePause),
        InputEvent::KeyDown(Key::S) => Some(Action::Save),
        InputEvent::KeyDown(Key::L) => Some(Action::Load),
        InputEvent::KeyDown(Key::Other) => None,
    }
}
