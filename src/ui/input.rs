//! Viewport-Input-Handling: egui-Events → `InputEvent` → `AppIntent`.
//!
//! Pro Frame wird die egui-Eingabe in eine endliche Liste diskreter Events
//! überführt. Bildschirmkoordinaten (Ursprung oben links) werden erst beim
//! Übergang in Intents in den Y-up-Raum des Kerns umgerechnet.

use glam::Vec2;

use super::keyboard::{intent_for_key, EditorKey};
use crate::app::AppIntent;

/// Maustaste eines Klick-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste (erzeugt und selektiert)
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
    /// Weitere Tasten
    Other,
}

impl From<egui::PointerButton> for PointerButton {
    fn from(button: egui::PointerButton) -> Self {
        match button {
            egui::PointerButton::Primary => PointerButton::Primary,
            egui::PointerButton::Secondary => PointerButton::Secondary,
            egui::PointerButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

/// Diskretes Eingabe-Event eines Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Fenster soll geschlossen werden
    Quit,
    /// Maustaste gedrückt; `screen_pos` relativ zur Viewport-Ecke oben links
    PointerDown {
        screen_pos: Vec2,
        button: PointerButton,
    },
    /// Zeiger bewegt; `screen_pos` relativ zur Viewport-Ecke oben links
    PointerMoved { screen_pos: Vec2 },
    /// Belegte Taste gedrückt
    KeyDown { key: EditorKey },
}

/// Rechnet Bildschirmkoordinaten (Y nach unten) in Kernkoordinaten (Y nach oben) um.
pub fn screen_to_world(screen_pos: Vec2, viewport_height: f32) -> Vec2 {
    Vec2::new(screen_pos.x, viewport_height - screen_pos.y)
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Debug, Default)]
pub struct InputState {
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Events eines Frames aus der egui-Eingabe.
    ///
    /// Zeiger-Events außerhalb von `viewport` werden verworfen.
    pub fn collect_events(input: &egui::InputState, viewport: egui::Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let relative = |pos: egui::Pos2| Vec2::new(pos.x - viewport.min.x, pos.y - viewport.min.y);

        for event in &input.events {
            match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let Some(key) = EditorKey::from_egui(*key) {
                        events.push(InputEvent::KeyDown { key });
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } if viewport.contains(*pos) => events.push(InputEvent::PointerDown {
                    screen_pos: relative(*pos),
                    button: (*button).into(),
                }),
                egui::Event::PointerMoved(pos) if viewport.contains(*pos) => {
                    events.push(InputEvent::PointerMoved {
                        screen_pos: relative(*pos),
                    })
                }
                _ => {}
            }
        }

        if input.viewport().close_requested() {
            events.push(InputEvent::Quit);
        }
        events
    }

    /// Übersetzt die Events eines Frames in AppIntents.
    ///
    /// Eine geänderte Viewport-Größe wird als erstes Intent gemeldet.
    /// Nur die Primärtaste erzeugt Klick-Intents.
    pub fn events_to_intents(
        &mut self,
        events: &[InputEvent],
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut intents = Vec::with_capacity(events.len() + 1);

        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            intents.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        let height = viewport_size[1];
        for event in events {
            match *event {
                InputEvent::Quit => intents.push(AppIntent::ExitRequested),
                InputEvent::PointerDown {
                    screen_pos,
                    button: PointerButton::Primary,
                } => intents.push(AppIntent::ViewportClicked {
                    world_pos: screen_to_world(screen_pos, height),
                }),
                InputEvent::PointerDown { .. } => {}
                InputEvent::PointerMoved { screen_pos } => intents.push(AppIntent::PointerMoved {
                    world_pos: screen_to_world(screen_pos, height),
                }),
                InputEvent::KeyDown { key } => intents.push(intent_for_key(key)),
            }
        }
        intents
    }
}
