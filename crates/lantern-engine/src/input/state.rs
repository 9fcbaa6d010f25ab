use std::collections::HashSet;

use crate::events::Event;

use super::Button;

/// Set of currently-held buttons, fed from press/release events.
///
/// Membership equals the net effect of the press/release sequence applied so
/// far: pressing a held button changes nothing, releasing an unheld button is
/// a no-op rather than an error.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<Button>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `button` held. Returns whether it was newly pressed.
    pub fn press(&mut self, button: Button) -> bool {
        self.held.insert(button)
    }

    /// Marks `button` released. Returns whether it was held.
    pub fn release(&mut self, button: Button) -> bool {
        self.held.remove(&button)
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    /// Routes press/release events into the set; other events are ignored.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Press(button) => {
                self.press(*button);
            }
            Event::Release(button) => {
                self.release(*button);
            }
            _ => {}
        }
    }

    pub fn held(&self) -> &HashSet<Button> {
        &self.held
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
