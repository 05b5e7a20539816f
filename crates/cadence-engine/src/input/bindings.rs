use std::collections::HashMap;

use crate::pacer::PacerCommand;

use super::types::{Key, KeyEvent};

/// Maps keys to pacer commands.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Key, PacerCommand>,
}

impl KeyBindings {
    /// Table with no bindings.
    pub fn empty() -> Self {
        Self { map: HashMap::new() }
    }

    /// Binds `key` to `command`, replacing any previous binding for `key`.
    pub fn bind(&mut self, key: Key, command: PacerCommand) -> &mut Self {
        self.map.insert(key, command);
        self
    }

    pub fn unbind(&mut self, key: Key) -> Option<PacerCommand> {
        self.map.remove(&key)
    }

    pub fn get(&self, key: Key) -> Option<PacerCommand> {
        self.map.get(&key).copied()
    }

    /// Command for `event`; only fresh presses resolve.
    pub fn resolve(&self, event: &KeyEvent) -> Option<PacerCommand> {
        if !event.is_fresh_press() {
            return None;
        }
        self.get(event.key)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind(Key::Space, PacerCommand::ToggleRender)
            .bind(Key::ArrowDown, PacerCommand::StepRender)
            .bind(Key::ArrowRight, PacerCommand::StepUpdate)
            .bind(Key::Enter, PacerCommand::ToggleUpdate)
            .bind(Key::Escape, PacerCommand::Exit)
            .bind(Key::F8, PacerCommand::ToggleDiagnostics);
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;

    #[test]
    fn default_table() {
        let b = KeyBindings::default();
        assert_eq!(b.get(Key::Space), Some(PacerCommand::ToggleRender));
        assert_eq!(b.get(Key::ArrowDown), Some(PacerCommand::StepRender));
        assert_eq!(b.get(Key::ArrowRight), Some(PacerCommand::StepUpdate));
        assert_eq!(b.get(Key::Enter), Some(PacerCommand::ToggleUpdate));
        assert_eq!(b.get(Key::Escape), Some(PacerCommand::Exit));
        assert_eq!(b.get(Key::F8), Some(PacerCommand::ToggleDiagnostics));
        assert_eq!(b.get(Key::ArrowUp), None);
    }

    #[test]
    fn releases_and_repeats_do_not_resolve() {
        let b = KeyBindings::default();
        assert_eq!(b.resolve(&KeyEvent::released(Key::Space)), None);

        let repeat = KeyEvent { key: Key::Space, state: KeyState::Pressed, repeat: true };
        assert_eq!(b.resolve(&repeat), None);

        assert_eq!(
            b.resolve(&KeyEvent::pressed(Key::Space)),
            Some(PacerCommand::ToggleRender)
        );
    }

    #[test]
    fn rebinding_replaces() {
        let mut b = KeyBindings::default();
        b.bind(Key::Q, PacerCommand::Exit);
        assert_eq!(b.unbind(Key::Escape), Some(PacerCommand::Exit));
        assert_eq!(b.resolve(&KeyEvent::pressed(Key::Q)), Some(PacerCommand::Exit));
        assert_eq!(b.resolve(&KeyEvent::pressed(Key::Escape)), None);
    }
}
