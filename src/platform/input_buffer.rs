//=========================================================================
// Input Buffer
//=========================================================================
//
// Transient per-frame store between the Winit callbacks and the channel
// to the core thread.
//
// Responsibilities:
// - Keep input events in arrival order
// - Drop immediate duplicates (e.g. a key-down reported twice)
// - Hand the whole frame over in one `drain()`
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

#[derive(Debug)]
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    const BASE_CAPACITY: usize = 64;

    pub(crate) fn new() -> Self {
        Self {
            events: Vec::with_capacity(Self::BASE_CAPACITY),
        }
    }

    /// Appends an event unless it repeats the previous one.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Returns this frame's events, or `None` if there were none.
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(std::mem::replace(
            &mut self.events,
            Vec::with_capacity(Self::BASE_CAPACITY),
        ))
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyE));
        buffer.push(key_down(KeyCode::KeyE));

        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn press_release_press_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyE));
        buffer.push(key_up(KeyCode::KeyE));
        buffer.push(key_down(KeyCode::KeyE));

        assert_eq!(
            buffer.drain(),
            Some(vec![key_down(KeyCode::KeyE), key_up(KeyCode::KeyE), key_down(KeyCode::KeyE)])
        );
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.drain(), None);

        buffer.push(key_down(KeyCode::Space));
        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None);
    }
}
