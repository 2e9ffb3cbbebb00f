//! Event System
//!
//! The simulation reports what happened during a tick through event queues
//! instead of calling into logging or rendering code. The frame loop reads
//! them after each tick; the next tick clears them.

/// A queue for events of a single type.
/// Events are collected during the frame and cleared at the start of the next.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events
#[derive(Debug, Default)]
pub struct Events {
    /// Player bounced off a platform
    pub landed: EventQueue<LandedEvent>,

    /// A platform left the bottom of the screen and was moved to the top
    pub recycled: EventQueue<RecycleEvent>,

    /// Player fell out of the world. Sent exactly once per run.
    pub game_over: EventQueue<GameOverEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.landed.clear();
        self.recycled.clear();
        self.game_over.clear();
    }
}

// =============================================================================
// Event Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandedEvent {
    /// Platform slot that was hit
    pub slot: usize,
    /// Score after the landing was counted
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecycleEvent {
    pub slot: usize,
    /// New x of the recycled platform
    pub x: f32,
    /// Score after the recycle was counted
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverEvent {
    pub final_score: u32,
    /// Ticks survived, including the final one
    pub frames: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert_eq!(queue.len(), 3);

        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.landed.send(LandedEvent { slot: 2, score: 1 });
        events.game_over.send(GameOverEvent { final_score: 1, frames: 10 });
        assert_eq!(events.landed.len(), 1);
        assert_eq!(events.landed.iter().next().map(|e| e.slot), Some(2));

        events.clear_all();
        assert!(events.landed.is_empty());
        assert!(events.game_over.is_empty());
    }
}
