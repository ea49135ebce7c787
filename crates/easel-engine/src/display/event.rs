use crate::coords::Size;

/// Environment event routed to a display.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    Quit,
    /// New physical surface size in pixels.
    Resize(Size),
}

/// Control directive returned after handling an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Control {
    Continue,
    Exit,
}

/// Blocking event queue.
///
/// `next_event` blocks until an event is available. `None` means the source
/// is exhausted and the loop should stop.
pub trait EventSource {
    fn next_event(&mut self) -> Option<Event>;
}

impl<I> EventSource for I
where
    I: Iterator<Item = Event>,
{
    fn next_event(&mut self) -> Option<Event> {
        self.next()
    }
}
