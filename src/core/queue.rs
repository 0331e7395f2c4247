use std::sync::mpsc::{self, Receiver, Sender};

use super::interaction::PointerEvent;

/// Create a pointer queue for hosts that deliver input on another thread.
///
/// The input side keeps the [`PointerSender`]; the frame side drains the
/// [`PointerQueue`] at the start of each tick, so interaction state is only
/// ever mutated on the frame thread.
pub fn pointer_channel() -> (PointerSender, PointerQueue) {
    let (sender, receiver) = mpsc::channel();
    (PointerSender { sender }, PointerQueue { receiver })
}

/// Input-thread end of the queue
#[derive(Debug, Clone)]
pub struct PointerSender {
    sender: Sender<PointerEvent>,
}

impl PointerSender {
    /// Queue an event; returns false once the scene side has been dropped
    pub fn send(&self, event: PointerEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Frame-thread end of the queue
#[derive(Debug)]
pub struct PointerQueue {
    receiver: Receiver<PointerEvent>,
}

impl PointerQueue {
    /// Everything queued so far, in arrival order, without blocking
    pub fn drain(&self) -> impl Iterator<Item = PointerEvent> + '_ {
        self.receiver.try_iter()
    }
}
