//! Event bridge from the picker and gesture handlers to the controller.
//!
//! The color picker reports changes from its own low-latency context, which
//! may be any thread. Nothing there touches controller state directly:
//! [`PickerHandle`] posts a [`ControlEvent`] onto an unbounded queue and the
//! task that owns the controller drains it in order.

use tokio::sync::mpsc;

/// Inbound events the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The UI wants a full snapshot of the current state.
    RequestState,
    /// The picker settled on a new color, in hex form.
    ColorSelected { hex: String },
    /// Short press on the control surface (collapse).
    Press,
    /// Long press on the control surface (expand).
    LongPress,
}

/// Errors from posting onto the event queue.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("controller event queue is closed")]
    Closed,
}

/// Cloneable, thread-safe sender side of the event queue.
#[derive(Debug, Clone)]
pub struct PickerHandle {
    tx: mpsc::UnboundedSender<ControlEvent>,
}

impl PickerHandle {
    /// Post any event.
    pub fn send(&self, event: ControlEvent) -> Result<(), BridgeError> {
        self.tx.send(event).map_err(|_| BridgeError::Closed)
    }

    /// Report a color chosen in the picker.
    pub fn select(&self, hex: impl Into<String>) -> Result<(), BridgeError> {
        self.send(ControlEvent::ColorSelected { hex: hex.into() })
    }

    pub fn press(&self) -> Result<(), BridgeError> {
        self.send(ControlEvent::Press)
    }

    pub fn long_press(&self) -> Result<(), BridgeError> {
        self.send(ControlEvent::LongPress)
    }
}

/// Receiver side of the event queue, owned by the controller's task.
#[derive(Debug)]
pub struct EventQueue {
    rx: mpsc::UnboundedReceiver<ControlEvent>,
}

impl EventQueue {
    /// Wait for the next event. `None` once every handle is dropped and the
    /// queue is empty.
    pub async fn next(&mut self) -> Option<ControlEvent> {
        self.rx.recv().await
    }
}

/// Create a connected handle/queue pair.
pub fn event_channel() -> (PickerHandle, EventQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (PickerHandle { tx }, EventQueue { rx })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_events_arrive_in_order_across_threads() {
        let (handle, mut queue) = event_channel();

        let picker = handle.clone();
        std::thread::spawn(move || {
            picker.select("#111111").unwrap();
            picker.long_press().unwrap();
            picker.select("#222222").unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(
            queue.next().await,
            Some(ControlEvent::ColorSelected { hex: "#111111".into() })
        );
        assert_eq!(queue.next().await, Some(ControlEvent::LongPress));
        assert_eq!(
            queue.next().await,
            Some(ControlEvent::ColorSelected { hex: "#222222".into() })
        );
    }

    #[tokio::test]
    async fn test_queue_ends_when_handles_drop() {
        let (handle, mut queue) = event_channel();
        handle.press().unwrap();
        drop(handle);
        assert_eq!(queue.next().await, Some(ControlEvent::Press));
        assert_eq!(queue.next().await, None);
    }

    #[test]
    fn test_send_after_queue_dropped_is_closed() {
        let (handle, queue) = event_channel();
        drop(queue);
        assert!(matches!(handle.select("#000000"), Err(BridgeError::Closed)));
    }
}
