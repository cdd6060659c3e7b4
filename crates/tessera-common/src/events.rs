use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{PaneId, TabId};

/// Notifications fired into the chrome collaborators (tab bar, window title,
/// dialogs). Published after the tree mutation that caused them completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PaneOpened(PaneId),
    PaneClosed(PaneId),
    PaneFocused { tab: TabId, pane: PaneId },
    ZoomChanged { pane: PaneId, zoomed: bool },
    TabOpened(TabId),
    TabClosed(TabId),
    TabSelected(TabId),
    TabTitleChanged { tab: TabId, title: String },
    TabTooltipChanged { tab: TabId, tooltip: String },
    WindowTitleChanged(String),
    WindowSubtitleChanged(String),
    WindowClosed,
    CloseConfirmationRequested(PaneId),
    ClipboardConfirmationRequested { pane: PaneId, confirmation: u64 },
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "publish");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::WindowClosed);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, Event::WindowClosed);
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::TabOpened(TabId(1)));

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert_eq!(e1, Event::TabOpened(TabId(1)));
        assert_eq!(e2, Event::TabOpened(TabId(1)));
    }

    #[tokio::test]
    async fn pane_events_keep_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let pane = PaneId(1);

        bus.publish(Event::PaneOpened(pane));
        bus.publish(Event::PaneFocused {
            tab: TabId(1),
            pane,
        });
        bus.publish(Event::PaneClosed(pane));

        assert!(matches!(rx.recv().await.unwrap(), Event::PaneOpened(id) if id == pane));
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::PaneFocused { pane: id, .. } if id == pane
        ));
        assert!(matches!(rx.recv().await.unwrap(), Event::PaneClosed(id) if id == pane));
    }

    #[tokio::test]
    async fn title_events() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::TabTitleChanged {
            tab: TabId(2),
            title: "vim".into(),
        });
        bus.publish(Event::WindowTitleChanged("vim".into()));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::TabTitleChanged { ref title, .. } if title == "vim"));
        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, Event::WindowTitleChanged(ref title) if title == "vim"));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::WindowClosed);
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        let _rx3 = bus.subscribe();

        let count = bus.publish(Event::WindowClosed);
        assert_eq!(count, 3);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
