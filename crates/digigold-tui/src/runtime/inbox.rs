//! Inbox channel types for async event collection.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
