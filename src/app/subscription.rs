// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window events (file drag-and-drop, Escape) to application
//! messages, and drives the periodic tick.

use super::Message;
use crate::ui::preview;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Window drag-and-drop events are always routed; Escape only while the
/// preview is open.
pub fn create_event_subscription(preview_open: bool) -> Subscription<Message> {
    let drops = event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::FileHovered(_)) => Some(Message::FilesHovered),
        event::Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    });

    if !preview_open {
        return drops;
    }

    let escape = event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::Preview(preview::Message::EscapePressed)),
        _ => None,
    });

    Subscription::batch([drops, escape])
}

/// Creates a periodic tick subscription for the loading spinner and
/// notification auto-dismiss.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
