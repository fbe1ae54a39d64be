// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events not captured by a widget are offered to the lightbox;
//! the spinner ticks only while an overlay is loading.

use super::Message;
use crate::lightbox::LightboxKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Maps a key to the lightbox key it stands for, if any.
#[must_use]
pub fn lightbox_key(key: &Key) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                lightbox_key(&key).map(Message::KeyPressed)
            }
            _ => None,
        }
    })
}

pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::SpinnerTick)
    } else {
        Subscription::none()
    }
}
