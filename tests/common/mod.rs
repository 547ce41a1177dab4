// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.

#![allow(dead_code)]

use iced_banners::animation::{
    AnimationDriver, AnimationKind, AnimationRequest, Completion, TimedDriver,
};
use iced_banners::coordinator::{Coordinator, LifecycleEvent, Settings};
use iced_banners::domain::banner::BannerId;
use iced_banners::{Banner, BannerOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::broadcast::Receiver;

/// Timed driver that also records every request it receives.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    inner: TimedDriver,
    log: Mutex<Vec<AnimationRequest>>,
}

impl RecordingDriver {
    pub fn requests(&self) -> Vec<AnimationRequest> {
        self.log.lock().expect("log lock").clone()
    }

    pub fn requests_for(&self, banner: BannerId) -> Vec<AnimationRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.banner == banner)
            .collect()
    }

    pub fn count(&self, banner: BannerId, kind: AnimationKind) -> usize {
        self.requests_for(banner)
            .iter()
            .filter(|request| request.kind == kind)
            .count()
    }
}

impl AnimationDriver for RecordingDriver {
    fn animate(&self, request: AnimationRequest, completion: Completion) {
        self.log.lock().expect("log lock").push(request.clone());
        self.inner.animate(request, completion);
    }
}

pub struct Harness {
    pub coordinator: Coordinator,
    pub driver: Arc<RecordingDriver>,
    pub events: Receiver<LifecycleEvent>,
}

impl Harness {
    pub fn new() -> Self {
        let driver = Arc::new(RecordingDriver::default());
        let coordinator = Coordinator::start(Settings::default(), driver.clone())
            .expect("tests run inside a runtime");
        let events = coordinator.subscribe();
        Self {
            coordinator,
            driver,
            events,
        }
    }

    pub fn banner(&self, options: BannerOptions) -> Banner {
        Banner::create(&self.coordinator, "Title", "Message", None, options)
            .expect("overlay available")
    }

    /// Events published since the last drain.
    pub fn drain(&mut self) -> Vec<LifecycleEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}

/// Sticky options with a given height.
pub fn sticky(height: f32) -> BannerOptions {
    BannerOptions::default().sticky().with_height(height)
}

pub async fn advance(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
}

pub fn pushes_of(events: &[LifecycleEvent], banner: BannerId) -> Vec<(f32, bool)> {
    events
        .iter()
        .filter_map(|event| match event {
            LifecycleEvent::Pushed {
                banner: id,
                distance,
                forward,
            } if *id == banner => Some((*distance, *forward)),
            _ => None,
        })
        .collect()
}
