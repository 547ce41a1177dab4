// SPDX-License-Identifier: MPL-2.0
//! Serial request queue.
//!
//! Submissions go through a channel with room for a single request, so a
//! caller waits until its request has been taken by the dispatcher but
//! never for the animation itself. The dispatcher routes each request to
//! its group's lane; a lane waits for the group's token and hands the
//! request, together with the permit, to the UI context.
//!
//! Lanes are unbounded. Requests waiting for a token accumulate there, so
//! the single-slot channel paces callers without capping the backlog.

use super::token::Tokens;
use super::ui::UiCommand;
use crate::banner::Banner;
use crate::domain::banner::StackGroup;
use crate::error::{Error, Result};
use tokio::sync::mpsc;

/// A unit of work gated by an exclusion token.
#[derive(Debug, Clone)]
pub(crate) enum Request {
    Show(Banner),
    Hide(Banner),
}

impl Request {
    pub(crate) fn banner(&self) -> &Banner {
        match self {
            Request::Show(banner) | Request::Hide(banner) => banner,
        }
    }

    fn group(&self) -> StackGroup {
        self.banner().group()
    }
}

/// Handle for submitting requests.
#[derive(Debug, Clone)]
pub(crate) struct RequestQueue {
    tx: mpsc::Sender<Request>,
}

impl RequestQueue {
    /// Spawns the dispatcher and one lane per stack group.
    pub(crate) fn spawn(tokens: &Tokens, ui: mpsc::UnboundedSender<UiCommand>) -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(1);
        let top = spawn_lane(tokens, StackGroup::Top, ui.clone());
        let bottom = spawn_lane(tokens, StackGroup::Bottom, ui);

        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let lane = match request.group() {
                    StackGroup::Top => &top,
                    StackGroup::Bottom => &bottom,
                };
                if lane.send(request).is_err() {
                    tracing::warn!("request lane closed");
                    break;
                }
            }
            tracing::debug!("request queue stopped");
        });

        Self { tx }
    }

    /// Waits until `request` has been submitted.
    pub(crate) async fn submit(&self, request: Request) -> Result<()> {
        tracing::debug!(banner = %request.banner().id(), ?request, "request submitted");
        self.tx.send(request).await.map_err(|_| Error::Stopped)
    }
}

fn spawn_lane(
    tokens: &Tokens,
    group: StackGroup,
    ui: mpsc::UnboundedSender<UiCommand>,
) -> mpsc::UnboundedSender<Request> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Request>();
    let token = tokens.get(group).clone();

    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            let Some(permit) = token.acquire().await else {
                break;
            };
            if ui.send(UiCommand::Begin { request, permit }).is_err() {
                break;
            }
        }
        tracing::debug!(%group, "request lane stopped");
    });

    tx
}
