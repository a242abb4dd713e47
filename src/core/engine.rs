//! # Engine
//!
//! The cooperative driver around the reducer. A presentation layer calls
//! [`Engine::apply`] with user-triggered actions; the engine runs `update()`,
//! spawns one task per returned effect against the reservation provider, and
//! feeds each completion back through the same reducer when the caller next
//! [`Engine::tick`]s.
//!
//! Effects are never cancelled. Once spawned they run to completion, and a
//! completion that outlived its journey (the guest reset or re-submitted
//! meanwhile) is discarded by the token check inside `update()`; the
//! snapshot is only ever mutated from a current continuation, exactly once
//! per operation.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::mpsc;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::reservations::ReservationProvider;

pub struct Engine {
    app: App,
    provider: Arc<dyn ReservationProvider>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
    /// Completions not yet received back. Only `tick` decrements it.
    in_flight: usize,
}

impl Engine {
    pub fn new(provider: Arc<dyn ReservationProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { app: App::new(), provider, tx, rx, in_flight: 0 }
    }

    /// Read-only view of the snapshot for rendering.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// True while at least one async operation is outstanding.
    pub fn has_pending(&self) -> bool {
        self.in_flight > 0
    }

    /// Applies one action and starts whatever async work it requires.
    pub fn apply(&mut self, action: Action) {
        debug!("Engine applying: {action:?}");
        if let Some(effect) = update(&mut self.app, action) {
            self.spawn_effect(effect);
        }
    }

    /// Receives and applies exactly one completion. Returns `false` without
    /// waiting when nothing is outstanding.
    pub async fn tick(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        let Some(action) = self.rx.recv().await else {
            // Unreachable while the engine holds its own sender.
            return false;
        };
        self.in_flight -= 1;
        debug!("Engine received completion: {action:?}");
        if let Some(effect) = update(&mut self.app, action) {
            self.spawn_effect(effect);
        }
        true
    }

    /// Drains every outstanding completion.
    pub async fn settle(&mut self) {
        while self.tick().await {}
    }

    fn spawn_effect(&mut self, effect: Effect) {
        debug!("Spawning effect against {}: {effect:?}", self.provider.name());
        self.in_flight += 1;
        let provider = self.provider.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let completion = match effect {
                Effect::Search { token, criteria } => {
                    let hotels = provider.search(&criteria).await;
                    Action::SearchCompleted { token, hotels }
                }
                Effect::ConfirmBooking { token, hotel, details } => {
                    let confirmation = provider.confirm_booking(hotel, details).await;
                    Action::BookingConfirmed { token, confirmation }
                }
            };
            if tx.send(completion).is_err() {
                warn!("Failed to deliver completion: engine dropped");
            }
        });
    }
}
