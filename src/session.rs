//! Event-driven board session.
//!
//! One task owns the store and the interaction mapper and applies UI events
//! strictly in the order they were sent. After every event it publishes a
//! fresh [`BoardView`] for the presentation layer; a view holds an
//! `Arc<Board>` snapshot, so a render in progress never sees a later edit.

use crate::{
    config::BoardConfig,
    domain::{Board, Ticket, TicketId},
    error::{KanbanError, Result},
    form,
    interaction::InteractionMapper,
    store::TicketStore,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

/// Inbound UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    SubmitTicket {
        title: String,
    },
    GestureStart {
        active_id: String,
    },
    GestureEnd {
        active_id: String,
        over_id: Option<String>,
    },
    RemoveTicket {
        ticket_id: TicketId,
    },
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub board: Arc<Board>,
    pub dragging: Option<Ticket>,
}

impl BoardView {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Store and mapper wired together, driven one event at a time
#[derive(Debug)]
pub struct BoardSession {
    store: TicketStore,
    mapper: InteractionMapper,
    trim_titles: bool,
}

impl BoardSession {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            store: TicketStore::new(config),
            mapper: InteractionMapper::new(),
            trim_titles: config.trim_titles,
        }
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            board: self.store.snapshot(),
            dragging: self.mapper.dragging().cloned(),
        }
    }

    /// Applies a single event to completion
    pub fn handle_event(&mut self, event: BoardEvent) -> Result<()> {
        match event {
            BoardEvent::SubmitTicket { title } => {
                form::submit_ticket(&mut self.store, &title, self.trim_titles);
            }
            BoardEvent::GestureStart { active_id } => {
                self.mapper.on_gesture_start(&self.store, &active_id);
            }
            BoardEvent::GestureEnd { active_id, over_id } => {
                let outcome = self
                    .mapper
                    .on_gesture_end(&mut self.store, &active_id, over_id.as_deref())?;
                debug!(?outcome, "gesture finished");
            }
            BoardEvent::RemoveTicket { ticket_id } => {
                self.store.remove_ticket(&ticket_id);
            }
        }
        Ok(())
    }

    /// Runs a session on its own task
    ///
    /// Must be called from within a tokio runtime. Fails with
    /// [`KanbanError::ConfigError`] if the configuration is invalid.
    pub fn spawn(config: BoardConfig) -> Result<BoardHandle> {
        config.validate()?;
        let mut session = Self::new(&config);
        let (events_tx, mut events_rx) = mpsc::channel::<BoardEvent>(config.event_buffer);
        let (views_tx, views_rx) = watch::channel(session.view());

        info!(
            event_buffer = config.event_buffer,
            index_policy = ?config.index_policy,
            "board session started"
        );

        let task = tokio::spawn(async move {
            while let Some(event) = events_rx.recv().await {
                if let Err(err) = session.handle_event(event) {
                    warn!(%err, "board event rejected");
                }
                views_tx.send_replace(session.view());
            }
            info!(tickets = session.store.ticket_count(), "board session stopped");
        });

        Ok(BoardHandle {
            events: events_tx,
            views: views_rx,
            task,
        })
    }
}

/// Sending side of a running session plus its latest view
#[derive(Debug)]
pub struct BoardHandle {
    events: mpsc::Sender<BoardEvent>,
    views: watch::Receiver<BoardView>,
    task: JoinHandle<()>,
}

impl BoardHandle {
    async fn send(&self, event: BoardEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| KanbanError::SessionClosed)
    }

    pub async fn submit_ticket(&self, title: impl Into<String>) -> Result<()> {
        self.send(BoardEvent::SubmitTicket {
            title: title.into(),
        })
        .await
    }

    pub async fn gesture_start(&self, active_id: impl Into<String>) -> Result<()> {
        self.send(BoardEvent::GestureStart {
            active_id: active_id.into(),
        })
        .await
    }

    pub async fn gesture_end(
        &self,
        active_id: impl Into<String>,
        over_id: Option<String>,
    ) -> Result<()> {
        self.send(BoardEvent::GestureEnd {
            active_id: active_id.into(),
            over_id,
        })
        .await
    }

    pub async fn remove_ticket(&self, ticket_id: TicketId) -> Result<()> {
        self.send(BoardEvent::RemoveTicket { ticket_id }).await
    }

    /// Latest published view
    pub fn view(&self) -> BoardView {
        self.views.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<BoardView> {
        self.views.clone()
    }

    /// Stops accepting events, drains the queue and returns the final view
    pub async fn shutdown(self) -> BoardView {
        let Self {
            events,
            views,
            task,
        } = self;
        drop(events);
        if let Err(err) = task.await {
            warn!(%err, "board session task failed");
        }
        let view = views.borrow().clone();
        view
    }
}
