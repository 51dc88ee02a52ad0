//! Color selection controller.
//!
//! Owns the active background, its derived button colors, the picker's
//! current value and the control-surface state. Every change goes through a
//! `&mut self` method, so whoever owns the controller serializes all
//! mutation; the presentation layer only reads [`RenderStyle`] snapshots or
//! the queued [`AppToUi`] messages.
//!
//! Persistence is best-effort. Each selection is handed to a writer task
//! that saves values in the order they were selected; failures are logged
//! and dropped.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use backdrop_core::{DerivedColors, compute_contrast};

use crate::bridge::{ControlEvent, EventQueue};
use crate::config::{AppConfig, DEFAULT_BACKGROUND, SWATCHES};
use crate::ipc::AppToUi;
use crate::storage::KeyValueStore;

/// Whether the control surface is showing its compact or expanded form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSurface {
    #[default]
    Compact,
    Expanded,
}

/// Style outputs consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    /// Active background color spec.
    pub background: String,
    /// Derived button background, `rgba(..., 0.7)`.
    pub button_background: String,
    /// Derived button text color.
    pub button_text: String,
    pub surface: ControlSurface,
}

/// Queue feeding the persistence task.
struct PersistWriter {
    tx: mpsc::UnboundedSender<String>,
    task: JoinHandle<()>,
}

/// Holds and mutates the selected background color.
pub struct ColorController<S: KeyValueStore> {
    store: Arc<S>,
    storage_key: String,
    background: String,
    derived: DerivedColors,
    picker_value: String,
    surface: ControlSurface,
    writer: PersistWriter,
    /// Messages for the UI, drained by the frontend.
    outbound: Vec<AppToUi>,
}

impl<S: KeyValueStore> ColorController<S> {
    /// Create a controller with the default white background.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime, since it spawns the
    /// persistence task.
    pub fn new(store: S, config: &AppConfig) -> Self {
        let store = Arc::new(store);
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(persist_loop(
            Arc::clone(&store),
            config.storage_key.clone(),
            rx,
        ));

        Self {
            store,
            storage_key: config.storage_key.clone(),
            background: DEFAULT_BACKGROUND.to_owned(),
            derived: DerivedColors::fallback(),
            picker_value: SWATCHES[0].to_owned(),
            surface: ControlSurface::default(),
            writer: PersistWriter { tx, task },
            outbound: Vec::new(),
        }
    }

    /// Adopt the previously saved color, if any.
    ///
    /// Meant to run once at startup, before the UI attaches, so it queues no
    /// outbound message; send a [`Self::snapshot`] afterwards. A missing value
    /// keeps the default background and a read failure is only logged.
    pub async fn load_saved(&mut self) {
        match self.store.get(&self.storage_key).await {
            Ok(Some(saved)) if !saved.is_empty() => {
                tracing::info!("Restored saved background {saved}");
                self.apply_background(saved);
            }
            Ok(_) => tracing::debug!("No saved background, keeping {}", self.background),
            Err(e) => tracing::error!("Error loading saved color: {e}"),
        }
    }

    /// Handle a color chosen in the picker: persist it, make it the active
    /// background and recompute the button colors.
    pub fn select_color(&mut self, hex: impl Into<String>) {
        let hex = hex.into();
        self.persist(&hex);

        let before = self.style();
        self.apply_background(hex);
        self.notify_if_changed(before);
    }

    /// Short press: collapse the control surface.
    pub fn press(&mut self) {
        self.set_surface(ControlSurface::Compact);
    }

    /// Long press: expand the control surface.
    pub fn long_press(&mut self) {
        self.set_surface(ControlSurface::Expanded);
    }

    /// Apply one inbound event.
    pub fn handle(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::RequestState => {
                let snapshot = self.snapshot();
                self.outbound.push(snapshot);
            }
            ControlEvent::ColorSelected { hex } => self.select_color(hex),
            ControlEvent::Press => self.press(),
            ControlEvent::LongPress => self.long_press(),
        }
    }

    /// Drain the event queue until every sender is gone, handing outbound
    /// messages to `flush` after each event.
    pub async fn run(&mut self, queue: &mut EventQueue, mut flush: impl FnMut(Vec<AppToUi>)) {
        while let Some(event) = queue.next().await {
            tracing::debug!("Handling {event:?}");
            self.handle(event);
            let messages = self.drain_outbound();
            if !messages.is_empty() {
                flush(messages);
            }
        }
        tracing::debug!("Event queue closed");
    }

    /// Current style outputs.
    pub fn style(&self) -> RenderStyle {
        RenderStyle {
            background: self.background.clone(),
            button_background: self.derived.button_background.clone(),
            button_text: self.derived.button_text.clone(),
            surface: self.surface,
        }
    }

    /// Full-state message for a newly attached UI.
    pub fn snapshot(&self) -> AppToUi {
        AppToUi::Initialize {
            style: self.style(),
            swatches: self.swatches(),
            picker_value: self.picker_value.clone(),
        }
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn derived(&self) -> &DerivedColors {
        &self.derived
    }

    pub fn surface(&self) -> ControlSurface {
        self.surface
    }

    /// The color the picker currently shows.
    pub fn picker_value(&self) -> &str {
        &self.picker_value
    }

    pub fn swatches(&self) -> Vec<String> {
        SWATCHES.iter().map(|s| (*s).to_owned()).collect()
    }

    /// Take all queued outbound messages.
    pub fn drain_outbound(&mut self) -> Vec<AppToUi> {
        std::mem::take(&mut self.outbound)
    }

    /// Stop accepting writes and wait for queued ones to finish.
    pub async fn shutdown(self) {
        let PersistWriter { tx, task } = self.writer;
        drop(tx);
        if let Err(e) = task.await {
            tracing::error!("Persistence task failed: {e}");
        }
    }

    fn apply_background(&mut self, spec: String) {
        self.derived = compute_contrast(Some(&spec));
        self.picker_value.clone_from(&spec);
        self.background = spec;
    }

    fn set_surface(&mut self, surface: ControlSurface) {
        if self.surface != surface {
            let before = self.style();
            self.surface = surface;
            self.notify_if_changed(before);
        }
    }

    fn notify_if_changed(&mut self, before: RenderStyle) {
        let style = self.style();
        if style != before {
            self.outbound.push(AppToUi::StyleUpdated { style });
        }
    }

    fn persist(&self, value: &str) {
        if self.writer.tx.send(value.to_owned()).is_err() {
            tracing::error!("Error saving color {value}: persistence task has stopped");
        }
    }
}

/// Write each queued value in order. A failed write is logged and skipped.
async fn persist_loop<S: KeyValueStore>(
    store: Arc<S>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<String>,
) {
    while let Some(value) = rx.recv().await {
        if let Err(e) = store.set(&key, &value).await {
            tracing::error!("Error saving color {value}: {e}");
        }
    }
}
