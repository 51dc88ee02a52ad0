//! Backdrop application shell.
//!
//! Wires the pure contrast logic from `backdrop-core` to persistent storage,
//! the picker event bridge and a UI message protocol. The
//! [`controller::ColorController`] is the single owner of selection state.

pub mod bridge;
pub mod config;
pub mod controller;
pub mod ipc;
pub mod storage;

pub use bridge::{BridgeError, ControlEvent, EventQueue, PickerHandle, event_channel};
pub use config::AppConfig;
pub use controller::{ColorController, ControlSurface, RenderStyle};
pub use ipc::{AppToUi, UiToApp};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
