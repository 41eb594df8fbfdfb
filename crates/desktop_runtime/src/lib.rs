//! Window management runtime for a browser-hosted desktop shell.
//!
//! The core ([`window_manager`], [`geometry`], [`reducer`]) is plain Rust and has no DOM access.
//! [`components`], [`runtime_context`] and [`host`] bind it to Leptos and the browser.

pub mod commands;
pub mod components;
pub mod config;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod listener_scope;
pub mod model;
pub mod open_request;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar_registry;
pub mod window_manager;

pub use commands::{parse_window_command, CommandError, WindowCommand};
pub use components::{ContentRegistry, DesktopIcon, DesktopShell};
pub use config::{ConfigError, WindowManagerConfig};
pub use listener_scope::ListenerScope;
pub use model::*;
pub use open_request::{
    BusError, OpenRequestBus, OpenRequestPublisher, OpenRequestSubscription, OpenWindowRequest,
};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use taskbar_registry::{
    resolve_minimize_target, IconPositionQuery, MinimizeTarget, MinimizeTargetSource,
    TaskbarIconRegistry,
};
pub use window_manager::{Placement, WindowManager};
