//! Decoupled "open this window" signal.
//!
//! Any number of producers (desktop icons, the taskbar, terminal commands) publish
//! [`OpenWindowRequest`] values through an [`OpenRequestPublisher`] without holding a reference to
//! the window manager. Exactly one consumer subscribes at mount and is detached when its
//! [`OpenRequestSubscription`] is dropped. Requests published before a consumer attaches are
//! queued and delivered in arrival order on subscribe.

use std::{
    cell::RefCell,
    collections::VecDeque,
    rc::{Rc, Weak},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::WindowId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub window_id: WindowId,
    /// Focus again after opening.
    pub request_focus: bool,
}

impl OpenWindowRequest {
    pub fn new(window_id: WindowId, request_focus: bool) -> Self {
        Self {
            window_id,
            request_focus,
        }
    }

    /// Request that opens (or raises) `window_id`.
    pub fn focused(window_id: impl Into<WindowId>) -> Self {
        Self::new(window_id.into(), true)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The channel accepts a single consumer at a time.
    #[error("open-request channel already has a consumer")]
    AlreadySubscribed,
}

type Handler = Box<dyn FnMut(OpenWindowRequest)>;

#[derive(Default)]
struct BusInner {
    pending: VecDeque<OpenWindowRequest>,
    consumer: Option<Handler>,
    active_token: Option<u64>,
    next_token: u64,
    draining: bool,
}

#[derive(Clone, Default)]
pub struct OpenRequestBus {
    inner: Rc<RefCell<BusInner>>,
}

impl OpenRequestBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Producer-side handle that can only publish.
    pub fn publisher(&self) -> OpenRequestPublisher {
        OpenRequestPublisher {
            inner: self.inner.clone(),
        }
    }

    pub fn publish(&self, request: OpenWindowRequest) {
        publish(&self.inner, request);
    }

    /// Attaches the single consumer and delivers anything queued before it arrived.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::AlreadySubscribed`] while another subscription is alive.
    pub fn subscribe(
        &self,
        handler: impl FnMut(OpenWindowRequest) + 'static,
    ) -> Result<OpenRequestSubscription, BusError> {
        let token = {
            let mut state = self.inner.borrow_mut();
            if state.active_token.is_some() {
                return Err(BusError::AlreadySubscribed);
            }
            state.next_token += 1;
            let token = state.next_token;
            state.active_token = Some(token);
            state.consumer = Some(Box::new(handler));
            token
        };
        drain(&self.inner);
        Ok(OpenRequestSubscription {
            inner: Rc::downgrade(&self.inner),
            token,
        })
    }

    pub fn has_consumer(&self) -> bool {
        self.inner.borrow().active_token.is_some()
    }

    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

#[derive(Clone)]
pub struct OpenRequestPublisher {
    inner: Rc<RefCell<BusInner>>,
}

impl OpenRequestPublisher {
    pub fn publish(&self, request: OpenWindowRequest) {
        publish(&self.inner, request);
    }
}

/// Keeps the consumer attached; dropping it unsubscribes.
pub struct OpenRequestSubscription {
    inner: Weak<RefCell<BusInner>>,
    token: u64,
}

impl Drop for OpenRequestSubscription {
    fn drop(&mut self) {
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let mut state = inner.borrow_mut();
        if state.active_token == Some(self.token) {
            state.active_token = None;
            state.consumer = None;
        }
    }
}

fn publish(inner: &Rc<RefCell<BusInner>>, request: OpenWindowRequest) {
    inner.borrow_mut().pending.push_back(request);
    drain(inner);
}

/// Delivers queued requests one at a time. The handler runs with the bus unborrowed, so it may
/// publish (queued behind the current request) or drop its own subscription.
fn drain(inner: &Rc<RefCell<BusInner>>) {
    {
        let mut state = inner.borrow_mut();
        if state.draining {
            return;
        }
        state.draining = true;
    }

    loop {
        let (request, mut handler, token) = {
            let mut state = inner.borrow_mut();
            let Some(token) = state.active_token else {
                break;
            };
            let Some(handler) = state.consumer.take() else {
                break;
            };
            let Some(request) = state.pending.pop_front() else {
                state.consumer = Some(handler);
                break;
            };
            (request, handler, token)
        };

        handler(request);

        let mut state = inner.borrow_mut();
        if state.active_token == Some(token) {
            state.consumer = Some(handler);
        }
    }

    inner.borrow_mut().draining = false;
}
