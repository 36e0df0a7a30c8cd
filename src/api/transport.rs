use super::{ApiCall, ApiClient, Method, decode_response};
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// An in-flight request. Poll it from the UI thread once per frame.
pub struct Pending<T> {
    rx: Receiver<Result<T, ApiError>>,
}

impl<T> Pending<T> {
    /// A request that has already finished, e.g. rejected before reaching the network.
    pub fn ready(result: Result<T, ApiError>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { rx }
    }

    pub fn poll(&self) -> Option<Result<T, ApiError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ApiError::Disconnected)),
        }
    }
}

/// One request's lifecycle: queued by state code, sent by the frame loop,
/// then polled until it answers.
pub enum RequestSlot<T> {
    Idle,
    Queued(ApiCall),
    InFlight(Pending<T>),
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        RequestSlot::Idle
    }
}

impl<T> RequestSlot<T> {
    pub fn is_busy(&self) -> bool {
        !matches!(self, RequestSlot::Idle)
    }

    /// Queues `call` unless another request already occupies the slot.
    pub fn queue(&mut self, call: ApiCall) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = RequestSlot::Queued(call);
        true
    }

    pub fn queued_call(&self) -> Option<&ApiCall> {
        match self {
            RequestSlot::Queued(call) => Some(call),
            RequestSlot::Idle | RequestSlot::InFlight(_) => None,
        }
    }

    /// Returns the reply once it has arrived and frees the slot.
    pub fn poll(&mut self) -> Option<Result<T, ApiError>> {
        let result = match self {
            RequestSlot::InFlight(pending) => pending.poll()?,
            RequestSlot::Idle | RequestSlot::Queued(_) => return None,
        };
        *self = RequestSlot::Idle;
        Some(result)
    }
}

impl<T: DeserializeOwned + Send + 'static> RequestSlot<T> {
    pub fn dispatch(&mut self, api: &ApiClient, ctx: &egui::Context) {
        if matches!(self, RequestSlot::Queued(_)) {
            if let RequestSlot::Queued(call) = std::mem::take(self) {
                *self = RequestSlot::InFlight(api.send(call, ctx));
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(super) fn dispatch<T>(url: String, call: ApiCall, repaint: egui::Context) -> Pending<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let result = send_blocking(&url, &call);
        if let Err(err) = &result {
            log::debug!("{:?} {url} failed: {err}", call.method);
        }
        let _ = tx.send(result);
        repaint.request_repaint();
    });

    Pending { rx }
}

#[cfg(not(target_arch = "wasm32"))]
fn send_blocking<T: DeserializeOwned>(url: &str, call: &ApiCall) -> Result<T, ApiError> {
    let client = reqwest::blocking::Client::new();
    let request = match call.method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };
    let request = match &call.body {
        Some(body) => request.json(body),
        None => request,
    };

    let response = request.send()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    decode_response(status, &body)
}

#[cfg(target_arch = "wasm32")]
pub(super) fn dispatch<T>(url: String, call: ApiCall, repaint: egui::Context) -> Pending<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    wasm_bindgen_futures::spawn_local(async move {
        let result = send_async(&url, &call).await;
        if let Err(err) = &result {
            log::debug!("{:?} {url} failed: {err}", call.method);
        }
        let _ = tx.send(result);
        repaint.request_repaint();
    });

    Pending { rx }
}

#[cfg(target_arch = "wasm32")]
async fn send_async<T: DeserializeOwned>(url: &str, call: &ApiCall) -> Result<T, ApiError> {
    let client = reqwest::Client::new();
    let request = match call.method {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };
    let request = match &call.body {
        Some(body) => request.json(body),
        None => request,
    };

    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    decode_response(status, &body)
}
