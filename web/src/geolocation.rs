use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use shared_types::Coordinate;
use wasm_bindgen::{closure::Closure, JsCast};

use crate::error::LocationError;

/// One-shot source of the device position.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// `navigator.geolocation.getCurrentPosition` with the browser's default options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocation;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coordinate, LocationError>>>>>;

fn send(reply: &Reply, outcome: Result<Coordinate, LocationError>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

impl LocationProvider for BrowserGeolocation {
    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        let geolocation = web_sys::window()
            .ok_or(LocationError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| LocationError::Unsupported)?;

        let (tx, rx) = oneshot::channel();
        let reply: Reply = Rc::new(RefCell::new(Some(tx)));

        let on_success = {
            let reply = reply.clone();
            Closure::once_into_js(move |position: web_sys::Position| {
                let coords = position.coords();
                send(
                    &reply,
                    Ok(Coordinate::new(coords.latitude(), coords.longitude())),
                );
            })
        };
        let on_error = {
            let reply = reply.clone();
            Closure::once_into_js(move |error: web_sys::PositionError| {
                send(&reply, Err(LocationError::from_code(error.code())));
            })
        };

        // Only one of the two callbacks ever fires; the other stays allocated
        // for the rest of the page, which is fine for a single request.
        geolocation
            .get_current_position_with_error_callback(
                on_success.unchecked_ref(),
                Some(on_error.unchecked_ref()),
            )
            .map_err(|_| LocationError::Unsupported)?;

        rx.await.unwrap_or(Err(LocationError::PositionUnavailable))
    }
}
