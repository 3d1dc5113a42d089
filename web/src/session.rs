//! Location → nearby motels → map view-model.
//!
//! A page session walks `Initializing → AwaitingResults → Ready` exactly once.
//! Either external step can fail, which ends the session in a terminal
//! failure phase. While `Ready`, the user may select and deselect results.

use shared_types::{Coordinate, MotelResult};

use crate::{
    error::{FetchError, LocationError, SessionError},
    geolocation::LocationProvider,
    motels::MotelBackend,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Initializing,
    LocationFailed(LocationError),
    AwaitingResults {
        origin: Coordinate,
    },
    FetchFailed {
        origin: Coordinate,
        error: FetchError,
    },
    Ready {
        origin: Coordinate,
        results: Vec<MotelResult>,
        /// Index into `results`.
        selected: Option<usize>,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Initializing => "initializing",
            Phase::LocationFailed(_) => "location failed",
            Phase::AwaitingResults { .. } => "awaiting results",
            Phase::FetchFailed { .. } => "fetch failed",
            Phase::Ready { .. } => "ready",
        }
    }
}

/// Outcome of one of the two asynchronous steps of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LocationAcquired(Coordinate),
    LocationFailed(LocationError),
    ResultsReceived(Vec<MotelResult>),
    FetchFailed(FetchError),
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            SessionEvent::LocationAcquired(_) => "location acquired",
            SessionEvent::LocationFailed(_) => "location failed",
            SessionEvent::ResultsReceived(_) => "results received",
            SessionEvent::FetchFailed(_) => "fetch failed",
        }
    }

    /// The session-ending error carried by this event, if any.
    pub fn failure(&self) -> Option<SessionError> {
        match self {
            SessionEvent::LocationFailed(e) => Some(e.clone().into()),
            SessionEvent::FetchFailed(e) => Some(e.clone().into()),
            _ => None,
        }
    }
}

/// What the rendering layer should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading(&'static str),
    Failed(&'static str),
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotelFinder {
    phase: Phase,
}

impl Default for MotelFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl MotelFinder {
    pub fn new() -> Self {
        Self {
            phase: Phase::Initializing,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Feeds one session event through the state machine.
    ///
    /// Events that do not apply to the current phase are rejected and the
    /// phase is left as it was.
    pub fn apply(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        let next = match (&self.phase, event) {
            (Phase::Initializing, SessionEvent::LocationAcquired(origin)) => {
                Phase::AwaitingResults { origin }
            }
            (Phase::Initializing, SessionEvent::LocationFailed(error)) => {
                Phase::LocationFailed(error)
            }
            (Phase::AwaitingResults { origin }, SessionEvent::ResultsReceived(results)) => {
                Phase::Ready {
                    origin: *origin,
                    results,
                    selected: None,
                }
            }
            (Phase::AwaitingResults { origin }, SessionEvent::FetchFailed(error)) => {
                Phase::FetchFailed {
                    origin: *origin,
                    error,
                }
            }
            (phase, event) => {
                return Err(SessionError::InvalidTransition {
                    state: phase.name(),
                    event: event.name(),
                })
            }
        };
        self.phase = next;
        Ok(())
    }

    /// Selects `result` if it is part of the current result set.
    ///
    /// Returns whether the selection changed to `result`. Switching from one
    /// selected result to another happens in a single step.
    pub fn select(&mut self, result: &MotelResult) -> bool {
        let Phase::Ready {
            results, selected, ..
        } = &mut self.phase
        else {
            return false;
        };

        match results.iter().position(|r| r == result) {
            Some(index) => {
                *selected = Some(index);
                true
            }
            None => false,
        }
    }

    /// Selects the result with the given id, if present.
    pub fn select_id(&mut self, id: &str) -> bool {
        let candidate = self
            .results()
            .and_then(|results| results.iter().find(|r| r.id == id))
            .cloned();
        match candidate {
            Some(result) => self.select(&result),
            None => false,
        }
    }

    pub fn deselect(&mut self) {
        if let Phase::Ready { selected, .. } = &mut self.phase {
            *selected = None;
        }
    }

    /// The device coordinate, once acquired.
    pub fn origin(&self) -> Option<Coordinate> {
        match &self.phase {
            Phase::AwaitingResults { origin }
            | Phase::FetchFailed { origin, .. }
            | Phase::Ready { origin, .. } => Some(*origin),
            Phase::Initializing | Phase::LocationFailed(_) => None,
        }
    }

    /// The result set, only after a successful fetch.
    pub fn results(&self) -> Option<&[MotelResult]> {
        match &self.phase {
            Phase::Ready { results, .. } => Some(results),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&MotelResult> {
        match &self.phase {
            Phase::Ready {
                results,
                selected: Some(index),
                ..
            } => results.get(*index),
            _ => None,
        }
    }

    /// Coordinate the details popup is anchored at.
    pub fn popup_anchor(&self) -> Option<Coordinate> {
        self.selected().map(|r| r.location)
    }

    pub fn failure(&self) -> Option<SessionError> {
        match &self.phase {
            Phase::LocationFailed(error) => Some(error.clone().into()),
            Phase::FetchFailed { error, .. } => Some(error.clone().into()),
            _ => None,
        }
    }

    pub fn view_state(&self) -> ViewState {
        match &self.phase {
            Phase::Initializing => ViewState::Loading("Finding your location..."),
            Phase::AwaitingResults { .. } => ViewState::Loading("Looking for motels near you..."),
            Phase::LocationFailed(_) | Phase::FetchFailed { .. } => ViewState::Failed(
                self.failure()
                    .map(|e| e.user_message())
                    .unwrap_or_default(),
            ),
            Phase::Ready { .. } => ViewState::Ready,
        }
    }
}

/// Runs the two one-shot steps of a session in order, reporting each outcome
/// to `apply`.
///
/// The fetch is issued only after the location step succeeds, and always with
/// the exact coordinate the provider returned.
pub async fn run<L, B, F>(locator: &L, backend: &B, mut apply: F)
where
    L: LocationProvider,
    B: MotelBackend,
    F: FnMut(SessionEvent),
{
    let origin = match locator.current_position().await {
        Ok(origin) => origin,
        Err(error) => {
            leptos::logging::error!("Geolocation error: {}", error);
            apply(SessionEvent::LocationFailed(error));
            return;
        }
    };
    apply(SessionEvent::LocationAcquired(origin));

    match backend.fetch_nearby(origin).await {
        Ok(results) => {
            leptos::logging::log!("Fetched {} motels", results.len());
            apply(SessionEvent::ResultsReceived(results));
        }
        Err(error) => {
            leptos::logging::error!("Error fetching motels: {}", error);
            apply(SessionEvent::FetchFailed(error));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn motel(id: &str, lat: f64, lng: f64) -> MotelResult {
        MotelResult {
            id: id.to_string(),
            name: format!("Motel {id}"),
            address: format!("Calle {id}"),
            location: Coordinate::new(lat, lng),
        }
    }

    fn ready_with(results: Vec<MotelResult>) -> MotelFinder {
        let mut finder = MotelFinder::new();
        finder
            .apply(SessionEvent::LocationAcquired(Coordinate::new(-34.6, -58.4)))
            .unwrap();
        finder.apply(SessionEvent::ResultsReceived(results)).unwrap();
        finder
    }

    struct FakeLocator(Result<Coordinate, LocationError>);

    impl LocationProvider for FakeLocator {
        async fn current_position(&self) -> Result<Coordinate, LocationError> {
            self.0.clone()
        }
    }

    struct FakeBackend {
        response: Result<Vec<MotelResult>, FetchError>,
        calls: RefCell<Vec<Coordinate>>,
    }

    impl FakeBackend {
        fn new(response: Result<Vec<MotelResult>, FetchError>) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MotelBackend for FakeBackend {
        async fn fetch_nearby(&self, at: Coordinate) -> Result<Vec<MotelResult>, FetchError> {
            self.calls.borrow_mut().push(at);
            self.response.clone()
        }
    }

    fn drive(locator: &FakeLocator, backend: &FakeBackend) -> (MotelFinder, Vec<SessionEvent>) {
        let mut finder = MotelFinder::new();
        let mut events = Vec::new();
        block_on(run(locator, backend, |event| {
            events.push(event.clone());
            finder.apply(event).unwrap();
        }));
        (finder, events)
    }

    #[test]
    fn starts_loading_without_origin_or_results() {
        let finder = MotelFinder::new();
        assert_eq!(finder.phase(), &Phase::Initializing);
        assert!(matches!(finder.view_state(), ViewState::Loading(_)));
        assert_eq!(finder.origin(), None);
        assert_eq!(finder.results(), None);
        assert_eq!(finder.selected(), None);
    }

    #[test]
    fn scenario_a_single_result_reaches_ready() {
        let origin = Coordinate::new(-34.6, -58.4);
        let locator = FakeLocator(Ok(origin));
        let backend = FakeBackend::new(Ok(vec![motel("p1", -34.61, -58.41)]));

        let (finder, _) = drive(&locator, &backend);

        assert_eq!(finder.view_state(), ViewState::Ready);
        let results = finder.results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "p1");
        assert_eq!(finder.origin(), Some(origin));
    }

    #[test]
    fn fetch_receives_exact_acquired_coordinate() {
        let origin = Coordinate::new(-34.603722, -58.381592);
        let locator = FakeLocator(Ok(origin));
        let backend = FakeBackend::new(Ok(vec![]));

        drive(&locator, &backend);

        assert_eq!(backend.calls.borrow().as_slice(), &[origin]);
    }

    #[test]
    fn scenario_b_empty_results_are_ready_not_failed() {
        let locator = FakeLocator(Ok(Coordinate::new(-34.6, -58.4)));
        let backend = FakeBackend::new(Ok(vec![]));

        let (finder, _) = drive(&locator, &backend);

        assert_eq!(finder.view_state(), ViewState::Ready);
        assert_eq!(finder.results(), Some(&[][..]));
        assert!(finder.failure().is_none());
    }

    #[test]
    fn scenario_c_location_failure_never_fetches() {
        let locator = FakeLocator(Err(LocationError::PermissionDenied));
        let backend = FakeBackend::new(Ok(vec![motel("p1", 0.0, 0.0)]));

        let (finder, events) = drive(&locator, &backend);

        assert_eq!(
            finder.phase(),
            &Phase::LocationFailed(LocationError::PermissionDenied)
        );
        assert!(backend.calls.borrow().is_empty());
        assert_eq!(events.len(), 1);
        assert!(matches!(
            finder.failure(),
            Some(SessionError::LocationUnavailable(_))
        ));
        assert!(matches!(finder.view_state(), ViewState::Failed(_)));
    }

    #[test]
    fn scenario_d_network_error_ends_in_fetch_failed() {
        let origin = Coordinate::new(-34.6, -58.4);
        let locator = FakeLocator(Ok(origin));
        let backend = FakeBackend::new(Err(FetchError::Transport("connection refused".into())));

        let (mut finder, _) = drive(&locator, &backend);

        assert!(matches!(finder.phase(), Phase::FetchFailed { .. }));
        assert!(matches!(finder.failure(), Some(SessionError::Fetch(_))));
        assert_eq!(finder.results(), None);
        assert_eq!(finder.selected(), None);
        assert_eq!(finder.origin(), Some(origin));

        assert!(!finder.select(&motel("p1", 0.0, 0.0)));
        assert_eq!(finder.selected(), None);
    }

    #[test]
    fn each_failure_is_reported_exactly_once() {
        let locator = FakeLocator(Ok(Coordinate::new(1.0, 2.0)));
        let backend = FakeBackend::new(Err(FetchError::Status(503)));

        let (_, events) = drive(&locator, &backend);

        let failures: Vec<_> = events.iter().filter_map(SessionEvent::failure).collect();
        assert_eq!(failures, vec![SessionError::Fetch(FetchError::Status(503))]);
    }

    #[test]
    fn location_failure_raises_a_single_notice() {
        let locator = FakeLocator(Err(LocationError::Timeout));
        let backend = FakeBackend::new(Ok(vec![]));

        let (finder, events) = drive(&locator, &backend);

        let notices: Vec<_> = events.iter().filter_map(SessionEvent::failure).collect();
        assert_eq!(notices.len(), 1);
        // The screen behind the notice stays failed; nothing else is shown.
        assert!(matches!(finder.view_state(), ViewState::Failed(_)));
        assert_eq!(finder.results(), None);
    }

    #[test]
    fn select_then_deselect_leaves_results_untouched() {
        let results = vec![motel("p1", 1.0, 1.0), motel("p2", 2.0, 2.0)];
        let mut finder = ready_with(results.clone());

        assert!(finder.select(&results[1]));
        assert_eq!(finder.selected(), Some(&results[1]));

        finder.deselect();
        assert_eq!(finder.selected(), None);
        assert_eq!(finder.results(), Some(results.as_slice()));
    }

    #[test]
    fn selecting_foreign_result_keeps_selection() {
        let results = vec![motel("p1", 1.0, 1.0)];
        let mut finder = ready_with(results.clone());
        finder.select(&results[0]);

        assert!(!finder.select(&motel("zz", 9.0, 9.0)));
        assert_eq!(finder.selected(), Some(&results[0]));

        finder.deselect();
        assert!(!finder.select(&motel("zz", 9.0, 9.0)));
        assert_eq!(finder.selected(), None);
    }

    #[test]
    fn scenario_e_switches_selection_directly() {
        let results = vec![motel("p1", 1.0, 1.0), motel("p2", 2.0, 2.0)];
        let mut finder = ready_with(results.clone());
        finder.select(&results[0]);

        let before = finder.clone();
        assert!(finder.select(&results[1]));

        // Single transition: from p1 straight to p2.
        assert_eq!(before.selected().map(|r| r.id.as_str()), Some("p1"));
        assert_eq!(finder.selected().map(|r| r.id.as_str()), Some("p2"));
    }

    #[test]
    fn popup_anchor_moves_with_selection() {
        let results = vec![motel("p1", 1.0, 1.0), motel("p2", 2.0, 2.0)];
        let mut finder = ready_with(results);
        assert_eq!(finder.popup_anchor(), None);

        finder.select_id("p1");
        assert_eq!(finder.popup_anchor(), Some(Coordinate::new(1.0, 1.0)));

        // Marker click on p2 re-anchors the open popup in one step.
        finder.select_id("p2");
        assert_eq!(finder.popup_anchor(), Some(Coordinate::new(2.0, 2.0)));

        finder.deselect();
        assert_eq!(finder.popup_anchor(), None);
    }

    #[test]
    fn repeated_popup_close_is_harmless() {
        let results = vec![motel("p1", 1.0, 1.0)];
        let mut finder = ready_with(results.clone());
        finder.select_id("p1");

        // Closing via the popup button and then removing it from the map
        // both report a close.
        finder.deselect();
        finder.deselect();
        assert_eq!(finder.selected(), None);
        assert_eq!(finder.results(), Some(results.as_slice()));
    }

    #[test]
    fn select_by_id() {
        let mut finder = ready_with(vec![motel("p1", 1.0, 1.0), motel("p2", 2.0, 2.0)]);
        assert!(finder.select_id("p2"));
        assert_eq!(finder.selected().map(|r| r.id.as_str()), Some("p2"));
        assert!(!finder.select_id("p9"));
        assert_eq!(finder.selected().map(|r| r.id.as_str()), Some("p2"));
    }

    #[test]
    fn selection_is_ignored_before_ready() {
        let mut finder = MotelFinder::new();
        assert!(!finder.select(&motel("p1", 1.0, 1.0)));
        finder.deselect();
        assert_eq!(finder.phase(), &Phase::Initializing);
    }

    #[test]
    fn out_of_order_events_are_rejected() {
        let mut finder = MotelFinder::new();
        let err = finder
            .apply(SessionEvent::ResultsReceived(vec![]))
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { .. }));
        assert_eq!(finder.phase(), &Phase::Initializing);

        let mut ready = ready_with(vec![]);
        let snapshot = ready.clone();
        assert!(ready
            .apply(SessionEvent::LocationAcquired(Coordinate::new(0.0, 0.0)))
            .is_err());
        assert!(ready
            .apply(SessionEvent::ResultsReceived(vec![motel("p1", 0.0, 0.0)]))
            .is_err());
        assert_eq!(ready, snapshot);
    }

    #[test]
    fn terminal_failures_accept_no_further_events() {
        let mut finder = MotelFinder::new();
        finder
            .apply(SessionEvent::LocationFailed(LocationError::Timeout))
            .unwrap();
        assert!(finder
            .apply(SessionEvent::LocationAcquired(Coordinate::new(0.0, 0.0)))
            .is_err());
        assert_eq!(
            finder.phase(),
            &Phase::LocationFailed(LocationError::Timeout)
        );
    }
}
