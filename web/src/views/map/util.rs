use shared_types::Coordinate;

/// Pink map pin, 24x24 viewBox.
pub const MOTEL_PIN_ICON: &str = "data:image/svg+xml;charset=UTF-8,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='%23E91E63' width='48px' height='48px'%3E%3Cpath d='M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z'/%3E%3C/svg%3E";
pub const MOTEL_PIN_SIZE: (f64, f64) = (40.0, 40.0);
// Tip of the pin sits at the bottom centre of the icon.
pub const MOTEL_PIN_ANCHOR: (f64, f64) = (20.0, 37.0);

/// Google Maps route from the current position to `destination`.
pub fn directions_url(destination: &Coordinate) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&destination={},{}",
        destination.latitude, destination.longitude
    )
}
