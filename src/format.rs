//! Display helpers shared by panels and cards.

/// Format kilowatts with one decimal place, e.g. "21.5 kW".
pub fn kw(value: f64) -> String {
    format!("{:.1} kW", value)
}

/// Format a stored power value the way it was entered, e.g. "0.75 kW".
pub fn kw_exact(value: f64) -> String {
    format!("{} kW", value)
}

pub fn metres(value: f64) -> String {
    format!("{} m", value)
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Round to one decimal so repeated 0.1 steps stay clean.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
