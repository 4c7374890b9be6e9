//! # API Module
//!
//! HTTP handlers for the genre history service. The application is a plain
//! three-step web flow plus two housekeeping routes:
//!
//! - [`login`] - entry point; creates a fresh session and redirects the
//!   browser to Spotify's authorization page.
//! - [`callback`] - OAuth redirect target; verifies the `state` value,
//!   exchanges the authorization code for a token, and sends the user on to
//!   the chart.
//! - [`chart`] - runs the whole pipeline (fetch tracks, resolve genres,
//!   aggregate, bucketize, render) and returns an HTML page with the chart
//!   embedded as a PNG data URI.
//! - [`logout`] - drops the session and clears the cookie.
//! - [`health`] - status and version information for monitoring.
//!
//! ## Session Handling
//!
//! Sessions live in an in-process store keyed by a random id carried in a
//! cookie. A request without a usable session (or with a token that can no
//! longer be refreshed) is redirected back to [`login`]; pipeline failures
//! surface as a generic error page and a warning in the log.

mod callback;
mod chart;
mod health;
mod login;
mod logout;

pub use callback::callback;
pub use chart::chart;
pub use health::health;
pub use login::login;
pub use logout::logout;
