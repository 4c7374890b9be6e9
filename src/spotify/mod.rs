//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! genre history service: the OAuth 2.0 authorization-code flow, the
//! paginated saved-tracks listing, and the batched artist lookup. It handles
//! all HTTP communication and keeps the rest of the application working with
//! typed records instead of raw JSON.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorize URL, code exchange, refresh)
//!     ├── Saved Tracks (offset pagination)
//!     └── Artist Lookup (batched by id)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Builds the authorization URL and exchanges or refreshes
//!   tokens against the accounts service. The flow is the classic
//!   authorization-code variant: the client secret stays on the server, the
//!   user's browser only ever sees the authorize redirect and the callback.
//! - [`tracks`] - Fetches the complete saved-track library, page by page,
//!   until a short page signals the end of the list.
//! - [`artists`] - Resolves artist metadata (most importantly genre tags) in
//!   batches of up to 50 ids per request.
//!
//! ## Error Handling
//!
//! None of the data calls retry: transport errors, auth rejections, and rate
//! limits all propagate to the calling handler, which logs them and surfaces
//! a generic error page. Token refresh failures are reported as strings and
//! treated as "not authenticated" by the session layer.
//!
//! ## API Coverage
//!
//! - `GET /me/tracks` - saved-tracks listing with limit/offset pagination
//! - `GET /artists` - batched artist lookup by id list
//! - `POST /api/token` - token exchange and refresh operations

pub mod artists;
pub mod auth;
pub mod tracks;
