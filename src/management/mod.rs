mod auth;
mod genres;
mod session;

pub use auth::AuthError;
pub use auth::TokenManager;
pub use auth::TokenState;
pub use genres::ArtistGenreManager;
pub use genres::distinct_primary_artists;
pub use session::SESSION_COOKIE;
pub use session::Session;
pub use session::SessionStore;
