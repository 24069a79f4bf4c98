// Viewer sessions: one carousel controller per viewer, shared behind a mutex,
// plus the HTTP handlers that drive them.

pub mod handlers;
pub mod session;
pub mod store;
pub mod view;

pub use session::{FitProfile, Session, SharedSession};
pub use store::SessionStore;
pub use view::{card_view, CardView, SessionView};
