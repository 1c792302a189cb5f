//! HTTP surface of cinelink: token redirects and link menus for normalized
//! details documents.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod presenter;
pub mod state;

pub use app::App;
pub use error::GatewayError;
pub use presenter::{LinkPresenter, MenuEntry, PresenterSettings};
pub use state::AppState;
