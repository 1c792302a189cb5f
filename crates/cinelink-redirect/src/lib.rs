//! Short-lived redirect tokens.
//!
//! A [`RedirectStore`] trades long, ugly source URLs for compact opaque
//! tokens that resolve back to the URL until their TTL elapses.

pub mod clock;
pub mod error;
pub mod generator;
pub mod redirector;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{RedirectError, Result};
pub use generator::TokenGenerator;
pub use redirector::{Redirector, Resolution};
pub use store::{RedirectEntry, RedirectStore, StoreSettings};
