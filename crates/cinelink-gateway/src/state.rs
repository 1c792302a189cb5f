use crate::presenter::{LinkPresenter, PresenterSettings};
use cinelink_redirect::Redirector;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    redirector: Arc<dyn Redirector>,
    presenter: Arc<LinkPresenter>,
}

impl AppState {
    /// The presenter issues tokens into the same store the redirect route
    /// resolves from.
    pub fn new(redirector: Arc<dyn Redirector>, settings: PresenterSettings) -> Self {
        let presenter = Arc::new(LinkPresenter::new(settings, Arc::clone(&redirector)));
        Self {
            redirector,
            presenter,
        }
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn presenter(&self) -> &LinkPresenter {
        &self.presenter
    }
}
