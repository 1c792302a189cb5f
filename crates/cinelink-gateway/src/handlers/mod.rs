mod health;
mod menu;
mod redirect;

pub use health::health_handler;
pub use menu::menu_handler;
pub use redirect::redirect_handler;
