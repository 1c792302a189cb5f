use crate::presenter::MenuEntry;
use cinelink_core::DetailsPayload;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub caption: String,
    pub details: DetailsPayload,
    pub menu: Vec<MenuEntry>,
}
