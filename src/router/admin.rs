//! Admin queries.
//!
//! Private messages from senders matching an `admins` pattern land here.
//! There is no admin command language yet; queries are logged and answered
//! with nothing.

use super::Router;
use crate::event::Source;
use tracing::info;

impl Router {
    pub(super) fn on_admin_query(&self, source: &Source, text: &str) {
        info!(admin = %source.mask(), text = %text, "Admin query");
    }
}
