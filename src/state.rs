use std::sync::Arc;

use crate::config::Config;
use crate::content::SiteContent;
use crate::store::ContactStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub content: SiteContent,
    pub store: Arc<dyn ContactStore>,
}
