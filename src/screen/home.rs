use crate::directory::loader::{LoadOutcome, RemoteListLoader};
use crate::directory::record_model::Hospital;
use crate::directory::search::filter_hospitals;
use crate::directory::source::HospitalSource;
use crate::screen::screen_model::HospitalCard;
use crate::viewed::store::ViewTrackingStore;

/// View model of the hospital listing screen.
///
/// Owns the list loader and the search query. The viewed store is shared
/// with the rest of the app, so it is passed in rather than held.
pub struct HomeScreen {
    loader: RemoteListLoader,
    query: String,
}

impl HomeScreen {
    /// Mount the screen: a fresh loader that fetches exactly once.
    pub fn mount(source: Box<dyn HospitalSource>) -> Self {
        let mut loader = RemoteListLoader::new(source);
        loader.load();
        Self {
            loader,
            query: String::new(),
        }
    }

    pub fn loader(&self) -> &RemoteListLoader {
        &self.loader
    }

    pub fn outcome(&self) -> Option<&LoadOutcome> {
        self.loader.outcome()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Hospitals matching the current query.
    pub fn visible(&self) -> Vec<&Hospital> {
        filter_hospitals(self.loader.hospitals(), &self.query)
    }

    pub fn cards(&self, store: &ViewTrackingStore) -> Vec<HospitalCard> {
        self.visible()
            .into_iter()
            .map(|h| HospitalCard::new(h, store.is_viewed(&h.id)))
            .collect()
    }

    /// Press "View" on a card. Only unviewed hospitals are recorded; returns
    /// whether this press marked something new.
    pub fn press_view(&self, id: &str, store: &mut ViewTrackingStore) -> bool {
        if store.is_viewed(id) {
            return false;
        }
        store.add_viewed(id)
    }

    pub fn find(&self, id: &str) -> Option<&Hospital> {
        self.loader.hospitals().iter().find(|h| h.id == id)
    }

    /// The refresh action: every badge goes back to "View".
    pub fn refresh(&self, store: &mut ViewTrackingStore) {
        store.clear_viewed();
    }

    pub fn viewed_label(&self, store: &ViewTrackingStore) -> String {
        format!("Viewed: {}", store.viewed_count())
    }
}
