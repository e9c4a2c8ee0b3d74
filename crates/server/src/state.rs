use shutl::store::LocationStore;

pub struct AppState {
    pub store: LocationStore,
}

impl AppState {
    pub fn new(store: LocationStore) -> Self {
        Self { store }
    }
}
