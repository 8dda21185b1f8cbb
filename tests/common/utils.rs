use std::cell::Cell;
use std::rc::Rc;

use hospital_directory::directory::record_model::RawHospital;
use hospital_directory::directory::source::{FetchError, HospitalSource, StaticHospitalSource};
use hospital_directory::storage::kv::MemoryStorage;
use hospital_directory::viewed::persistence::KvViewedPersistence;
use hospital_directory::viewed::store::ViewTrackingStore;

/// The bundled four-hospital directory.
pub fn sample_source() -> Box<dyn HospitalSource> {
    Box::new(StaticHospitalSource::bundled().unwrap())
}

/// A store rehydrated over `storage`.
pub fn store_over(storage: &MemoryStorage) -> ViewTrackingStore {
    ViewTrackingStore::rehydrate(Box::new(KvViewedPersistence::new(storage.clone())))
}

pub fn raw(id: &str, name: &str, street: &str, city: &str) -> RawHospital {
    RawHospital {
        hospital_id: Some(id.into()),
        name: Some(name.into()),
        street_address: Some(street.into()),
        city: Some(city.into()),
        zip_code: None,
        phone: None,
        hospital_bed_count: None,
    }
}

/// Simulates a network error on every fetch.
pub struct FailingSource;

impl HospitalSource for FailingSource {
    fn fetch(&self) -> Result<Vec<RawHospital>, FetchError> {
        Err(FetchError::Unavailable("connection refused".into()))
    }
}

/// Counts how many fetches were made.
pub struct CountingSource {
    pub calls: Rc<Cell<usize>>,
    pub hospitals: Vec<RawHospital>,
}

impl HospitalSource for CountingSource {
    fn fetch(&self) -> Result<Vec<RawHospital>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.hospitals.clone())
    }
}
