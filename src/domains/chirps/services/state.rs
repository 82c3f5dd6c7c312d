// Chirps domain state
use crate::domains::chirps::services::ChirpService;
use crate::shared::database::Storage;

#[derive(Clone)]
pub struct ChirpState {
    pub chirp_service: ChirpService,
}

impl ChirpState {
    pub fn new(storage: &Storage) -> Self {
        Self {
            chirp_service: ChirpService::new(storage.chirps.clone()),
        }
    }
}
