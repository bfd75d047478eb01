use crate::types::HealthRes;

/// Health service shared by every API surface
///
/// Reports liveness together with the number of files currently held, which is the only state
/// the service has.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Builds the health payload for a store holding `stored_files` records.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health(stored_files: usize) -> HealthRes {
        HealthRes {
            ok: true,
            message: format!("ChargedFile is alive ({} files stored)", stored_files),
        }
    }
}
