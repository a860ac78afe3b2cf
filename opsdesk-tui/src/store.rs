//! In-memory catalog store with staged loading.
//!
//! The real console fetches each record kind from a backend; here the
//! catalog fills from seed data one slice per tick so the loading screen
//! exercises the same states a remote fetch would.

use log::debug;
use thiserror::Error;

use crate::records::{Location, Role, SapCode, ScheduledJob, TrainingProject, UserAccount, seed};

/// Error produced when a catalog slice fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The state of one lazily-loaded catalog slice.
#[derive(Debug, Clone, Default)]
pub enum SliceState<T> {
    /// Slice has not started loading.
    #[default]
    Idle,
    /// Slice fetch is in flight.
    Loading,
    /// Slice loaded successfully.
    Ready(T),
    /// Slice failed to load.
    Failed(StoreError),
}

impl<T> SliceState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Reference to the loaded value, if ready.
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    /// The load error, if failed.
    pub fn as_failed(&self) -> Option<&StoreError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Short status word for the loading screen.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Idle => "pending",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}

/// Every record slice the console works with.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub locations: SliceState<Vec<Location>>,
    pub sap_codes: SliceState<Vec<SapCode>>,
    pub users: SliceState<Vec<UserAccount>>,
    pub roles: SliceState<Vec<Role>>,
    pub jobs: SliceState<Vec<ScheduledJob>>,
    pub projects: SliceState<Vec<TrainingProject>>,
}

impl Catalog {
    pub fn any_loading(&self) -> bool {
        self.locations.is_loading()
            || self.sap_codes.is_loading()
            || self.users.is_loading()
            || self.roles.is_loading()
            || self.jobs.is_loading()
            || self.projects.is_loading()
    }

    pub fn all_ready(&self) -> bool {
        self.ready_count() == SLICE_COUNT
    }

    /// How many slices have finished loading.
    pub fn ready_count(&self) -> usize {
        [
            self.locations.is_ready(),
            self.sap_codes.is_ready(),
            self.users.is_ready(),
            self.roles.is_ready(),
            self.jobs.is_ready(),
            self.projects.is_ready(),
        ]
        .into_iter()
        .filter(|ready| *ready)
        .count()
    }

    /// First slice error in display order, if any slice failed.
    pub fn first_error(&self) -> Option<&StoreError> {
        self.locations
            .as_failed()
            .or_else(|| self.sap_codes.as_failed())
            .or_else(|| self.users.as_failed())
            .or_else(|| self.roles.as_failed())
            .or_else(|| self.jobs.as_failed())
            .or_else(|| self.projects.as_failed())
    }

    /// Label/state pairs for the loading screen, in display order.
    pub fn slice_statuses(&self) -> [(&'static str, &'static str); SLICE_COUNT] {
        [
            ("locations", self.locations.status()),
            ("sap codes", self.sap_codes.status()),
            ("users", self.users.status()),
            ("roles", self.roles.status()),
            ("jobs", self.jobs.status()),
            ("projects", self.projects.status()),
        ]
    }
}

/// Number of catalog slices the loader walks through.
pub const SLICE_COUNT: usize = 6;

/// Drives the catalog through its loading sequence one step per call.
///
/// Each slice takes two steps: one to enter `Loading`, one to settle in
/// `Ready` (or `Failed` when the backend hands back nothing).
#[derive(Debug, Default)]
pub struct StagedLoader {
    step: usize,
}

impl StagedLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.step >= SLICE_COUNT * 2
    }

    /// Advance one step. Returns `false` once every slice has settled.
    pub fn advance(&mut self, catalog: &mut Catalog) -> bool {
        if self.is_done() {
            return false;
        }
        let slice = self.step / 2;
        let settle = self.step % 2 == 1;
        match slice {
            0 => {
                catalog.locations = if settle {
                    settled("locations", seed::locations())
                } else {
                    SliceState::Loading
                };
            }
            1 => {
                catalog.sap_codes = if settle {
                    settled("sap codes", seed::sap_codes())
                } else {
                    SliceState::Loading
                };
            }
            2 => {
                catalog.users = if settle {
                    settled("users", seed::users())
                } else {
                    SliceState::Loading
                };
            }
            3 => {
                catalog.roles = if settle {
                    settled("roles", seed::roles())
                } else {
                    SliceState::Loading
                };
            }
            4 => {
                catalog.jobs = if settle {
                    settled("jobs", seed::jobs())
                } else {
                    SliceState::Loading
                };
            }
            _ => {
                catalog.projects = if settle {
                    settled("projects", seed::projects())
                } else {
                    SliceState::Loading
                };
            }
        }
        self.step += 1;
        true
    }
}

fn settled<T>(what: &str, records: Vec<T>) -> SliceState<Vec<T>> {
    if records.is_empty() {
        SliceState::Failed(StoreError::new(format!("no {what} returned by backend")))
    } else {
        debug!("catalog slice '{}' ready with {} records", what, records.len());
        SliceState::Ready(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_starts_idle() {
        let catalog = Catalog::default();
        assert!(catalog.locations.is_idle());
        assert!(!catalog.any_loading());
        assert!(!catalog.all_ready());
        assert_eq!(catalog.ready_count(), 0);
        assert!(catalog.first_error().is_none());
    }

    #[test]
    fn test_loader_settles_every_slice() {
        let mut catalog = Catalog::default();
        let mut loader = StagedLoader::new();

        let mut steps = 0;
        while loader.advance(&mut catalog) {
            steps += 1;
            assert!(steps <= SLICE_COUNT * 2, "loader did not terminate");
        }

        assert_eq!(steps, SLICE_COUNT * 2);
        assert!(loader.is_done());
        assert!(catalog.all_ready());
        assert!(!catalog.any_loading());
        assert!(catalog.first_error().is_none());
    }

    #[test]
    fn test_loader_passes_through_loading() {
        let mut catalog = Catalog::default();
        let mut loader = StagedLoader::new();

        assert!(loader.advance(&mut catalog));
        assert!(catalog.locations.is_loading());
        assert!(catalog.any_loading());

        assert!(loader.advance(&mut catalog));
        assert!(catalog.locations.is_ready());
        assert!(!catalog.any_loading());
        assert_eq!(catalog.ready_count(), 1);
    }

    #[test]
    fn test_loader_stops_after_completion() {
        let mut catalog = Catalog::default();
        let mut loader = StagedLoader::new();
        while loader.advance(&mut catalog) {}
        assert!(!loader.advance(&mut catalog));
        assert!(catalog.all_ready());
    }

    #[test]
    fn test_slice_statuses_track_states() {
        let mut catalog = Catalog::default();
        catalog.users = SliceState::Loading;
        catalog.roles = SliceState::Failed(StoreError::new("boom"));

        let statuses = catalog.slice_statuses();
        assert_eq!(statuses[0], ("locations", "pending"));
        assert_eq!(statuses[2], ("users", "loading"));
        assert_eq!(statuses[3], ("roles", "failed"));
        assert_eq!(catalog.first_error().unwrap().message, "boom");
    }

    #[test]
    fn test_empty_slice_settles_failed() {
        let state: SliceState<Vec<u8>> = settled("things", Vec::new());
        assert!(state.is_failed());
        assert_eq!(state.as_failed().unwrap().message, "no things returned by backend");
    }
}
