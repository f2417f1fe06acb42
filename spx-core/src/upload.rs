//! Upload gate for the landing view.
//!
//! The view holds two independent file slots. Files are kept only as opaque
//! handles; nothing here reads, sniffs or validates their contents. The one
//! outward transition is `submit`, which succeeds only when both slots are
//! filled.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Path the gate navigates to once both files are selected.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A user-selected file, identified only by what the picker reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle(String);

impl FileHandle {
    /// Build a handle from a file input's reported value.
    ///
    /// Browsers report an empty value when the dialog is cancelled, which
    /// means "no file" for that slot.
    pub fn from_picker_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    /// Display label for the handle (browsers prefix a fake path).
    pub fn label(&self) -> &str {
        self.0
            .rsplit(['\\', '/'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

/// One of the two upload inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Primary,
    Secondary,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Primary => write!(f, "primary file"),
            Slot::Secondary => write!(f, "secondary file"),
        }
    }
}

/// Derived state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Empty,
    PartiallyFilled,
    Ready,
}

/// Local state of the upload view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub primary: Option<FileHandle>,
    pub secondary: Option<FileHandle>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the handle in `slot`. The other slot is never touched.
    pub fn select(&mut self, slot: Slot, handle: Option<FileHandle>) {
        match slot {
            Slot::Primary => self.primary = handle,
            Slot::Secondary => self.secondary = handle,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&FileHandle> {
        match slot {
            Slot::Primary => self.primary.as_ref(),
            Slot::Secondary => self.secondary.as_ref(),
        }
    }

    pub fn phase(&self) -> GatePhase {
        match (self.primary.is_some(), self.secondary.is_some()) {
            (true, true) => GatePhase::Ready,
            (false, false) => GatePhase::Empty,
            _ => GatePhase::PartiallyFilled,
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.phase() == GatePhase::Ready
    }

    /// Slots still waiting for a file, in display order.
    pub fn missing_slots(&self) -> Vec<Slot> {
        [Slot::Primary, Slot::Secondary]
            .into_iter()
            .filter(|slot| self.get(*slot).is_none())
            .collect()
    }

    /// Attempt the transition to the dashboard.
    ///
    /// `Ok` means the caller should navigate to [`DASHBOARD_PATH`] exactly
    /// once. On `Err` the view stays where it is and shows the message.
    pub fn submit(&self) -> Result<(), ValidationError> {
        if self.can_proceed() {
            log::info!("Upload gate ready, proceeding to {}", DASHBOARD_PATH);
            Ok(())
        } else {
            let missing = self.missing_slots();
            log::warn!("Dashboard requested with missing uploads: {:?}", missing);
            Err(ValidationError::MissingFiles { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str) -> Option<FileHandle> {
        FileHandle::from_picker_value(name)
    }

    #[test]
    fn test_can_proceed_iff_both_present() {
        let options = [None, handle("a.xlsx")];
        for primary in options.iter() {
            for secondary in options.iter() {
                let state = UploadState {
                    primary: primary.clone(),
                    secondary: secondary.clone(),
                };
                assert_eq!(
                    state.can_proceed(),
                    primary.is_some() && secondary.is_some()
                );
                assert_eq!(state.submit().is_ok(), state.can_proceed());
            }
        }
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = UploadState::new();
        assert_eq!(state.phase(), GatePhase::Empty);

        state.select(Slot::Secondary, handle("sponsors.csv"));
        assert_eq!(state.phase(), GatePhase::PartiallyFilled);

        state.select(Slot::Secondary, handle("sponsors-v2.csv"));
        assert_eq!(state.phase(), GatePhase::PartiallyFilled);

        state.select(Slot::Primary, handle("companies.xlsx"));
        assert_eq!(state.phase(), GatePhase::Ready);
    }

    #[test]
    fn test_select_leaves_other_slot_alone() {
        let mut state = UploadState::new();
        state.select(Slot::Primary, handle("one.pdf"));
        state.select(Slot::Secondary, handle("two.pdf"));
        state.select(Slot::Secondary, None);

        assert_eq!(state.primary, handle("one.pdf"));
        assert_eq!(state.secondary, None);

        state.select(Slot::Primary, handle("three.pdf"));
        assert_eq!(state.secondary, None);
    }

    #[test]
    fn test_submit_with_missing_primary() {
        let mut state = UploadState::new();
        state.select(Slot::Secondary, handle("two.pdf"));

        let err = state.submit().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFiles {
                missing: vec![Slot::Primary]
            }
        );
        assert_eq!(
            err.to_string(),
            "Please upload both files before generating the dashboard."
        );
    }

    #[test]
    fn test_submit_when_ready() {
        let mut state = UploadState::new();
        state.select(Slot::Primary, handle("one.pdf"));
        state.select(Slot::Secondary, handle("two.pdf"));
        assert!(state.submit().is_ok());
    }

    #[test]
    fn test_picker_value_handling() {
        assert_eq!(FileHandle::from_picker_value(""), None);
        assert_eq!(FileHandle::from_picker_value("   "), None);

        let h = FileHandle::from_picker_value("C:\\fakepath\\report.xlsx").unwrap();
        assert_eq!(h.label(), "report.xlsx");

        let h = FileHandle::from_picker_value("report.xlsx").unwrap();
        assert_eq!(h.label(), "report.xlsx");
    }
}
