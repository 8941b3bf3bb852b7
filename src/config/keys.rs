//! Preference key names.
//!
//! Keys are opaque strings. The defaults below can be remapped by loading a
//! `PrefKeys` table from TOML; any field left out keeps its default.

use serde::Deserialize;

use crate::error::PrefsError;

use super::types::CameraFacing;

pub const REAR_PREVIEW_SIZE: &str = "pref_rear_preview";
pub const REAR_PICTURE_SIZE: &str = "pref_rear_picture";
pub const FRONT_PREVIEW_SIZE: &str = "pref_front_preview";
pub const FRONT_PICTURE_SIZE: &str = "pref_front_picture";
pub const INFO_HIDE: &str = "pref_info_hide";
pub const CAMERA_LIVE_VIEWPORT: &str = "pref_camera_live_viewport";
pub const FACE_LANDMARK_MODE: &str = "pref_face_landmark_mode";
pub const FACE_CONTOUR_MODE: &str = "pref_face_contour_mode";
pub const FACE_CLASSIFICATION_MODE: &str = "pref_face_classification_mode";
pub const FACE_PERFORMANCE_MODE: &str = "pref_face_performance_mode";
pub const FACE_TRACKING: &str = "pref_face_tracking";
pub const FACE_MIN_FACE_SIZE: &str = "pref_face_min_face_size";

// Object detector keys are passed in by the caller; these are the names the
// stock settings screens use.
pub const OBJECT_MULTIPLE: &str = "pref_object_multiple";
pub const OBJECT_CLASSIFICATION: &str = "pref_object_classification";
pub const CUSTOM_OBJECT_MULTIPLE: &str = "pref_custom_object_multiple";
pub const CUSTOM_OBJECT_CLASSIFICATION: &str = "pref_custom_object_classification";

/// Key names used by [`ConfigResolver`](super::ConfigResolver).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrefKeys {
    pub rear_preview_size: String,
    pub rear_picture_size: String,
    pub front_preview_size: String,
    pub front_picture_size: String,
    pub info_hide: String,
    pub camera_live_viewport: String,
    pub face_landmark_mode: String,
    pub face_contour_mode: String,
    pub face_classification_mode: String,
    pub face_performance_mode: String,
    pub face_tracking: String,
    pub face_min_face_size: String,
}

impl Default for PrefKeys {
    fn default() -> Self {
        Self {
            rear_preview_size: REAR_PREVIEW_SIZE.into(),
            rear_picture_size: REAR_PICTURE_SIZE.into(),
            front_preview_size: FRONT_PREVIEW_SIZE.into(),
            front_picture_size: FRONT_PICTURE_SIZE.into(),
            info_hide: INFO_HIDE.into(),
            camera_live_viewport: CAMERA_LIVE_VIEWPORT.into(),
            face_landmark_mode: FACE_LANDMARK_MODE.into(),
            face_contour_mode: FACE_CONTOUR_MODE.into(),
            face_classification_mode: FACE_CLASSIFICATION_MODE.into(),
            face_performance_mode: FACE_PERFORMANCE_MODE.into(),
            face_tracking: FACE_TRACKING.into(),
            face_min_face_size: FACE_MIN_FACE_SIZE.into(),
        }
    }
}

impl PrefKeys {
    pub fn from_toml_str(raw: &str) -> Result<Self, PrefsError> {
        toml::from_str(raw).map_err(|e| PrefsError::Store(format!("invalid key table: {e}")))
    }

    /// `(preview, picture)` keys for one camera.
    pub fn size_keys(&self, facing: CameraFacing) -> (&str, &str) {
        match facing {
            CameraFacing::Back => (self.rear_preview_size.as_str(), self.rear_picture_size.as_str()),
            CameraFacing::Front => (self.front_preview_size.as_str(), self.front_picture_size.as_str()),
        }
    }
}
