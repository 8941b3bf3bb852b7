//! Preference → configuration resolution.
//!
//! Defaulting rules differ per value kind:
//!
//! - booleans: absent key → documented default; reads cannot fail.
//! - camera sizes: absent or unparsable → the whole pair is `None`.
//! - face detector modes and min face size: absent → default, but a value
//!   that is present and unparsable, or stored as a boolean, is an error
//!   returned to the caller. Integer mode codes are forwarded as-is.

use tracing::{debug, warn};

use crate::error::PrefsError;
use crate::store::{PrefValue, SettingsStore};

use super::keys::PrefKeys;
use super::size::Size;
use super::types::*;

/// Resolves typed configuration from a borrowed settings store.
#[derive(Debug)]
pub struct ConfigResolver<'s, S: SettingsStore + ?Sized> {
    store: &'s S,
    keys: PrefKeys,
}

impl<'s, S: SettingsStore + ?Sized> ConfigResolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self::with_keys(store, PrefKeys::default())
    }

    pub fn with_keys(store: &'s S, keys: PrefKeys) -> Self {
        Self { store, keys }
    }

    /// Write a string preference. `None` removes it.
    pub fn save_string(&self, key: &str, value: Option<&str>) {
        self.store.set_string(key, value);
    }

    /// Stored size pair for a raw camera id (`0` = back, `1` = front).
    ///
    /// An unknown id is a caller error and is rejected before the store is
    /// touched. `Ok(None)` means no usable sizes are stored yet.
    pub fn camera_preview_size_pair(&self, camera_id: i32) -> Result<Option<SizePair>, PrefsError> {
        let facing = CameraFacing::try_from(camera_id)
            .map_err(|e| PrefsError::InvalidArgument(e.to_string()))?;
        Ok(self.size_pair(facing))
    }

    pub fn size_pair(&self, facing: CameraFacing) -> Option<SizePair> {
        let (preview_key, picture_key) = self.keys.size_keys(facing);
        let preview = self.stored_size(preview_key)?;
        let picture = self.stored_size(picture_key)?;
        Some(SizePair { preview, picture })
    }

    fn stored_size(&self, key: &str) -> Option<Size> {
        let Some(raw) = self.store.get_string(key) else {
            debug!(key, "no stored camera size");
            return None;
        };
        match raw.parse::<Size>() {
            Ok(size) => Some(size),
            Err(e) => {
                debug!(key, "ignoring stored camera size: {e}");
                None
            }
        }
    }

    pub fn should_hide_detection_info(&self) -> bool {
        self.store.get_bool(&self.keys.info_hide, false)
    }

    pub fn is_camera_live_viewport_enabled(&self) -> bool {
        self.store.get_bool(&self.keys.camera_live_viewport, false)
    }

    pub fn object_detector_config(
        &self,
        multiple_objects_key: &str,
        classification_key: &str,
        mode: DetectorMode,
    ) -> ObjectDetectorConfig {
        ObjectDetectorConfig {
            mode,
            multiple_objects_enabled: self.store.get_bool(multiple_objects_key, true),
            classification_enabled: self.store.get_bool(classification_key, true),
        }
    }

    /// Like [`object_detector_config`](Self::object_detector_config), for a
    /// custom model. Classification on a custom model reports one label per
    /// object.
    pub fn custom_object_detector_config<'m>(
        &self,
        model: &'m LocalModel,
        multiple_objects_key: &str,
        classification_key: &str,
        mode: DetectorMode,
    ) -> CustomObjectDetectorConfig<'m> {
        let base = self.object_detector_config(multiple_objects_key, classification_key, mode);
        CustomObjectDetectorConfig {
            model,
            mode: base.mode,
            multiple_objects_enabled: base.multiple_objects_enabled,
            classification_enabled: base.classification_enabled,
            max_labels_per_object: base.classification_enabled.then_some(1),
        }
    }

    pub fn face_detector_config(&self) -> Result<FaceDetectorConfig, PrefsError> {
        let defaults = FaceDetectorConfig::default();
        Ok(FaceDetectorConfig {
            landmark_mode: self.mode_value(&self.keys.face_landmark_mode, defaults.landmark_mode)?,
            contour_mode: self.mode_value(&self.keys.face_contour_mode, defaults.contour_mode)?,
            classification_mode: self
                .mode_value(&self.keys.face_classification_mode, defaults.classification_mode)?,
            performance_mode: self
                .mode_value(&self.keys.face_performance_mode, defaults.performance_mode)?,
            min_face_size: self.min_face_size()?,
            tracking_enabled: self.store.get_bool(&self.keys.face_tracking, true),
        })
    }

    /// String read for the face path: a value stored under another type is
    /// malformed, not absent.
    fn face_string(&self, key: &str) -> Result<Option<String>, PrefsError> {
        match self.store.get_raw(key) {
            Some(PrefValue::Str(s)) => Ok(Some(s)),
            Some(other) => {
                warn!(key, kind = other.type_name(), "face preference is not stored as a string");
                let value = match &other {
                    PrefValue::Bool(b) => b.to_string(),
                    PrefValue::Str(s) => s.clone(),
                };
                Err(PrefsError::malformed(
                    key,
                    &value,
                    format!("stored as {}, expected string", other.type_name()),
                ))
            }
            None => Ok(None),
        }
    }

    /// Mode preferences are stored as the decimal string of the mode code.
    fn mode_value<M: Coded + From<i32>>(&self, key: &str, default: M) -> Result<M, PrefsError> {
        let raw = self
            .face_string(key)?
            .unwrap_or_else(|| default.code().to_string());
        let code = raw.parse::<i32>().map_err(|e| {
            warn!(key, value = %raw, "stored mode is not an integer");
            PrefsError::malformed(key, &raw, e)
        })?;
        Ok(M::from(code))
    }

    fn min_face_size(&self) -> Result<f32, PrefsError> {
        let key = &self.keys.face_min_face_size;
        let raw = self
            .face_string(key)?
            .unwrap_or_else(|| DEFAULT_MIN_FACE_SIZE.to_string());
        raw.trim().parse::<f32>().map_err(|e| {
            warn!(key = %key, value = %raw, "stored min face size is not a number");
            PrefsError::malformed(key, &raw, e)
        })
    }
}
