//! Resolved configuration types.
//!
//! These are the typed values handed to the detection and camera layers.
//! The integer codes of the mode enums are fixed by the detection library
//! and must not change. Face detector modes are owned by that library, so a
//! code this crate has no name for is carried through as `Other(code)`.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::size::Size;

/// An integer that does not correspond to any variant of a coded enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i32,
}

/// Enums persisted as their integer code.
pub trait Coded: Copy {
    fn code(self) -> i32;
}

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Coded for $name {
            fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code ),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = UnknownCode;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    _ => Err(UnknownCode { kind: $kind, code }),
                }
            }
        }
    };
}

/// Like `coded_enum!`, but every integer converts: unnamed codes become
/// `Other(code)`. `from` never builds `Other` for a named code.
macro_rules! open_coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident = $code:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            Other(i32),
        }

        impl Coded for $name {
            fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Other(code) => code,
                }
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Other(other),
                }
            }
        }
    };
}

coded_enum! {
    /// Which camera a preview size pair belongs to.
    CameraFacing, "camera facing" {
        Back = 0,
        Front = 1,
    }
}

coded_enum! {
    /// Streaming vs single-image object detection.
    DetectorMode, "detector mode" {
        Stream = 1,
        SingleImage = 2,
    }
}

open_coded_enum! {
    LandmarkMode {
        None = 1,
        All = 2,
    }
}

open_coded_enum! {
    ContourMode {
        None = 1,
        All = 2,
    }
}

open_coded_enum! {
    ClassificationMode {
        None = 1,
        All = 2,
    }
}

open_coded_enum! {
    PerformanceMode {
        Fast = 1,
        Accurate = 2,
    }
}

// ── Camera ───────────────────────────────────────────────────────────────────

/// Preview and picture resolutions for one camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePair {
    pub preview: Size,
    pub picture: Size,
}

// ── Object detection ─────────────────────────────────────────────────────────

/// Options for the bundled object detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectDetectorConfig {
    pub mode: DetectorMode,
    pub multiple_objects_enabled: bool,
    pub classification_enabled: bool,
}

/// Handle to a custom detection model supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalModel {
    path: PathBuf,
}

impl LocalModel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Options for an object detector running a custom model.
///
/// The model is borrowed; the host keeps ownership of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomObjectDetectorConfig<'m> {
    pub model: &'m LocalModel,
    pub mode: DetectorMode,
    pub multiple_objects_enabled: bool,
    pub classification_enabled: bool,
    /// `Some(1)` whenever classification is on; `None` leaves the detector's
    /// own limit in place.
    pub max_labels_per_object: Option<u32>,
}

// ── Face detection ───────────────────────────────────────────────────────────

pub const DEFAULT_MIN_FACE_SIZE: f32 = 0.1;

/// Options for the face detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDetectorConfig {
    pub landmark_mode: LandmarkMode,
    pub contour_mode: ContourMode,
    pub classification_mode: ClassificationMode,
    pub performance_mode: PerformanceMode,
    /// Smallest face to detect, as a fraction of the image width.
    /// Not range-checked.
    pub min_face_size: f32,
    pub tracking_enabled: bool,
}

impl Default for FaceDetectorConfig {
    fn default() -> Self {
        Self {
            landmark_mode: LandmarkMode::All,
            contour_mode: ContourMode::All,
            classification_mode: ClassificationMode::All,
            performance_mode: PerformanceMode::Fast,
            min_face_size: DEFAULT_MIN_FACE_SIZE,
            tracking_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_detection_library() {
        assert_eq!(DetectorMode::Stream.code(), 1);
        assert_eq!(DetectorMode::SingleImage.code(), 2);
        assert_eq!(LandmarkMode::All.code(), 2);
        assert_eq!(ContourMode::None.code(), 1);
        assert_eq!(ClassificationMode::All.code(), 2);
        assert_eq!(PerformanceMode::Fast.code(), 1);
        assert_eq!(PerformanceMode::Accurate.code(), 2);
        assert_eq!(CameraFacing::Back.code(), 0);
        assert_eq!(CameraFacing::Front.code(), 1);
    }

    #[test]
    fn known_codes_convert_to_named_variants() {
        assert_eq!(LandmarkMode::from(1), LandmarkMode::None);
        assert_eq!(PerformanceMode::from(2), PerformanceMode::Accurate);
        assert_eq!(CameraFacing::try_from(1), Ok(CameraFacing::Front));
        assert_eq!(DetectorMode::try_from(2), Ok(DetectorMode::SingleImage));
    }

    #[test]
    fn unnamed_face_mode_codes_pass_through() {
        assert_eq!(ContourMode::from(3), ContourMode::Other(3));
        assert_eq!(ClassificationMode::from(0), ClassificationMode::Other(0));
        assert_eq!(ContourMode::Other(3).code(), 3);
        assert_eq!(LandmarkMode::from(-4).code(), -4);
    }

    #[test]
    fn strict_enums_reject_unknown_codes() {
        let err = CameraFacing::try_from(-1).unwrap_err();
        assert_eq!(err, UnknownCode { kind: "camera facing", code: -1 });
        assert!(DetectorMode::try_from(0).is_err());
    }

    #[test]
    fn face_defaults() {
        let cfg = FaceDetectorConfig::default();
        assert_eq!(cfg.landmark_mode, LandmarkMode::All);
        assert_eq!(cfg.contour_mode, ContourMode::All);
        assert_eq!(cfg.classification_mode, ClassificationMode::All);
        assert_eq!(cfg.performance_mode, PerformanceMode::Fast);
        assert_eq!(cfg.min_face_size, 0.1);
        assert!(cfg.tracking_enabled);
    }

    #[test]
    fn local_model_keeps_path() {
        let model = LocalModel::new("models/birds.tflite");
        assert_eq!(model.path(), Path::new("models/birds.tflite"));
    }
}
