//! Integration tests: resolution against the bundled stores.
//!
//! Run with:
//!   cargo test --test test_resolver

use std::fs;

use tempfile::TempDir;

use vision_prefs::config::{
    keys, CameraFacing, Coded, DetectorMode, FaceDetectorConfig, LocalModel, PerformanceMode, PrefKeys,
    Size, SizePair,
};
use vision_prefs::store::PrefValue;
use vision_prefs::{ConfigResolver, FileStore, MemoryStore, PrefsError, SettingsStore};

// ── helpers ──────────────────────────────────────────────────────────────────

fn prefs_file(content: &str) -> (TempDir, FileStore) {
    let tmp = TempDir::new().expect("tempdir");
    let path = tmp.path().join("prefs.toml");
    fs::write(&path, content).expect("write prefs");
    let store = FileStore::open(&path).expect("open store");
    (tmp, store)
}

// ── tests ────────────────────────────────────────────────────────────────────

#[test]
fn rear_camera_scenario_from_file() {
    let (_tmp, store) = prefs_file(
        r#"
pref_rear_preview = "640x480"
pref_rear_picture = "1280x720"
"#,
    );
    let resolver = ConfigResolver::new(&store);
    assert_eq!(
        resolver.camera_preview_size_pair(CameraFacing::Back.code()).unwrap(),
        Some(SizePair {
            preview: Size::new(640, 480),
            picture: Size::new(1280, 720),
        })
    );
}

#[test]
fn empty_store_flags_are_off() {
    let store = MemoryStore::new();
    let resolver = ConfigResolver::new(&store);
    assert!(!resolver.should_hide_detection_info());
    assert!(!resolver.is_camera_live_viewport_enabled());
    assert_eq!(resolver.camera_preview_size_pair(1).unwrap(), None);
}

#[test]
fn invalid_facing_does_not_touch_store() {
    struct Unreachable;
    impl SettingsStore for Unreachable {
        fn get_raw(&self, key: &str) -> Option<PrefValue> {
            panic!("unexpected read of {key}");
        }
        fn set_string(&self, key: &str, _value: Option<&str>) {
            panic!("unexpected write of {key}");
        }
    }

    let resolver = ConfigResolver::new(&Unreachable);
    for id in [-1, 2, 99] {
        assert!(matches!(
            resolver.camera_preview_size_pair(id),
            Err(PrefsError::InvalidArgument(_))
        ));
    }
}

#[test]
fn face_config_from_file_with_overrides() {
    let (_tmp, store) = prefs_file(
        r#"
pref_face_performance_mode = "2"
pref_face_min_face_size = "0.5"
pref_face_tracking = false
"#,
    );
    let resolver = ConfigResolver::new(&store);
    let cfg = resolver.face_detector_config().unwrap();
    assert_eq!(
        cfg,
        FaceDetectorConfig {
            performance_mode: PerformanceMode::Accurate,
            min_face_size: 0.5,
            tracking_enabled: false,
            ..FaceDetectorConfig::default()
        }
    );
}

#[test]
fn corrupt_face_mode_surfaces_while_sizes_degrade() {
    let (_tmp, store) = prefs_file(
        r#"
pref_face_landmark_mode = "everything"
pref_front_preview = "garbage"
pref_front_picture = "640x480"
"#,
    );
    let resolver = ConfigResolver::new(&store);
    assert!(matches!(
        resolver.face_detector_config(),
        Err(PrefsError::MalformedValue { .. })
    ));
    assert_eq!(resolver.size_pair(CameraFacing::Front), None);
}

#[test]
fn boolean_face_value_in_file_is_rejected() {
    let (_tmp, store) = prefs_file(
        r#"
pref_face_contour_mode = true
pref_info_hide = true
"#,
    );
    let resolver = ConfigResolver::new(&store);
    match resolver.face_detector_config() {
        Err(PrefsError::MalformedValue { key, .. }) => assert_eq!(key, keys::FACE_CONTOUR_MODE),
        other => panic!("expected MalformedValue, got {other:?}"),
    }
    assert!(resolver.should_hide_detection_info());
}

#[test]
fn saved_values_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("prefs.toml");
    {
        let store = FileStore::open(&path).unwrap();
        let resolver = ConfigResolver::new(&store);
        resolver.save_string(keys::FRONT_PREVIEW_SIZE, Some("320x240"));
        resolver.save_string(keys::FRONT_PICTURE_SIZE, Some("640*480"));
    }

    let store = FileStore::open(&path).unwrap();
    let resolver = ConfigResolver::new(&store);
    assert_eq!(
        resolver.size_pair(CameraFacing::Front),
        Some(SizePair {
            preview: Size::new(320, 240),
            picture: Size::new(640, 480),
        })
    );
}

#[test]
fn remapped_keys_from_toml() {
    let keys = PrefKeys::from_toml_str(
        r#"
rear_preview_size = "rcpvs"
rear_picture_size = "rcpts"
"#,
    )
    .unwrap();
    let store = MemoryStore::new()
        .with_string("rcpvs", "1920x1080")
        .with_string("rcpts", "4032x3024");
    let resolver = ConfigResolver::with_keys(&store, keys);
    let pair = resolver.size_pair(CameraFacing::Back).unwrap();
    assert_eq!(pair.preview, Size::new(1920, 1080));
    assert_eq!(pair.picture, Size::new(4032, 3024));
}

#[test]
fn custom_detector_single_label_when_classifying() {
    let (_tmp, store) = prefs_file("pref_custom_object_multiple = false\n");
    let model = LocalModel::new("models/object_labeler.tflite");
    let resolver = ConfigResolver::new(&store);
    let cfg = resolver.custom_object_detector_config(
        &model,
        keys::CUSTOM_OBJECT_MULTIPLE,
        keys::CUSTOM_OBJECT_CLASSIFICATION,
        DetectorMode::SingleImage,
    );
    assert!(!cfg.multiple_objects_enabled);
    assert!(cfg.classification_enabled);
    assert_eq!(cfg.max_labels_per_object, Some(1));
    assert_eq!(cfg.model.path(), model.path());
}
