//! Folder cabinet contract tests
//!
//! These tests define the stable contract for the cabinet's public records.

use folder_types::FolderSize;

// ===== Size Tokens =====
const TOKEN_SMALL: &str = "SMALL";
const TOKEN_MEDIUM: &str = "MEDIUM";
const TOKEN_LARGE: &str = "LARGE";

// ===== Error Messages =====
const MSG_INVALID_SIZE: &str = "Folder size must be SMALL, MEDIUM or LARGE";

/// Returns every size category with its canonical token
pub fn size_vocabulary() -> [(FolderSize, &'static str); 3] {
    [
        (FolderSize::Small, TOKEN_SMALL),
        (FolderSize::Medium, TOKEN_MEDIUM),
        (FolderSize::Large, TOKEN_LARGE),
    ]
}

// ===== Contract Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use folder_types::Folder;
    use serde_json::json;
    use services_cabinet::{Cabinet, CabinetEvent, FolderCabinet};

    #[test]
    fn test_size_tokens_are_stable() {
        // These tokens MUST NOT CHANGE; callers filter by them
        for (size, token) in size_vocabulary() {
            assert_eq!(size.as_str(), token);
            assert_eq!(serde_json::to_value(size).unwrap(), json!(token));
        }
    }

    #[test]
    fn test_size_tokens_parse_back() {
        for (size, token) in size_vocabulary() {
            assert_eq!(token.parse::<FolderSize>().unwrap(), size);
            assert_eq!(token.to_lowercase().parse::<FolderSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_leaf_folder_shape() {
        let folder = Folder::leaf("Reports", FolderSize::Small);

        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(
            value,
            json!({
                "Leaf": {
                    "name": "Reports",
                    "size": "SMALL",
                }
            })
        );

        let deserialized: Folder = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, folder);
    }

    #[test]
    fn test_composite_folder_shape() {
        let folder = Folder::composite(
            "Archive",
            FolderSize::Large,
            vec![Some(Folder::leaf("Q1", FolderSize::Medium)), None],
        );

        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(
            value,
            json!({
                "Composite": {
                    "name": "Archive",
                    "size": "LARGE",
                    "children": [
                        { "Leaf": { "name": "Q1", "size": "MEDIUM" } },
                        null,
                    ],
                }
            })
        );

        let deserialized: Folder = serde_json::from_value(value).unwrap();
        assert_eq!(deserialized, folder);
    }

    #[test]
    fn test_absent_child_slot_serializes_as_null() {
        let folder = Folder::composite("Hollow", FolderSize::Small, vec![None]);

        let value = serde_json::to_value(&folder).unwrap();
        assert_eq!(value["Composite"]["children"], json!([null]));
    }

    #[test]
    fn test_cabinet_event_shapes() {
        let inserted = CabinetEvent::Inserted {
            name: "Reports".to_string(),
            size: FolderSize::Small,
            seq: 0,
        };
        assert_eq!(
            serde_json::to_value(&inserted).unwrap(),
            json!({ "Inserted": { "name": "Reports", "size": "SMALL", "seq": 0 } })
        );

        let removed = CabinetEvent::Removed {
            name: "Reports".to_string(),
            seq: 1,
        };
        assert_eq!(
            serde_json::to_value(&removed).unwrap(),
            json!({ "Removed": { "name": "Reports", "seq": 1 } })
        );

        let replaced = CabinetEvent::Replaced {
            previous_count: 2,
            seq: 2,
        };
        assert_eq!(
            serde_json::to_value(&replaced).unwrap(),
            json!({ "Replaced": { "previous_count": 2, "seq": 2 } })
        );
    }

    #[test]
    fn test_invalid_size_message_is_stable() {
        // This message MUST NOT CHANGE; callers match on it
        let cabinet = FolderCabinet::new();
        let error = cabinet.find_folders_by_size("EXTRA_LARGE").unwrap_err();

        assert_eq!(error.to_string(), MSG_INVALID_SIZE);
    }

    #[test]
    fn test_read_side_is_object_safe() {
        let mut cabinet = FolderCabinet::new();
        cabinet.add_folder(Folder::leaf("Reports", FolderSize::Small));

        let read: &dyn Cabinet = &cabinet;

        assert_eq!(read.count(), 1);
        assert!(read.find_folder_by_name("Reports").is_some());
        assert_eq!(read.find_folders_by_size("small").unwrap().len(), 1);
    }
}
