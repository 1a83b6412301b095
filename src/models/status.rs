//! Attendance status mapping
//!
//! Fixed bidirectional mapping between the server-side status enumeration and
//! the labels the console renders. The forward direction is total: every code
//! the server can emit, including ones added after this client shipped, lands
//! on a `UiStatus`. The reverse direction is deliberately partial — `Unset`
//! has no server code and must never be submitted.

use serde::{Deserialize, Serialize};

/// Server-side attendance status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceStatus {
    Attend,
    Late,
    Absent,
    Other,
    /// Also the landing spot for codes this client does not know
    #[serde(other)]
    Unchecked,
}

impl AttendanceStatus {
    /// Wire form of the code, as the mutation endpoints expect it
    pub fn as_code(&self) -> &'static str {
        match self {
            AttendanceStatus::Attend => "ATTEND",
            AttendanceStatus::Late => "LATE",
            AttendanceStatus::Absent => "ABSENT",
            AttendanceStatus::Other => "OTHER",
            AttendanceStatus::Unchecked => "UNCHECKED",
        }
    }
}

/// Rendered attendance state of one subject on the selected date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiStatus {
    Present,
    Late,
    Absent,
    Etc,
    /// No attendance row exists for the subject on this date
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl UiStatus {
    /// Label used in view state and filters
    pub fn as_label(&self) -> &'static str {
        match self {
            UiStatus::Present => "present",
            UiStatus::Late => "late",
            UiStatus::Absent => "absent",
            UiStatus::Etc => "etc",
            UiStatus::Unset => "",
        }
    }

    /// Reverse mapping used when constructing mutation payloads.
    ///
    /// Returns `None` for `Unset`: there is no server code for it, callers
    /// must guard before submitting.
    pub fn to_code(&self) -> Option<AttendanceStatus> {
        match self {
            UiStatus::Present => Some(AttendanceStatus::Attend),
            UiStatus::Late => Some(AttendanceStatus::Late),
            UiStatus::Absent => Some(AttendanceStatus::Absent),
            UiStatus::Etc => Some(AttendanceStatus::Other),
            UiStatus::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, UiStatus::Unset)
    }
}

impl From<AttendanceStatus> for UiStatus {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Attend => UiStatus::Present,
            AttendanceStatus::Late => UiStatus::Late,
            AttendanceStatus::Absent => UiStatus::Absent,
            AttendanceStatus::Other => UiStatus::Etc,
            AttendanceStatus::Unchecked => UiStatus::Unset,
        }
    }
}

impl std::fmt::Display for UiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_mapping_is_total() {
        let codes = [
            AttendanceStatus::Attend,
            AttendanceStatus::Late,
            AttendanceStatus::Absent,
            AttendanceStatus::Other,
            AttendanceStatus::Unchecked,
        ];
        let labels: Vec<&str> = codes.iter().map(|c| UiStatus::from(*c).as_label()).collect();
        assert_eq!(labels, vec!["present", "late", "absent", "etc", ""]);
    }

    #[test]
    fn test_reverse_then_forward_round_trip() {
        for ui in [
            UiStatus::Present,
            UiStatus::Late,
            UiStatus::Absent,
            UiStatus::Etc,
        ] {
            let code = ui.to_code().expect("defined statuses have a server code");
            assert_eq!(UiStatus::from(code), ui);
        }
    }

    #[test]
    fn test_unset_has_no_reverse_entry() {
        assert_eq!(UiStatus::Unset.to_code(), None);
    }

    #[test]
    fn test_unknown_server_code_deserializes_to_unchecked() {
        let status: AttendanceStatus = serde_json::from_str("\"EXCUSED\"").unwrap();
        assert_eq!(status, AttendanceStatus::Unchecked);
        assert_eq!(UiStatus::from(status), UiStatus::Unset);
    }

    #[test]
    fn test_known_codes_deserialize() {
        let status: AttendanceStatus = serde_json::from_str("\"ATTEND\"").unwrap();
        assert_eq!(status, AttendanceStatus::Attend);
        let status: AttendanceStatus = serde_json::from_str("\"LATE\"").unwrap();
        assert_eq!(status, AttendanceStatus::Late);
    }
}
