//! Classroom model and the class label ordering

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Two-valued school type distinction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchoolType {
    Middle,
    High,
}

impl SchoolType {
    /// Single-character prefix used in class labels
    pub fn prefix(&self) -> &'static str {
        match self {
            SchoolType::Middle => "중",
            SchoolType::High => "고",
        }
    }

    /// Full name shown on statistics cards
    pub fn display_name(&self) -> &'static str {
        match self {
            SchoolType::Middle => "중학교",
            SchoolType::High => "고등학교",
        }
    }
}

/// Grouping/filter key derived from school type, grade and section
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassLabel {
    pub school_type: SchoolType,
    pub grade: u8,
    pub section: u8,
}

fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(중|고)(\d+)-(\d+)").expect("label pattern is valid"))
}

impl ClassLabel {
    pub fn new(school_type: SchoolType, grade: u8, section: u8) -> Self {
        Self {
            school_type,
            grade,
            section,
        }
    }

    /// Parse a rendered label like "중1-2" back into its parts
    pub fn parse(label: &str) -> Option<Self> {
        let captures = label_pattern().captures(label)?;
        let school_type = match &captures[1] {
            "중" => SchoolType::Middle,
            _ => SchoolType::High,
        };
        let grade = captures[2].parse().ok()?;
        let section = captures[3].parse().ok()?;
        Some(Self::new(school_type, grade, section))
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}-{}",
            self.school_type.prefix(),
            self.grade,
            self.section
        )
    }
}

// Lower secondary sorts before upper, then grade, then section
impl Ord for ClassLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        let type_rank = |t: SchoolType| match t {
            SchoolType::Middle => 0,
            SchoolType::High => 1,
        };
        type_rank(self.school_type)
            .cmp(&type_rank(other.school_type))
            .then(self.grade.cmp(&other.grade))
            .then(self.section.cmp(&other.section))
    }
}

impl PartialOrd for ClassLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classroom as returned by the class listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRoomInfo {
    pub id: i64,
    pub school_type: SchoolType,
    pub grade: u8,
    pub class_number: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub teacher_name: Option<String>,
}

impl ClassRoomInfo {
    pub fn label(&self) -> ClassLabel {
        ClassLabel::new(self.school_type, self.grade, self.class_number)
    }
}

/// One student row inside a nested class→students roster response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStudentRow {
    /// Enrollment identity, the key attendance mutations are addressed to
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
}

/// Classroom with its enrolled students for one school year
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRoomRoster {
    pub id: i64,
    pub school_type: SchoolType,
    pub grade: u8,
    pub class_number: u8,
    #[serde(default)]
    pub teacher_name: Option<String>,
    pub students: Vec<ClassStudentRow>,
}

impl ClassRoomRoster {
    pub fn label(&self) -> ClassLabel {
        ClassLabel::new(self.school_type, self.grade, self.class_number)
    }
}
