//! Shell navigation state
//!
//! The current screen and sidebar visibility are an explicit, serializable
//! value owned here and passed down, never ambient globals. Navigating away
//! from a screen discards that screen's controller; whatever it had fetched
//! is gone with it.

use serde::{Deserialize, Serialize};

/// The closed set of screens reachable from the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Roster,
    ClassAttendance,
    StudentAdmin,
    TeacherAttendance,
    TeacherAdmin,
    Stats,
    Registration,
    FriendList,
    SelfCheck,
    Monthly,
    Prayer,
}

impl Screen {
    /// Route path of the screen
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Roster => "/",
            Screen::ClassAttendance => "/attendance",
            Screen::StudentAdmin => "/student-management",
            Screen::TeacherAttendance => "/teacher-attendance",
            Screen::TeacherAdmin => "/teacher-management",
            Screen::Stats => "/attendance-stats",
            Screen::Registration => "/invited-friend-registration",
            Screen::FriendList => "/invited-friend-list",
            Screen::SelfCheck => "/self-check",
            Screen::Monthly => "/monthly-students",
            Screen::Prayer => "/campaign-prayer",
        }
    }

    /// Resolve a route path back to its screen
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.path() == path)
    }

    /// Menu title of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Roster => "학생 출석",
            Screen::ClassAttendance => "반별 출석",
            Screen::StudentAdmin => "학생 관리",
            Screen::TeacherAttendance => "선생님 출석",
            Screen::TeacherAdmin => "선생님 관리",
            Screen::Stats => "출석 통계",
            Screen::Registration => "초청 친구 등록",
            Screen::FriendList => "초청 친구 목록",
            Screen::SelfCheck => "셀프 출석",
            Screen::Monthly => "월별 등록 학생",
            Screen::Prayer => "금식 기도",
        }
    }

    pub const ALL: [Screen; 11] = [
        Screen::Roster,
        Screen::ClassAttendance,
        Screen::StudentAdmin,
        Screen::TeacherAttendance,
        Screen::TeacherAdmin,
        Screen::Stats,
        Screen::Registration,
        Screen::FriendList,
        Screen::SelfCheck,
        Screen::Monthly,
        Screen::Prayer,
    ];
}

/// Serializable navigation state owned by the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub screen: Screen,
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Roster,
            sidebar_open: false,
        }
    }
}

impl UiState {
    /// Select a screen from the side menu; the menu collapses on selection
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Whether a menu entry should render highlighted
    pub fn is_active(&self, screen: Screen) -> bool {
        self.screen == screen
    }
}
