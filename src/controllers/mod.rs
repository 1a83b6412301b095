//! Per-screen view-state controllers
//!
//! One controller per screen. Each owns its private view state, exposes
//! intent methods for user actions, and follows the same contract: fetch on
//! load, and after any mutation re-fetch the affected read model instead of
//! trusting the local update.

pub mod class_attendance;
pub mod friend_list;
pub mod monthly;
pub mod prayer;
pub mod registration;
pub mod roster;
pub mod self_check;
pub mod stats;
pub mod student_admin;
pub mod teacher_admin;
pub mod teacher_attendance;

pub use class_attendance::{ClassAttendanceController, ClassEntry, StatusTally};
pub use friend_list::FriendListController;
pub use monthly::MonthlyController;
pub use prayer::{retreat_countdown, Countdown, PrayerController};
pub use registration::{ReferrerCandidate, RegistrationController, RegistrationForm};
pub use roster::{RosterController, RosterEntry};
pub use self_check::{CheckMember, SearchOutcome, SelfCheckController};
pub use stats::{GradeSummary, MonthPoint, StatsController, WeeklyPoint};
pub use student_admin::StudentAdminController;
pub use teacher_admin::TeacherAdminController;
pub use teacher_attendance::{TeacherAttendanceController, TeacherEntry};
