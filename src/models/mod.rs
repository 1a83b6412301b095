//! Data models module
//!
//! This module contains all data structures exchanged with the attendance API,
//! with explicit schemas for every response shape consumed.

pub mod attendance;
pub mod classroom;
pub mod friend;
pub mod prayer;
pub mod status;
pub mod student;
pub mod teacher;

pub use attendance::{
    attendance_rate, AttendanceHistoryEntry, AttendanceRow, ClassWeeklySummary,
    MarkAttendanceRequest, TeacherAttendanceRow, TotalWeeklySummary,
};
pub use classroom::{ClassLabel, ClassRoomInfo, ClassRoomRoster, ClassStudentRow, SchoolType};
pub use friend::{InvitedFriend, InvitedFriendRequest};
pub use prayer::DailyPrayer;
pub use status::{AttendanceStatus, UiStatus};
pub use student::{AssignClassRequest, CreateStudentRequest, MonthlyRegistrations, Student};
pub use teacher::{AssignTeacherRequest, CreateTeacherRequest, Teacher, TeacherStatus};
