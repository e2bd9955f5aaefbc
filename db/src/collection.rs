use std::fmt;

/// Logical collections inside the single application database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Students,
    Courses,
    Attendance,
    Messages,
    IndividualSchedules,
    Logs,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Students => "students",
            Collection::Courses => "courses",
            Collection::Attendance => "attendance",
            Collection::Messages => "messages",
            Collection::IndividualSchedules => "individual_schedules",
            Collection::Logs => "logs",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
