mod attendance_test;
mod health_test;
mod messages_test;
mod method_test;
mod students_test;
