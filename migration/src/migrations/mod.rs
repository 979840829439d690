pub mod m202608250001_create_teachers;
pub mod m202608250002_create_students;
