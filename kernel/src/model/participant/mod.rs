use crate::model::id::StudentId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl Participant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
