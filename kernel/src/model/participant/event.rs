use crate::model::id::StudentId;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateParticipant {
    pub student_id: StudentId,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}
