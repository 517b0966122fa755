use kernel::model::{id::StudentId, participant::Participant};

#[derive(sqlx::FromRow)]
pub struct ParticipantRow {
    pub student_id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl From<ParticipantRow> for Participant {
    fn from(value: ParticipantRow) -> Self {
        let ParticipantRow {
            student_id,
            first_name,
            last_name,
            email,
            department,
        } = value;
        Participant {
            student_id,
            first_name,
            last_name,
            email,
            department,
        }
    }
}

// ログイン時の照合に使う型
#[derive(sqlx::FromRow)]
pub struct ParticipantCredentialRow {
    pub student_id: StudentId,
    pub password_hash: String,
}
