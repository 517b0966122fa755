use garde::Validate;
use kernel::model::{
    auth::AccessToken,
    id::StudentId,
    participant::{event::CreateParticipant, Participant},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
pub struct CreateParticipantRequest {
    #[garde(required, length(min = 1))]
    student_id: Option<String>,
    #[garde(required, length(min = 1))]
    password: Option<String>,
    #[serde(rename = "firstName")]
    #[garde(required, length(min = 1))]
    first_name: Option<String>,
    #[serde(rename = "lastName")]
    #[garde(required, length(min = 1))]
    last_name: Option<String>,
    #[garde(required, email)]
    email: Option<String>,
    #[garde(required, length(min = 1))]
    department: Option<String>,
}

impl From<CreateParticipantRequest> for CreateParticipant {
    fn from(value: CreateParticipantRequest) -> Self {
        let CreateParticipantRequest {
            student_id,
            password,
            first_name,
            last_name,
            email,
            department,
        } = value;
        CreateParticipant::new(
            StudentId::new(student_id.unwrap_or_default()),
            password.unwrap_or_default(),
            first_name.unwrap_or_default(),
            last_name.unwrap_or_default(),
            email.unwrap_or_default(),
            department.unwrap_or_default(),
        )
    }
}

#[derive(Deserialize, Validate)]
pub struct LoginParticipantRequest {
    #[garde(required, length(min = 1))]
    pub student_id: Option<String>,
    #[garde(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantResponse {
    pub student_id: StudentId,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub department: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(value: Participant) -> Self {
        let Participant {
            student_id,
            first_name,
            last_name,
            email,
            department,
        } = value;
        Self {
            student_id,
            first_name,
            last_name,
            email,
            department,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantLoginResponse {
    pub message: String,
    pub access_token: String,
    pub user: ParticipantResponse,
}

impl ParticipantLoginResponse {
    pub fn new(access_token: AccessToken, participant: Participant) -> Self {
        Self {
            message: "Login successful".into(),
            access_token: access_token.0,
            user: participant.into(),
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct ParticipantDetailsRequest {
    #[garde(required, length(min = 1))]
    pub student_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParticipantDetailsResponse {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

impl From<Participant> for ParticipantDetailsResponse {
    fn from(value: Participant) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_uses_camel_case_names() {
        let req: CreateParticipantRequest = serde_json::from_value(serde_json::json!({
            "student_id": "2021-0001",
            "password": "secret",
            "firstName": "Juan",
            "lastName": "Dela Cruz",
            "email": "juan@example.edu",
            "department": "CCS",
        }))
        .unwrap();
        req.validate(&()).unwrap();
        let event = CreateParticipant::from(req);
        assert_eq!(event.student_id, StudentId::new("2021-0001"));
        assert_eq!(event.last_name, "Dela Cruz");
    }

    #[test]
    fn signup_reports_the_missing_field() {
        let req: CreateParticipantRequest = serde_json::from_value(serde_json::json!({
            "student_id": "2021-0001",
            "password": "secret",
            "firstName": "Juan",
            "email": "juan@example.edu",
            "department": "CCS",
        }))
        .unwrap();
        let report = req.validate(&()).unwrap_err();
        assert!(report.to_string().contains("last_name"));
    }
}
