#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use api::route::routes;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use kernel::{
    encoder::QrEncoder,
    model::{
        attendance::{
            attendance_completed, event::RecordAttendance, Attendance, AttendanceOutcome,
            AttendanceState, AttendanceStep,
        },
        auth::{event::CreateToken, AccessToken, Principal},
        event::{
            event::{CreateEvent, DeleteEvent, UpdateEvent},
            Event, EventReport,
        },
        id::{AttendanceId, EventId, RegistrationId, StudentId, UserId},
        participant::{event::CreateParticipant, Participant},
        registration::{event::CreateRegistration, Registration, REGISTERED_STATUS},
        user::{event::CreateUser, User},
    },
    repository::{
        attendance::AttendanceRepository, auth::AuthRepository, event::EventRepository,
        health::HealthCheckRepository, participant::ParticipantRepository,
        registration::RegistrationRepository, user::UserRepository,
    },
};
use registry::{AppRegistry, Repositories};
use serde_json::Value;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub const QR_PREFIX: &[u8] = b"QR:";

/// PostgreSQL と Redis の代わりにメモリ上で状態を持つ
#[derive(Default)]
pub struct InMemoryStore {
    events: Mutex<Vec<Event>>,
    participants: Mutex<HashMap<StudentId, (Participant, String)>>,
    users: Mutex<HashMap<UserId, (User, String)>>,
    tokens: Mutex<HashMap<String, Principal>>,
    registrations: Mutex<Vec<Registration>>,
    attendance: Mutex<Vec<Attendance>>,
}

impl InMemoryStore {
    pub fn attendance_rows(&self) -> Vec<Attendance> {
        self.attendance.lock().unwrap().clone()
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    fn event_exists(&self, event_id: EventId) -> bool {
        self.events
            .lock()
            .unwrap()
            .iter()
            .any(|e| e.event_id == event_id)
    }
}

fn event_not_found() -> AppError {
    AppError::EntityNotFound("Event not found".into())
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, event: CreateEvent) -> AppResult<EventId> {
        let mut events = self.events.lock().unwrap();
        let event_id = EventId::new(events.iter().map(|e| e.event_id.raw()).max().unwrap_or(0) + 1);
        let now = Utc::now();
        events.push(Event {
            event_id,
            event_name: event.event_name,
            event_description: event.event_description,
            speaker: event.speaker,
            location: event.location,
            event_date: event.event_date,
            start_time: event.start_time,
            end_time: event.end_time,
            qr_code: None,
            created_at: now,
            updated_at: now,
        });
        Ok(event_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Event>> {
        Ok(self.events.lock().unwrap().clone())
    }

    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.event_id == event_id)
            .cloned())
    }

    async fn update(&self, event: UpdateEvent) -> AppResult<()> {
        let mut events = self.events.lock().unwrap();
        let stored = events
            .iter_mut()
            .find(|e| e.event_id == event.event_id)
            .ok_or_else(event_not_found)?;
        if let Some(Some(v)) = event.event_name.into_nullable() {
            stored.event_name = v;
        }
        if let Some(Some(v)) = event.event_description.into_nullable() {
            stored.event_description = v;
        }
        if let Some(v) = event.speaker.into_nullable() {
            stored.speaker = v.unwrap_or_default();
        }
        if let Some(Some(v)) = event.location.into_nullable() {
            stored.location = v;
        }
        if let Some(Some(v)) = event.event_date.into_nullable() {
            stored.event_date = v;
        }
        if let Some(Some(v)) = event.start_time.into_nullable() {
            stored.start_time = v;
        }
        if let Some(Some(v)) = event.end_time.into_nullable() {
            stored.end_time = v;
        }
        if let Some(v) = event.qr_code.into_nullable() {
            stored.qr_code = v;
        }
        stored.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, event: DeleteEvent) -> AppResult<()> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.event_id != event.event_id);
        if events.len() == before {
            return Err(event_not_found());
        }
        self.registrations
            .lock()
            .unwrap()
            .retain(|r| r.event_id != event.event_id);
        self.attendance
            .lock()
            .unwrap()
            .retain(|a| a.event_id != event.event_id);
        Ok(())
    }

    async fn report(&self, today: NaiveDate) -> AppResult<EventReport> {
        let events = self.events.lock().unwrap();
        Ok(EventReport::tally(events.iter().map(|e| e.event_date), today))
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn create(&self, event: CreateParticipant) -> AppResult<()> {
        let mut participants = self.participants.lock().unwrap();
        let duplicate = participants.contains_key(&event.student_id)
            || participants.values().any(|(p, _)| p.email == event.email);
        if duplicate {
            return Err(AppError::DuplicateEntry(
                "Student ID or Email is already registered".into(),
            ));
        }
        let participant = Participant {
            student_id: event.student_id.clone(),
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            department: event.department,
        };
        participants.insert(event.student_id, (participant, event.password));
        Ok(())
    }

    async fn find_by_id(&self, student_id: &StudentId) -> AppResult<Option<Participant>> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .get(student_id)
            .map(|(p, _)| p.clone()))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        let duplicate = users
            .values()
            .any(|(u, _)| u.username == event.username || u.email == event.email);
        if duplicate {
            return Err(AppError::DuplicateEntry(
                "Username or Email is already registered".into(),
            ));
        }
        let now = Utc::now();
        let user = User {
            user_id: UserId::new(),
            username: event.username,
            email: event.email,
            role: event.role,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.user_id, (user.clone(), event.password));
        Ok(user)
    }

    async fn find_current_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|(u, _)| u.clone()))
    }
}

#[async_trait]
impl AuthRepository for InMemoryStore {
    async fn fetch_principal_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<Principal>> {
        Ok(self.tokens.lock().unwrap().get(&access_token.0).cloned())
    }

    async fn verify_participant(
        &self,
        student_id: &StudentId,
        password: &str,
    ) -> AppResult<StudentId> {
        match self.participants.lock().unwrap().get(student_id) {
            Some((p, stored)) if stored == password => Ok(p.student_id.clone()),
            _ => Err(AppError::UnauthenticatedError),
        }
    }

    async fn verify_user(&self, username: &str, password: &str) -> AppResult<UserId> {
        self.users
            .lock()
            .unwrap()
            .values()
            .find(|(u, stored)| u.username == username && stored == password)
            .map(|(u, _)| u.user_id)
            .ok_or(AppError::UnauthenticatedError)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        self.tokens
            .lock()
            .unwrap()
            .insert(event.access_token.0.clone(), event.principal);
        Ok(event.access_token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        self.tokens.lock().unwrap().remove(&access_token.0);
        Ok(())
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryStore {
    async fn create(&self, event: CreateRegistration) -> AppResult<RegistrationId> {
        if !self.event_exists(event.event_id) {
            return Err(event_not_found());
        }
        let mut registrations = self.registrations.lock().unwrap();
        let duplicate = registrations
            .iter()
            .any(|r| r.event_id == event.event_id && r.student_id == event.student_id);
        if duplicate {
            return Err(AppError::DuplicateEntry(
                "You are already registered for this event".into(),
            ));
        }
        let registration_id = RegistrationId::new();
        registrations.push(Registration {
            registration_id,
            event_id: event.event_id,
            student_id: event.student_id,
            fullname: event.fullname,
            year_and_block: event.year_and_block,
            department: event.department,
            registration_date: event.registered_at,
            registration_status: REGISTERED_STATUS.into(),
        });
        Ok(registration_id)
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Registration>> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn count_by_event_id(&self, event_id: EventId) -> AppResult<i64> {
        Ok(self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.event_id == event_id)
            .count() as i64)
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryStore {
    async fn record(&self, event: RecordAttendance) -> AppResult<AttendanceOutcome> {
        if !self.event_exists(event.event_id) {
            return Err(event_not_found());
        }
        let mut rows = self.attendance.lock().unwrap();
        let existing = rows
            .iter()
            .position(|a| a.event_id == event.event_id && a.student_id == event.student_id);

        match AttendanceState::of(existing.map(|i| &rows[i])).next_step()? {
            AttendanceStep::CheckIn => {
                let row = event.check_in_row(AttendanceId::new());
                rows.push(row.clone());
                Ok(AttendanceOutcome::CheckedIn(row))
            }
            AttendanceStep::CheckOut(attendance_id) => {
                let row = rows
                    .iter_mut()
                    .find(|a| a.attendance_id == attendance_id)
                    .ok_or_else(attendance_completed)?;
                row.check_out = Some(event.recorded_at);
                Ok(AttendanceOutcome::CheckedOut(row.clone()))
            }
        }
    }

    async fn find_by_event_id(&self, event_id: EventId) -> AppResult<Vec<Attendance>> {
        Ok(self
            .attendance
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.event_id == event_id)
            .cloned()
            .collect())
    }
}

/// 画像の代わりに、QR_PREFIX に続けてペイロードをそのまま返す
pub struct EchoQrEncoder;

impl QrEncoder for EchoQrEncoder {
    fn encode(&self, payload: &str) -> AppResult<Vec<u8>> {
        Ok([QR_PREFIX, payload.as_bytes()].concat())
    }
}

pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::default());
        let registry = AppRegistry::from_repositories(Repositories {
            health_check: store.clone(),
            event: store.clone(),
            participant: store.clone(),
            user: store.clone(),
            auth: store.clone(),
            registration: store.clone(),
            attendance: store.clone(),
            qr_encoder: Arc::new(EchoQrEncoder),
        });
        let router = routes().with_state(registry);
        Self { store, router }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, None, Some(body)).await
    }

    /// スタッフアカウントを作成してログインし、アクセストークンを返す
    pub async fn staff_token(&self) -> String {
        let (status, _) = self
            .post(
                "/api/user/signup",
                serde_json::json!({
                    "username": "registrar",
                    "password": "secret",
                    "email": "registrar@example.edu",
                    "role": "staff",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .post(
                "/api/user/login",
                serde_json::json!({ "username": "registrar", "password": "secret" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn signup_participant(&self, student_id: &str) {
        let (status, _) = self
            .post(
                "/api/participant/signup",
                serde_json::json!({
                    "student_id": student_id,
                    "password": "secret",
                    "firstName": "Juan",
                    "lastName": "Dela Cruz",
                    "email": format!("{student_id}@example.edu"),
                    "department": "CCS",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    pub async fn create_event(&self, token: &str, name: &str, date: &str) -> i64 {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/events",
                Some(token),
                Some(serde_json::json!({
                    "event_name": name,
                    "event_description": "About Rust",
                    "speaker": "Ferris",
                    "location": "Room 101",
                    "event_date": date,
                    "start_time": "13:00",
                    "end_time": "15:00:00",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["event_id"].as_i64().unwrap()
    }
}

pub fn scan(event_id: i64, student_id: &str) -> Value {
    serde_json::json!({
        "event_id": event_id,
        "student_id": student_id,
        "fullname": "Juan Dela Cruz",
        "year_and_block": "3-A",
        "department": "CCS",
    })
}
