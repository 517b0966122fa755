use std::sync::Arc;

use adapter::{
    database::ConnectionPool,
    qr::PngQrEncoder,
    redis::RedisClient,
    repository::{
        attendance::AttendanceRepositoryImpl, auth::AuthRepositoryImpl,
        event::EventRepositoryImpl, health::HealthCheckRepositoryImpl,
        participant::ParticipantRepositoryImpl, registration::RegistrationRepositoryImpl,
        user::UserRepositoryImpl,
    },
};
use kernel::encoder::QrEncoder;
use kernel::repository::{
    attendance::AttendanceRepository, auth::AuthRepository, event::EventRepository,
    health::HealthCheckRepository, participant::ParticipantRepository,
    registration::RegistrationRepository, user::UserRepository,
};
use shared::config::AppConfig;

/// Every collaborator a handler can reach. Built from the real adapters by
/// [`AppRegistry::new`], or from any other implementations via
/// [`AppRegistry::from_repositories`].
pub struct Repositories {
    pub health_check: Arc<dyn HealthCheckRepository>,
    pub event: Arc<dyn EventRepository>,
    pub participant: Arc<dyn ParticipantRepository>,
    pub user: Arc<dyn UserRepository>,
    pub auth: Arc<dyn AuthRepository>,
    pub registration: Arc<dyn RegistrationRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub qr_encoder: Arc<dyn QrEncoder>,
}

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    event_repository: Arc<dyn EventRepository>,
    participant_repository: Arc<dyn ParticipantRepository>,
    user_repository: Arc<dyn UserRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    registration_repository: Arc<dyn RegistrationRepository>,
    attendance_repository: Arc<dyn AttendanceRepository>,
    qr_encoder: Arc<dyn QrEncoder>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        Self::from_repositories(Repositories {
            health_check: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            event: Arc::new(EventRepositoryImpl::new(pool.clone())),
            participant: Arc::new(ParticipantRepositoryImpl::new(pool.clone())),
            user: Arc::new(UserRepositoryImpl::new(pool.clone())),
            auth: Arc::new(AuthRepositoryImpl::new(
                pool.clone(),
                redis_client.clone(),
                app_config.auth.ttl,
            )),
            registration: Arc::new(RegistrationRepositoryImpl::new(pool.clone())),
            attendance: Arc::new(AttendanceRepositoryImpl::new(pool.clone())),
            qr_encoder: Arc::new(PngQrEncoder),
        })
    }

    pub fn from_repositories(repositories: Repositories) -> Self {
        let Repositories {
            health_check,
            event,
            participant,
            user,
            auth,
            registration,
            attendance,
            qr_encoder,
        } = repositories;
        Self {
            health_check_repository: health_check,
            event_repository: event,
            participant_repository: participant,
            user_repository: user,
            auth_repository: auth,
            registration_repository: registration,
            attendance_repository: attendance,
            qr_encoder,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn event_repository(&self) -> Arc<dyn EventRepository> {
        self.event_repository.clone()
    }

    pub fn participant_repository(&self) -> Arc<dyn ParticipantRepository> {
        self.participant_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn registration_repository(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repository.clone()
    }

    pub fn attendance_repository(&self) -> Arc<dyn AttendanceRepository> {
        self.attendance_repository.clone()
    }

    pub fn qr_encoder(&self) -> Arc<dyn QrEncoder> {
        self.qr_encoder.clone()
    }
}
