mod service_tests;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::repositories::user::mock::MockUserRepository;
use crate::repositories::user::r#trait::UserRepository;
use crate::services::clock::FixedClock;
use crate::services::token::{TokenCodec, TokenService, TokenServiceConfig};

use super::AuthService;

pub(crate) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub(crate) fn token_service(clock: Arc<FixedClock>) -> Arc<TokenService> {
    let codec = TokenCodec::from_base64_secrets(
        "dGVzdC1hY2Nlc3Mtc2VjcmV0",
        "dGVzdC1yZWZyZXNoLXNlY3JldA==",
    )
    .unwrap();
    Arc::new(TokenService::new(codec, clock, TokenServiceConfig::default()))
}

pub(crate) fn auth_service() -> (AuthService, Arc<MockUserRepository>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(fixed_instant()));
    let users = Arc::new(MockUserRepository::new());
    let service = AuthService::new(
        Arc::clone(&users) as Arc<dyn UserRepository>,
        token_service(Arc::clone(&clock)),
    );
    (service, users, clock)
}
