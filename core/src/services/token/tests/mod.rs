mod service_tests;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::services::clock::FixedClock;
use crate::services::token::{TokenCodec, TokenService, TokenServiceConfig};

/// Base64 of `test-access-secret`
pub(crate) const ACCESS_SECRET: &str = "dGVzdC1hY2Nlc3Mtc2VjcmV0";

/// Base64 of `test-refresh-secret`
pub(crate) const REFRESH_SECRET: &str = "dGVzdC1yZWZyZXNoLXNlY3JldA==";

pub(crate) fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub(crate) fn test_codec() -> TokenCodec {
    TokenCodec::from_base64_secrets(ACCESS_SECRET, REFRESH_SECRET).unwrap()
}

pub(crate) fn test_service(clock: Arc<FixedClock>) -> TokenService {
    TokenService::new(test_codec(), clock, TokenServiceConfig::default())
}
