//! Id and clock providers injected into the services.

use chrono::Utc;
use uuid::Uuid;

use crate::models::UtcDateTime;

/// Source of fresh entity ids
pub trait UuidProvider: Send + Sync {
	fn get_uuid(&self) -> Uuid;
}

/// Source of the current time
pub trait UtcDateTimeProvider: Send + Sync {
	fn get_utc_date_time(&self) -> UtcDateTime;
}

/// Generates random (v4) UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidProvider;

impl UuidProvider for RandomUuidProvider {
	fn get_uuid(&self) -> Uuid {
		Uuid::new_v4()
	}
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentUtcDateTimeProvider;

impl UtcDateTimeProvider for CurrentUtcDateTimeProvider {
	fn get_utc_date_time(&self) -> UtcDateTime {
		Utc::now()
	}
}
