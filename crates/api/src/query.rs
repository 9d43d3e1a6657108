//! Query parameter types for API handlers.

use gymplan_core::error::CoreError;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

/// Page-based pagination parameters (`?page=&limit=`).
#[derive(Debug, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: u32,
}

impl PageParams {
    /// Validate the parameters, mapping failures to a 400 response.
    pub fn checked(self) -> Result<Self, AppError> {
        self.validate()
            .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
        Ok(self)
    }
}

/// `?weekday=` for the workout endpoint; defaults to the current UTC weekday.
#[derive(Debug, Deserialize)]
pub struct WeekdayParams {
    pub weekday: Option<i16>,
}
