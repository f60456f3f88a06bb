/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Meeting token endpoints: create and validate.

use daily_api_types::{MeetingTokenRequest, MeetingTokenResponse};
use serde_json::Value;

use crate::error::ApiError;
use crate::{parse_api_response, DailyClient};

impl DailyClient {
    /// Create a meeting token.
    ///
    /// Calls `POST /meeting-tokens` with `request` as the body, i.e.
    /// `{"properties": {...}}`.
    pub async fn create_meeting_token(
        &self,
        request: &MeetingTokenRequest,
    ) -> Result<MeetingTokenResponse, ApiError> {
        let response = self.post("/meeting-tokens").json(request).send().await?;
        parse_api_response(response).await
    }

    /// Validate a meeting token and return its decoded properties.
    ///
    /// Calls `GET /meeting-tokens/{token}`. The shape of the answer is not
    /// documented, so it is returned as raw JSON.
    pub async fn validate_meeting_token(&self, token: &str) -> Result<Value, ApiError> {
        let path = format!("/meeting-tokens/{token}");
        let response = self.get(&path).send().await?;
        parse_api_response(response).await
    }
}
