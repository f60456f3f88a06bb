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

//! Meeting session analytics: `GET /meetings`.

use daily_api_types::{MeetingsRequest, MeetingsResponse, PaginatedResponse};

use crate::error::ApiError;
use crate::{parse_api_response, DailyClient};

impl DailyClient {
    /// List past and ongoing meeting sessions with their participants.
    ///
    /// Calls `GET /meetings`, with the filters and cursors of `filter` sent
    /// as query parameters.
    pub async fn list_meetings(
        &self,
        filter: Option<&MeetingsRequest>,
    ) -> Result<PaginatedResponse<MeetingsResponse>, ApiError> {
        let mut request = self.get("/meetings");
        if let Some(filter) = filter {
            request = request.query(filter);
        }
        let response = request.send().await?;
        parse_api_response(response).await
    }
}
