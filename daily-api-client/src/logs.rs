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

//! Call quality logs: `GET /logs`.

use daily_api_types::{LogsRequest, LogsResponse};

use crate::error::ApiError;
use crate::{parse_api_response, DailyClient};

impl DailyClient {
    /// List logs and metrics for a meeting session or a participant.
    ///
    /// Calls `GET /logs` with `request` as camelCase query parameters.
    /// `start_time`/`end_time` are epoch milliseconds.
    pub async fn logs(&self, request: &LogsRequest) -> Result<LogsResponse, ApiError> {
        let response = self.get("/logs").query(request).send().await?;
        parse_api_response(response).await
    }
}
