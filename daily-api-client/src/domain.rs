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

//! Domain configuration endpoints: `GET /`, `POST /`.

use daily_api_types::{DomainConfig, DomainResponse};

use crate::error::ApiError;
use crate::{parse_api_response, DailyClient};

impl DailyClient {
    /// Get the top-level configuration of your domain.
    ///
    /// Calls `GET /`.
    pub async fn domain_config(&self) -> Result<DomainResponse, ApiError> {
        let response = self.get("/").send().await?;
        parse_api_response(response).await
    }

    /// Set the top-level configuration of your domain.
    ///
    /// Calls `POST /` with `config` as the body and returns the config the
    /// service stored.
    pub async fn update_domain_config(
        &self,
        config: &DomainConfig,
    ) -> Result<DomainConfig, ApiError> {
        let response = self.post("/").json(config).send().await?;
        parse_api_response(response).await
    }
}
