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

//! Room endpoints: list, create, get, update, delete.

use daily_api_types::{
    CreateRoomRequest, CreateRoomResponse, DeleteResponse, PaginatedRequest, PaginatedResponse,
    RoomConfig, UpdateRoomRequest,
};

use crate::error::ApiError;
use crate::{parse_api_response, DailyClient};

impl DailyClient {
    /// List rooms in the domain.
    ///
    /// Calls `GET /rooms?limit=..&starting_after=..&ending_before=..`; unset
    /// pagination fields are left out of the query.
    pub async fn list_rooms(
        &self,
        page: Option<&PaginatedRequest>,
    ) -> Result<PaginatedResponse<RoomConfig>, ApiError> {
        let mut request = self.get("/rooms");
        if let Some(page) = page {
            request = request.query(page);
        }
        let response = request.send().await?;
        parse_api_response(response).await
    }

    /// Create a room. The service generates a name if none is given.
    ///
    /// Calls `POST /rooms`.
    pub async fn create_room(
        &self,
        request: &CreateRoomRequest,
    ) -> Result<CreateRoomResponse, ApiError> {
        let response = self.post("/rooms").json(request).send().await?;
        parse_api_response(response).await
    }

    /// Get a room's privacy and configuration.
    ///
    /// Calls `GET /rooms/{name}`.
    pub async fn get_room(&self, name: &str) -> Result<CreateRoomResponse, ApiError> {
        let path = format!("/rooms/{name}");
        let response = self.get(&path).send().await?;
        parse_api_response(response).await
    }

    /// Set a room's privacy and configuration properties.
    ///
    /// Calls `POST /rooms/{name}`.
    pub async fn update_room(
        &self,
        name: &str,
        request: &UpdateRoomRequest,
    ) -> Result<CreateRoomResponse, ApiError> {
        let path = format!("/rooms/{name}");
        let response = self.post(&path).json(request).send().await?;
        parse_api_response(response).await
    }

    /// Delete a room.
    ///
    /// Calls `DELETE /rooms/{name}`.
    pub async fn delete_room(&self, name: &str) -> Result<DeleteResponse, ApiError> {
        let path = format!("/rooms/{name}");
        let response = self.delete(&path).send().await?;
        parse_api_response(response).await
    }
}
