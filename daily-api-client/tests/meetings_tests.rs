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

//! Integration tests for meeting session listing.

mod test_helpers;

use daily_api_client::daily_api_types::MeetingsRequest;
use mockito::Matcher;
use serde_json::json;
use test_helpers::*;

#[tokio::test]
async fn test_list_meetings_sends_filters_as_query() {
    let mut server = mock_server().await;
    let mock = respond_json(
        authed_mock(&mut server, "GET", "/meetings").match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("room".into(), "standup".into()),
            Matcher::UrlEncoded("timeframe_start".into(), "1700000000".into()),
            Matcher::UrlEncoded("limit".into(), "5".into()),
        ])),
        json!({
            "total_count": 1,
            "data": [{
                "id": "c8f5b5a4-3d57-4a64-9e0b-7e1b1d6b7c11",
                "room": "standup",
                "start_time": 1700000100,
                "duration": 600,
                "ongoing": true,
                "max_participants": 3,
                "participants": [{
                    "user_id": "u-1",
                    "participant_id": "p-1",
                    "user_name": null,
                    "join_time": 1700000100,
                    "duration": 600
                }]
            }]
        }),
    )
    .await;

    let page = client_for(&server)
        .list_meetings(Some(&MeetingsRequest {
            room: Some("standup".to_string()),
            timeframe_start: Some(1700000000),
            limit: Some(5),
            ..Default::default()
        }))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.total_count, 1);
    let meeting = &page.data[0];
    assert!(meeting.ongoing);
    assert_eq!(meeting.max_participants, 3);
    assert_eq!(meeting.participants[0].user_id.as_deref(), Some("u-1"));
    assert_eq!(meeting.participants[0].user_name, None);
}

#[tokio::test]
async fn test_list_meetings_without_filter() {
    let mut server = mock_server().await;
    let mock = respond_json(
        authed_mock(&mut server, "GET", "/meetings"),
        json!({"total_count": 0, "data": []}),
    )
    .await;

    let page = client_for(&server).list_meetings(None).await.unwrap();

    mock.assert_async().await;
    assert!(page.data.is_empty());
}
