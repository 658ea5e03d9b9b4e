use crate::dtos::inbox::{InboxMessageResponse, InboxQuery, ReplyCreate, ReplyResponse};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use database::entities::{inbox_messages, replies};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

fn parse_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

/// List inbox messages for a receiver
#[utoipa::path(
    get,
    path = "/api/inbox",
    params(InboxQuery),
    responses(
        (status = 200, description = "Inbox messages", body = [InboxMessageResponse])
    ),
    tag = "Inbox"
)]
pub async fn list_inbox(
    State(state): State<SharedState>,
    Query(query): Query<InboxQuery>,
) -> Result<Json<Vec<InboxMessageResponse>>, ApiError> {
    let mut select = inbox_messages::Entity::find();
    if let Some(receiver_id) = query.receiver_id {
        select = select.filter(inbox_messages::Column::ReceiverId.eq(receiver_id));
    }
    if let Some(is_read) = query.is_read.as_deref() {
        select = select.filter(inbox_messages::Column::IsRead.eq(parse_flag(is_read)));
    }
    if let Some(is_deleted) = query.is_deleted.as_deref() {
        select = select.filter(inbox_messages::Column::IsDeleted.eq(parse_flag(is_deleted)));
    }
    let rows = select.all(&state.db).await?;
    Ok(Json(
        rows.into_iter().map(InboxMessageResponse::from).collect(),
    ))
}

/// List replies to a message, oldest first
#[utoipa::path(
    get,
    path = "/api/inbox/{message_id}/replies",
    responses(
        (status = 200, description = "Replies", body = [ReplyResponse]),
        (status = 404, description = "Message not found")
    ),
    tag = "Inbox"
)]
pub async fn list_replies(
    State(state): State<SharedState>,
    Path(message_id): Path<i32>,
) -> Result<Json<Vec<ReplyResponse>>, ApiError> {
    inbox_messages::Entity::find_by_id(message_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Message not found"))?;

    let rows = replies::Entity::find()
        .filter(replies::Column::MessageId.eq(message_id))
        .order_by_asc(replies::Column::ReplyId)
        .all(&state.db)
        .await?;
    Ok(Json(rows.into_iter().map(ReplyResponse::from).collect()))
}

/// Reply to a message
#[utoipa::path(
    post,
    path = "/api/inbox/{message_id}/replies",
    request_body = ReplyCreate,
    responses(
        (status = 201, description = "Reply created", body = ReplyResponse),
        (status = 404, description = "Message not found")
    ),
    tag = "Inbox"
)]
pub async fn create_reply(
    State(state): State<SharedState>,
    Path(message_id): Path<i32>,
    Json(payload): Json<ReplyCreate>,
) -> Result<(StatusCode, Json<ReplyResponse>), ApiError> {
    inbox_messages::Entity::find_by_id(message_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Message not found"))?;

    let row = replies::ActiveModel {
        reply_id: sea_orm::ActiveValue::NotSet,
        message_id: Set(Some(message_id)),
        sender_id: Set(payload.sender_id),
        body: Set(payload.body),
        created_at: Set(Some(Utc::now().fixed_offset())),
        attachments: Set(payload.attachments),
    };
    let created = replies::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((StatusCode::CREATED, Json(ReplyResponse::from(created))))
}
