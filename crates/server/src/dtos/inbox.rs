use chrono::{DateTime, FixedOffset};
use database::entities::{inbox_messages, replies};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct InboxMessageResponse {
    pub message_id: i32,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub is_read: Option<bool>,
    pub is_deleted: Option<bool>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: Option<DateTime<FixedOffset>>,
    pub sender_id: Option<i32>,
    pub receiver_id: Option<i32>,
    pub sender_role_id: Option<i32>,
    pub receiver_role_id: Option<i32>,
    pub attachments: Option<Value>,
}

impl From<inbox_messages::Model> for InboxMessageResponse {
    fn from(message: inbox_messages::Model) -> Self {
        Self {
            message_id: message.message_id,
            subject: message.subject,
            body: message.body,
            is_read: message.is_read,
            is_deleted: message.is_deleted,
            created_at: message.created_at,
            updated_at: message.updated_at,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            sender_role_id: message.sender_role_id,
            receiver_role_id: message.receiver_role_id,
            attachments: message.attachments,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct InboxQuery {
    pub receiver_id: Option<i32>,
    /// "true"/"false"; anything else is ignored as unset.
    pub is_read: Option<String>,
    pub is_deleted: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReplyResponse {
    pub reply_id: i64,
    pub message_id: Option<i32>,
    pub sender_id: Option<i32>,
    pub body: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub attachments: Option<Value>,
}

impl From<replies::Model> for ReplyResponse {
    fn from(reply: replies::Model) -> Self {
        Self {
            reply_id: reply.reply_id,
            message_id: reply.message_id,
            sender_id: reply.sender_id,
            body: reply.body,
            created_at: reply.created_at,
            attachments: reply.attachments,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplyCreate {
    #[serde(default)]
    pub sender_id: Option<i32>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub attachments: Option<Value>,
}
