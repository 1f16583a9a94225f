//! Adapters from Telegram (teloxide) types to trackbot_core types.
//! Depends only on teloxide and trackbot_core type definitions.

use trackbot_core::{Chat, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            is_bot: self.0.is_bot,
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            username: self.0.username.clone(),
            language_code: self.0.language_code.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: i64::from(self.0.id.0),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    is_bot: false,
                    first_name: None,
                    last_name: None,
                    username: None,
                    language_code: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type_name(&self.0.chat).to_string(),
                title: self.0.chat.title().map(str::to_string),
                username: self.0.chat.username().map(str::to_string),
            },
            date: self.0.date.timestamp(),
            // Absence preserved: non-text messages stay None, never "".
            text: self.0.text().map(str::to_string),
        }
    }
}

/// Maps a teloxide chat to the Telegram API `type` string.
fn chat_type_name(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    }
}
