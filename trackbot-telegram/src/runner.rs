//! REPL runner: converts teloxide messages to core messages and dispatches them
//! through the HandlerChain. Each message is handled in a spawned task so the poll
//! loop returns immediately; handler failures are contained inside the chain, so the
//! transport never observes an error from a callback.

use anyhow::Result;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use trackbot_core::ToCoreMessage;
use tracing::{debug, info, instrument};

use crate::adapters::TelegramMessageWrapper;

/// Starts the long-poll REPL with the given teloxide Bot and HandlerChain. Each
/// inbound message is converted to a core message and dispatched in its own task;
/// tasks for different messages may interleave, so side-effect ordering across
/// messages is not guaranteed.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let wrapper = TelegramMessageWrapper(&msg);
                let core_msg = wrapper.to_core();

                match msg.text() {
                    Some(text) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_content = %text,
                            "Received message"
                        );
                    }
                    None => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            "Received non-text message"
                        );
                    }
                }

                // Dispatch in a spawned task so the REPL returns immediately.
                tokio::spawn(async move {
                    let report = chain.dispatch(&core_msg).await;
                    debug!(
                        message_id = core_msg.id,
                        completed = report.completed,
                        ignored = report.ignored,
                        failed = report.failed,
                        "Dispatch task finished"
                    );
                });

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
