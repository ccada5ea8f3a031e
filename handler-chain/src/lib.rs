//! # Handler chain
//!
//! Runs a sequence of handlers for each message: the first handler that
//! returns Stop or Reply ends the chain; Continue falls through to the next
//! one. A message no handler claims falls off the end as Continue (no-op).

use smartbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of handlers. Registration order is dispatch order.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Appends a handler (first Stop/Reply wins).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Runs handlers in order. Returns the first Stop or Reply, or Continue
    /// when every handler passed.
    #[instrument(skip(self, message))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        "step: handler chain stopped by handler"
                    );
                    return Ok(response);
                }
                HandlerResponse::Continue => continue,
            }
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: handler_chain finished without a handler claiming the message"
        );
        Ok(HandlerResponse::Continue)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
