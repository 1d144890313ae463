//! This module implements the processing logic for ICS2 (client abstractions and functions) msgs.
//!
//! Every handler comes as a `validate` and an `execute` function. Both run
//! the same read-only checks; `execute` only starts writing once all of them
//! have passed.

use ibc_lc_handler_types::events::{IbcEvent, MessageEvent};
use ibc_lc_host::ExecutionContext;
use ibc_lc_primitives::prelude::*;
use tracing::warn;

pub mod create_client;
pub mod misbehaviour;
pub mod update_client;

/// Hands the `message` event, the given client event and the log line to the
/// host. The state transition is already committed at this point, so sink
/// failures are only reported.
pub(crate) fn notify<Ctx>(ctx: &mut Ctx, event: IbcEvent, log: String)
where
    Ctx: ExecutionContext,
{
    for event in [IbcEvent::Message(MessageEvent::Client), event] {
        let event_type = event.event_type().to_string();
        if let Err(e) = ctx.emit_ibc_event(event) {
            warn!("failed to emit `{event_type}` event: {e}");
        }
    }

    if let Err(e) = ctx.log_message(log) {
        warn!("failed to log message: {e}");
    }
}
