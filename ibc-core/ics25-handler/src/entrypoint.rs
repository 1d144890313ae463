use ibc_lc_client::handler::{create_client, misbehaviour, update_client};
use ibc_lc_client::types::msgs::{ClientMsg, ClientMsgOutcome};
use ibc_lc_handler_types::error::ContextError;
use ibc_lc_host::{ClientMsgRef, ExecutionContext, ValidationContext};

/// Entrypoint which performs both validation and message execution
///
/// [`execute`] already runs every check of [`validate`] ahead of its writes,
/// so each header or piece of evidence is verified exactly once.
pub fn dispatch<Ctx>(ctx: &mut Ctx, msg: ClientMsgRef<Ctx>) -> Result<ClientMsgOutcome, ContextError>
where
    Ctx: ExecutionContext,
{
    execute(ctx, msg)
}

/// Entrypoint which only performs message validation
///
/// If a transaction contains `n` messages `m_1` ... `m_n`, then
/// they MUST be processed as follows:
///     validate(m_1), execute(m_1), ..., validate(m_n), execute(m_n)
/// That is, the state transition of message `i` must be applied before
/// message `i+1` is validated. This is equivalent to calling
/// `dispatch()` on each successively.
pub fn validate<Ctx>(ctx: &Ctx, msg: &ClientMsgRef<Ctx>) -> Result<(), ContextError>
where
    Ctx: ValidationContext,
{
    match msg {
        ClientMsg::CreateClient(msg) => create_client::validate(ctx, msg),
        ClientMsg::UpdateClient(msg) => update_client::validate(ctx, msg),
        ClientMsg::Misbehaviour(msg) => misbehaviour::validate(ctx, msg).map(|_| ()),
    }
}

/// Entrypoint which only performs message execution
///
/// Execution repeats every check of [`validate`] before it writes, so it is
/// safe to call on a message that was not validated first.
pub fn execute<Ctx>(ctx: &mut Ctx, msg: ClientMsgRef<Ctx>) -> Result<ClientMsgOutcome, ContextError>
where
    Ctx: ExecutionContext,
{
    match msg {
        ClientMsg::CreateClient(msg) => {
            let client_id = msg.client_id.clone();
            let height = create_client::execute(ctx, msg)?;
            Ok(ClientMsgOutcome::Created { client_id, height })
        }
        ClientMsg::UpdateClient(msg) => {
            let client_id = msg.client_id.clone();
            let height = update_client::execute(ctx, msg)?;
            Ok(ClientMsgOutcome::Updated { client_id, height })
        }
        ClientMsg::Misbehaviour(msg) => {
            misbehaviour::execute(ctx, msg).map(ClientMsgOutcome::Misbehaviour)
        }
    }
}
