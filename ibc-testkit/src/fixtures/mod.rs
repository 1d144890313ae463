pub mod clients;
pub mod core;

use alloc::fmt::Debug;

use ibc_lc_core::client::types::msgs::ClientMsgOutcome;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::primitives::prelude::*;

use crate::context::MockContext;

pub enum Expect {
    Success,
    Failure,
}

#[derive(Debug)]
pub struct Fixture<M: Debug> {
    pub ctx: MockContext,
    pub msg: M,
}

impl<M: Debug> Fixture<M> {
    pub fn generate_error_msg(
        &self,
        expect: &Expect,
        process: &str,
        res: &Result<ClientMsgOutcome, ContextError>,
    ) -> String {
        let base_error = match expect {
            Expect::Success => "step failed!",
            Expect::Failure => "step passed but was supposed to fail!",
        };
        format!(
            "{process} {base_error} /n {res:?} /n {:?} /n {:?}",
            &self.msg, &self.ctx
        )
    }
}
