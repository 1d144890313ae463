//! Implementation of a global context mock. Used in testing handlers of all IBC modules.

use core::sync::atomic::Ordering;

use ibc_lc_core::client::types::Height;
use ibc_lc_core::handler::types::error::ContextError;
use ibc_lc_core::handler::types::events::IbcEvent;
use ibc_lc_core::host::types::error::HostError;
use ibc_lc_core::host::types::identifiers::ClientType;
use ibc_lc_core::host::{ExecutionContext, ValidationContext};
use ibc_lc_core::primitives::prelude::*;
use ibc_lc_core::primitives::Timestamp;
use ibc_lc_tendermint::types::TENDERMINT_CLIENT_TYPE;

use crate::context::MockContext;
use crate::testapp::ibc::clients::mock::client_state::MOCK_CLIENT_TYPE;
use crate::testapp::ibc::clients::AnyClient;

impl ValidationContext for MockContext {
    type V = Self;
    type LightClientRef = AnyClient;

    fn get_client_validation_context(&self) -> &Self::V {
        self
    }

    fn light_client(&self, client_type: &ClientType) -> Option<AnyClient> {
        self.strategy_lookups.fetch_add(1, Ordering::Relaxed);

        if self.disabled_light_clients.contains(client_type) {
            return None;
        }

        match client_type.as_str() {
            TENDERMINT_CLIENT_TYPE => Some(self.tendermint_client.clone().into()),
            MOCK_CLIENT_TYPE => Some(self.mock_client.into()),
            _ => None,
        }
    }

    fn host_height(&self) -> Result<Height, ContextError> {
        self.history
            .last()
            .map(|block| block.height())
            .ok_or_else(|| HostError::missing_data("host block history is empty").into())
    }

    fn host_timestamp(&self) -> Result<Timestamp, ContextError> {
        self.history
            .last()
            .map(|block| block.timestamp())
            .ok_or_else(|| HostError::missing_data("host block history is empty").into())
    }
}

impl ExecutionContext for MockContext {
    type E = Self;

    fn get_client_execution_context(&mut self) -> &mut Self::E {
        self
    }

    fn emit_ibc_event(&mut self, event: IbcEvent) -> Result<(), ContextError> {
        if self.failing_sink {
            return Err(HostError::Other {
                description: format!("event sink rejected `{}`", event.event_type()),
            }
            .into());
        }

        self.ibc_store.lock().events.push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), ContextError> {
        if self.failing_sink {
            return Err(HostError::Other {
                description: "logger is unavailable".to_string(),
            }
            .into());
        }

        self.ibc_store.lock().logs.push(message);
        Ok(())
    }
}
