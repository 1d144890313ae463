//! Builders of the client messages handed to a [`MockContext`].

use ibc_lc_core::client::types::msgs::{MsgCreateClient, MsgSubmitMisbehaviour, MsgUpdateClient};
use ibc_lc_core::client::types::Height;
use ibc_lc_core::host::types::identifiers::{ClientId, ClientType};
use ibc_lc_core::host::ClientMsgRef;
use ibc_lc_tendermint::types::{
    client_type as tm_client_type, ConsensusState as TmConsensusState, Header as TmHeader,
    Misbehaviour as TmMisbehaviour,
};

use crate::context::MockContext;
use crate::testapp::ibc::clients::mock::client_state::client_type as mock_client_type;
use crate::testapp::ibc::clients::mock::consensus_state::MockConsensusState;
use crate::testapp::ibc::clients::mock::header::MockHeader;
use crate::testapp::ibc::clients::mock::misbehaviour::MockMisbehaviour;
use crate::testapp::ibc::clients::AnyConsensusState;

pub fn mock_client_id(counter: u64) -> ClientId {
    mock_client_type()
        .build_client_id(counter)
        .expect("Never fails")
}

pub fn tm_client_id(counter: u64) -> ClientId {
    tm_client_type()
        .build_client_id(counter)
        .expect("Never fails")
}

/// A `CreateClient` message carrying an arbitrary consensus type and state.
pub fn msg_create_client(
    client_id: &ClientId,
    client_type: ClientType,
    consensus_state: impl Into<AnyConsensusState>,
) -> ClientMsgRef<MockContext> {
    MsgCreateClient::new(client_id.clone(), client_type, consensus_state.into()).into()
}

/// Creates a mock client trusting the counterparty at `height`.
pub fn msg_create_mock_client(client_id: &ClientId, height: Height) -> ClientMsgRef<MockContext> {
    msg_create_client(
        client_id,
        mock_client_type(),
        MockConsensusState::new(MockHeader::new(height)),
    )
}

pub fn msg_update_mock_client(
    client_id: &ClientId,
    header: MockHeader,
) -> ClientMsgRef<MockContext> {
    MsgUpdateClient::new(client_id.clone(), header.into()).into()
}

pub fn msg_mock_misbehaviour(
    client_id: &ClientId,
    header1: MockHeader,
    header2: MockHeader,
) -> ClientMsgRef<MockContext> {
    MsgSubmitMisbehaviour::new(MockMisbehaviour::new(client_id.clone(), header1, header2).into())
        .into()
}

pub fn msg_create_tm_client(
    client_id: &ClientId,
    consensus_state: TmConsensusState,
) -> ClientMsgRef<MockContext> {
    msg_create_client(client_id, tm_client_type(), consensus_state)
}

pub fn msg_update_tm_client(client_id: &ClientId, header: TmHeader) -> ClientMsgRef<MockContext> {
    MsgUpdateClient::new(client_id.clone(), header.into()).into()
}

pub fn msg_tm_misbehaviour(misbehaviour: TmMisbehaviour) -> ClientMsgRef<MockContext> {
    MsgSubmitMisbehaviour::new(misbehaviour.into()).into()
}
