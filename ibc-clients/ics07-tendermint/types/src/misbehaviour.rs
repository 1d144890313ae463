//! Defines the misbehaviour type for the tendermint light client

use ibc_lc_client_context::client_message::ClientMisbehaviour;
use ibc_lc_client_types::Height;
use ibc_lc_host_types::identifiers::{ClientId, ClientType};
use ibc_lc_primitives::prelude::*;
use tendermint::crypto::Sha256;
use tendermint::merkle::MerkleHash;

use crate::error::TendermintClientError;
use crate::header::Header;

/// Tendermint light client's misbehaviour type: two headers for the same
/// chain that cannot both be honest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Misbehaviour {
    client_id: ClientId,
    header1: Box<Header>,
    header2: Box<Header>,
}

impl Misbehaviour {
    pub fn new(client_id: ClientId, header1: Header, header2: Header) -> Self {
        Self {
            client_id,
            header1: Box::new(header1),
            header2: Box::new(header2),
        }
    }

    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    pub fn header1(&self) -> &Header {
        &self.header1
    }

    pub fn header2(&self) -> &Header {
        &self.header2
    }

    pub fn validate_basic<H: MerkleHash + Sha256 + Default>(
        &self,
    ) -> Result<(), TendermintClientError> {
        self.header1.validate_basic::<H>()?;
        self.header2.validate_basic::<H>()?;

        if self.header1.chain_id() != self.header2.chain_id() {
            return Err(TendermintClientError::InvalidMisbehaviour {
                description: "headers must have identical chain_ids".to_owned(),
            });
        }

        if self.header1.height() < self.header2.height() {
            return Err(TendermintClientError::InvalidMisbehaviour {
                description: format!(
                    "header1 height is less than header2 height ({} < {})",
                    self.header1.height(),
                    self.header2.height()
                ),
            });
        }

        Ok(())
    }

    /// Tells whether the two headers conflict. At equal heights they must
    /// commit to different blocks. Otherwise the higher `header1` must not be
    /// later in time than `header2`.
    pub fn is_conflicting(&self) -> bool {
        if self.header1.height() == self.header2.height() {
            self.header1.block_hash() != self.header2.block_hash()
        } else {
            self.header1.time() <= self.header2.time()
        }
    }
}

impl ClientMisbehaviour for Misbehaviour {
    fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    fn client_type(&self) -> ClientType {
        crate::client_type()
    }

    /// The height of `header1`, the higher of the two headers.
    fn height(&self) -> Height {
        self.header1.height()
    }
}

impl core::fmt::Display for Misbehaviour {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "{} h1: {}-{} h2: {}-{}",
            self.client_id,
            self.header1.height(),
            self.header1.trusted_height(),
            self.header2.height(),
            self.header2.trusted_height(),
        )
    }
}
