use tendermint_light_client_verifier::ProdVerifier;

/// Specifies the Verifier interface that hosts must adhere to when customizing
/// Tendermint client verification behaviour.
///
/// For users who require custom verification logic, i.e., in situations when
/// the Tendermint `ProdVerifier` doesn't provide the desired outcome, users
/// should define a custom verifier struct as a unit struct and then implement
/// `TmVerifier` for it. Note that the custom verifier does need to also
/// implement the `tendermint_light_client_verifier::Verifier` trait.
///
/// The custom verifier is wired up by calling the standalone
/// [`verify_header`](crate::verify_header) and
/// [`verify_misbehaviour`](crate::verify_misbehaviour) functions with it from
/// a custom `LightClient` implementation.
pub trait TmVerifier {
    type Verifier: tendermint_light_client_verifier::Verifier;

    fn verifier(&self) -> Self::Verifier;
}

/// The default verifier for IBC clients, the Tendermint light client
/// ProdVerifier, for those users who don't require custom verification logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultVerifier;

impl TmVerifier for DefaultVerifier {
    type Verifier = ProdVerifier;

    fn verifier(&self) -> Self::Verifier {
        ProdVerifier::default()
    }
}
