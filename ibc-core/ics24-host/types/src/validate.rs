use ibc_lc_primitives::prelude::*;

use crate::error::IdentifierError as Error;

const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Checks that the identifier only contains alphanumerics and the special
/// characters that ICS-24 allows.
pub fn validate_identifier_chars(id: &str) -> Result<(), Error> {
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::InvalidCharacter { id: id.into() });
    }

    Ok(())
}

/// Checks that the identifier length lies within `[min, max]`.
pub fn validate_identifier_length(id: &str, min: u64, max: u64) -> Result<(), Error> {
    if id.is_empty() {
        return Err(Error::Empty);
    }

    let min = min.max(1);
    let length = id.len() as u64;
    if (min..=max).contains(&length) {
        Ok(())
    } else {
        Err(Error::InvalidLength {
            id: id.into(),
            min,
            max,
        })
    }
}

/// Checks the length of a prefix that gets a `-{u64}` suffix appended to
/// form a full identifier. 20 is the maximum number of digits of a `u64`.
pub fn validate_prefix_length(
    prefix: &str,
    min_id_length: u64,
    max_id_length: u64,
) -> Result<(), Error> {
    let min = min_id_length.saturating_sub(2);
    let max = max_id_length.saturating_sub(21);

    validate_identifier_length(prefix, min, max)
}

/// Client types prefix client identifiers and are thus held to the prefix
/// bounds of a 9 to 64 character identifier.
pub fn validate_client_type(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_prefix_length(id, 9, 64)
}

/// Client identifiers are opaque: 1 to 64 characters of the ICS-24 set.
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 1, 64)
}

/// Chain identifiers have no length constraint in ICS-24 beyond the 64
/// character ceiling shared with every other identifier.
pub fn validate_chain_identifier(id: &str) -> Result<(), Error> {
    validate_identifier_chars(id)?;
    validate_identifier_length(id, 1, 64)
}
