use super::errors::BearerError;

/// Extract the token from a bearer-style authorization header.
///
/// Pure parsing with no knowledge of token semantics; the same rule serves
/// access-token and refresh-token transport. The scheme word (first field)
/// is accepted and discarded without validation.
///
/// # Arguments
/// * `header` - Raw `Authorization` header value, if present
///
/// # Errors
/// * `MissingHeader` - Header absent or empty
/// * `MalformedHeader` - Fewer than two whitespace-separated fields
pub fn bearer_token(header: Option<&str>) -> Result<&str, BearerError> {
    second_field(header)
}

/// Extract an API key from an authorization header.
///
/// Same parsing rule as [`bearer_token`]; kept as a separate entry point
/// because the downstream validation differs (a trusted webhook caller's
/// configured key rather than a signed token).
///
/// # Errors
/// * `MissingHeader` - Header absent or empty
/// * `MalformedHeader` - Fewer than two whitespace-separated fields
pub fn api_key(header: Option<&str>) -> Result<&str, BearerError> {
    second_field(header)
}

fn second_field(header: Option<&str>) -> Result<&str, BearerError> {
    let value = header.ok_or(BearerError::MissingHeader)?;
    let mut fields = value.split_whitespace();

    fields.next().ok_or(BearerError::MissingHeader)?;
    fields.next().ok_or(BearerError::MalformedHeader)
}
