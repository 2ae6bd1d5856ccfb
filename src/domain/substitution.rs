//! Placeholder substitution inside `image_prefix`.

/// Token replaced by the resolved Docker ID (organization or login).
pub const DOCKER_ID_TOKEN: &str = "<docker-id>";
/// Token replaced by the image-name prefix.
pub const PREFIX_TOKEN: &str = "<prefix>";

/// Replace both placeholder tokens in a single pass over `input`.
///
/// Replacement text is never rescanned, so a value that itself contains a
/// token is emitted literally.
pub fn substitute_placeholders(input: &str, docker_id: &str, prefix: &str) -> String {
    let mut output = String::with_capacity(input.len() + docker_id.len() + prefix.len());
    let mut rest = input;

    while let Some(start) = rest.find('<') {
        output.push_str(&rest[..start]);
        let candidate = &rest[start..];

        if let Some(after) = candidate.strip_prefix(DOCKER_ID_TOKEN) {
            output.push_str(docker_id);
            rest = after;
        } else if let Some(after) = candidate.strip_prefix(PREFIX_TOKEN) {
            output.push_str(prefix);
            rest = after;
        } else {
            output.push('<');
            rest = &candidate[1..];
        }
    }
    output.push_str(rest);

    output
}

/// Whether `value` still carries either placeholder token.
pub fn contains_placeholder(value: &str) -> bool {
    value.contains(DOCKER_ID_TOKEN) || value.contains(PREFIX_TOKEN)
}
