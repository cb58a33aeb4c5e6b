/// Substituted for every byte that is not printable ASCII.
pub const PLACEHOLDER: char = '.';

/// True for the printable ASCII range, space (32) through tilde (126).
pub fn is_printable_ascii(byte: u8) -> bool {
    (32..127).contains(&byte)
}

/// Renders each printable byte as its character and everything else as `.`.
pub fn to_ascii_display<B: AsRef<[u8]>>(payload: B) -> String {
    payload
        .as_ref()
        .iter()
        .map(|&byte| {
            if is_printable_ascii(byte) {
                byte as char
            } else {
                PLACEHOLDER
            }
        })
        .collect()
}

/// [`to_ascii_display`] for a payload that may be absent; `None` renders as
/// an empty string.
pub fn to_ascii_display_opt<B: AsRef<[u8]>>(payload: Option<B>) -> String {
    payload.map_or_else(String::new, to_ascii_display)
}
