//! Display formatting helpers

/// Join platform names for display: `"A, B & C"`.
///
/// A single name is returned as-is and an empty list gives an empty string.
pub fn format_platforms<S: AsRef<str>>(platforms: &[S]) -> String {
    let last = platforms.len().saturating_sub(1);
    let mut joined = String::new();

    for (i, platform) in platforms.iter().enumerate() {
        if i > 0 {
            joined.push_str(if i == last { " & " } else { ", " });
        }
        joined.push_str(platform.as_ref());
    }

    joined
}
