/// Escape text for Telegram's HTML parse mode.
///
/// Telegram HTML supports only a small subset of tags, so anything user-controlled
/// (usernames, first names) must be escaped before being interpolated.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
