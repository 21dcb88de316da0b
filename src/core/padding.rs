//! Left padding for fixed-width fields

/// Pad `text` on the left with `fill` until it is at least `width` characters long.
///
/// Text that is already `width` characters or longer is returned unchanged.
///
/// # Examples
///
/// ```
/// use rust_template_logger::core::padding::pad_left;
///
/// assert_eq!(pad_left("7", 2, '0'), "07");
/// assert_eq!(pad_left("2023", 2, '0'), "2023");
/// ```
#[must_use]
pub fn pad_left(text: impl Into<String>, width: usize, fill: char) -> String {
    let text = text.into();
    let len = text.chars().count();
    if len >= width {
        return text;
    }

    let mut padded = String::with_capacity(text.len() + (width - len) * fill.len_utf8());
    padded.extend(std::iter::repeat(fill).take(width - len));
    padded.push_str(&text);
    padded
}
