/// Returns the longest prefix shared by every string in `strs`, or the
/// empty string when the input is empty or the strings share nothing.
///
/// The running prefix starts as the first string and shrinks to the
/// matched portion against each subsequent string.
pub fn longest_common_prefix<'a>(strs: &[&'a str]) -> &'a str {
    let Some((&first, rest)) = strs.split_first() else {
        return "";
    };

    let mut prefix = first;
    for s in rest {
        // Mismatch offsets fall on char boundaries, so the slice below
        // cannot split a code point.
        let shared = prefix
            .char_indices()
            .zip(s.chars())
            .find(|&((_, a), b)| a != b)
            .map_or_else(|| prefix.len().min(s.len()), |((i, _), _)| i);
        prefix = &prefix[..shared];

        if prefix.is_empty() {
            break;
        }
    }

    prefix
}
