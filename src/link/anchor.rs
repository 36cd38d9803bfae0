//! Member signature encoding
//!
//! Maps a raw member signature to the URL-fragment-safe anchor the page
//! generator emits for it. Deterministic, and collision-free within a
//! single class member list.

/// Encode a member signature as a URL-fragment anchor
///
/// `(`, `)`, `<`, `>` and `,` become `-`; spaces and `[` are dropped;
/// `]` becomes `:A`; `$` becomes `:D` and `_` stays itself, each prefixed
/// with `Z:Z` when leading; everything else passes through.
pub fn member_anchor(name: &str) -> String {
    let mut anchor = String::with_capacity(name.len());
    for (i, ch) in name.chars().enumerate() {
        match ch {
            '(' | ')' | '<' | '>' | ',' => anchor.push('-'),
            ' ' | '[' => {}
            ']' => anchor.push_str(":A"),
            '$' => {
                if i == 0 {
                    anchor.push_str("Z:Z");
                }
                anchor.push_str(":D");
            }
            '_' => {
                if i == 0 {
                    anchor.push_str("Z:Z");
                }
                anchor.push(ch);
            }
            _ => anchor.push(ch),
        }
    }
    anchor
}
