//! yum `priority=` directive editing

use regex::Regex;

use crate::error::Result;

/// Sets the `priority=` directive of `content` to `priority`.
///
/// Existing `priority=` lines get the new value, whatever they held before. If there is none, a
/// directive is appended on its own line at the end of the text.
pub fn change_priority(content: &str, priority: u32) -> Result<String> {
    let regex = Regex::new(r"(?m)^[ \t]*priority[ \t]*=[^\r\n]*")?;
    let directive = format!("priority={}", priority);

    if regex.is_match(content) {
        return Ok(regex
            .replace_all(content, regex::NoExpand(&directive))
            .into_owned());
    }

    Ok(if content.is_empty() {
        directive
    } else if content.ends_with('\n') {
        format!("{}{}\n", content, directive)
    } else {
        format!("{}\n{}", content, directive)
    })
}
