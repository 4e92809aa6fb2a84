use super::classifier::is_emoji;

/// Output of one scrub pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scrubbed<T> {
    pub cleaned: T,
    pub removed: usize,
}

pub fn scrub_str(text: &str) -> Scrubbed<String> {
    let mut cleaned = String::with_capacity(text.len());
    let removed = push_scrubbed(&mut cleaned, text);
    Scrubbed { cleaned, removed }
}

/// Scrubs `bytes` when they are valid UTF-8. Anything else is returned
/// unchanged with nothing removed, since dropping a character between two
/// invalid fragments could splice them into a new one.
pub fn scrub_bytes(bytes: &[u8]) -> Scrubbed<Vec<u8>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let part = scrub_str(text);
            Scrubbed {
                cleaned: part.cleaned.into_bytes(),
                removed: part.removed,
            }
        }
        Err(_) => Scrubbed {
            cleaned: bytes.to_vec(),
            removed: 0,
        },
    }
}

fn push_scrubbed(out: &mut String, text: &str) -> usize {
    let mut removed = 0;
    for c in text.chars() {
        if is_emoji(c) {
            removed += 1;
        } else {
            out.push(c);
        }
    }
    removed
}
