use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// First maximal run of ASCII digits. Matched against the stem only, so
/// digits inside the extension (`track.mp3`) never count as a token.
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// A filename split around its numeric token: `file-080.jpg` becomes
/// prefix `file-`, digits `080`, suffix `.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedName {
    pub prefix: String,
    pub digits: String,
    pub suffix: String,
}

impl NumberedName {
    /// Split `name` around the first digit run in its stem. Returns `None`
    /// for names that carry no numeric token.
    pub fn parse(name: &str) -> Option<Self> {
        let stem_len = match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) => name.len() - ext.len() - 1,
            None => name.len(),
        };
        let m = DIGITS.find(&name[..stem_len])?;
        Some(Self {
            prefix: name[..m.start()].to_string(),
            digits: m.as_str().to_string(),
            suffix: name[m.end()..].to_string(),
        })
    }

    /// The digit run with leading zeros trimmed; an all-zero run keeps a
    /// single `0`.
    pub fn significant(&self) -> &str {
        let trimmed = self.digits.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// Number of digits the numeric token needs without padding.
    pub fn width(&self) -> usize {
        self.significant().len()
    }

    /// Rebuild the filename with the numeric token left-padded to `width`
    /// digits. Excess leading zeros in the source run are normalized away.
    pub fn padded(&self, width: usize) -> String {
        format!("{}{:0>width$}{}", self.prefix, self.significant(), self.suffix)
    }
}
