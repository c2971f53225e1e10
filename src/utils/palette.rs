//! ANSI styling for driver output. Fragment text itself is never styled.

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section headers (`==== nthPtr ====`).
    Section,
    /// Rejected input.
    Failure,
}

impl Tone {
    pub fn code(self) -> &'static str {
        match self {
            Tone::Section => "\x1b[96m",
            Tone::Failure => "\x1b[91m",
        }
    }
}

pub fn paint(tone: Tone, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", tone.code(), text, RESET)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint() {
        assert_eq!(paint(Tone::Section, "x", true), "\x1b[96mx\x1b[0m");
        assert_eq!(paint(Tone::Failure, "x", true), "\x1b[91mx\x1b[0m");
        assert_eq!(paint(Tone::Failure, "x", false), "x");
    }
}
