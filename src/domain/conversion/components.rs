use super::ConversionError;

const RELATIVE_MARKER: &str = "./";

/// A path split into `/`-separated segments.
///
/// A leading `./` is remembered separately and re-attached when rendering;
/// it never shows up as a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComponents {
    relative: bool,
    segments: Vec<String>,
}

impl PathComponents {
    /// Split `path`, requiring the last segment to carry an extension.
    pub fn parse(path: &str) -> Result<Self, ConversionError> {
        let (relative, normalized) = match path.strip_prefix(RELATIVE_MARKER) {
            Some(rest) => (true, rest),
            None => (false, path),
        };

        let segments: Vec<String> = normalized.split('/').map(str::to_string).collect();
        match segments.last() {
            Some(last) if last.contains('.') => Ok(Self { relative, segments }),
            _ => Err(ConversionError::InvalidPath(path.to_string())),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Same marker, new segments.
    pub fn with_segments(&self, segments: Vec<String>) -> Self {
        Self { relative: self.relative, segments }
    }

    pub fn render(&self) -> String {
        let joined = self.segments.join("/");
        if self.relative { format!("{}{}", RELATIVE_MARKER, joined) } else { joined }
    }
}

/// A filename split at its first `.` into stem and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileName {
    pub stem: String,
    pub extension: String,
}

impl FileName {
    pub fn parse(segment: &str) -> Self {
        match segment.split_once('.') {
            Some((stem, extension)) => {
                Self { stem: stem.to_string(), extension: extension.to_string() }
            }
            None => Self { stem: segment.to_string(), extension: String::new() },
        }
    }

    /// Drop `suffix` from the stem when present.
    pub fn without_suffix(self, suffix: &str) -> Self {
        self.without_any_suffix(&[suffix])
    }

    /// Drop the first of `suffixes` the stem ends with.
    pub fn without_any_suffix(self, suffixes: &[&str]) -> Self {
        let stripped =
            suffixes.iter().find_map(|suffix| self.stem.strip_suffix(suffix)).map(str::to_string);
        match stripped {
            Some(stem) => Self { stem, ..self },
            None => self,
        }
    }

    /// Append `suffix` to the stem unless it already ends with it.
    pub fn with_suffix(self, suffix: &str) -> Self {
        if self.stem.ends_with(suffix) {
            self
        } else {
            Self { stem: format!("{}{}", self.stem, suffix), extension: self.extension }
        }
    }

    pub fn with_extension(self, extension: &str) -> Self {
        Self { stem: self.stem, extension: extension.to_string() }
    }

    pub fn render(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }
}
