//! Codec configuration.

/// How the codec treats values that do not fit their declared field kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Skip the field: on encode it is omitted from the output, on decode
    /// the target keeps its default. This mirrors the historical behavior
    /// of the notation's first implementation.
    #[default]
    Lenient,
    /// Every skipped field is an error instead.
    Strict,
}

/// Options controlling [`encode_with_options`](crate::encode_with_options)
/// and [`decode_with_options`](crate::decode_with_options).
///
/// # Examples
///
/// ```rust
/// use datastring::CodecOptions;
///
/// let options = CodecOptions::new().strict();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// Handling of missing or unconvertible fields.
    pub strictness: Strictness,
}

impl CodecOptions {
    /// Default options: lenient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every skipped field a hard error.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strictness = Strictness::Strict;
        self
    }

    /// Makes unconvertible or missing fields silently skipped (the default).
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.strictness = Strictness::Lenient;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        assert_eq!(CodecOptions::new().strictness, Strictness::Lenient);
    }

    #[test]
    fn builder_flips_both_ways() {
        let options = CodecOptions::new().strict();
        assert_eq!(options.strictness, Strictness::Strict);
        assert_eq!(options.lenient().strictness, Strictness::Lenient);
    }
}
