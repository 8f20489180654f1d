//! Mimetype resolution.

/// Extension-to-mimetype lookup.
///
/// Injected into the scanner so tests can substitute a fixed table for the
/// host-provided one.
pub trait MimeResolver {
    /// Guess a mimetype from a file name, `None` when no guess exists.
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Resolver backed by the shared extension table.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessMimeResolver;

impl MimeResolver for GuessMimeResolver {
    fn resolve(&self, name: &str) -> Option<String> {
        mime_guess::from_path(name).first_raw().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        let resolver = GuessMimeResolver;
        assert_eq!(resolver.resolve("a.txt").as_deref(), Some("text/plain"));
        assert_eq!(resolver.resolve("a.json").as_deref(), Some("application/json"));
        assert_eq!(resolver.resolve("a.png").as_deref(), Some("image/png"));
    }

    #[test]
    fn test_unknown_extension() {
        let resolver = GuessMimeResolver;
        assert_eq!(resolver.resolve("a.nosuchext"), None);
        assert_eq!(resolver.resolve("noextension"), None);
    }
}
