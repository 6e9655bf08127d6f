use crate::{ParseError, ParseErrorKind, Query, Uri, UserInfo};
use std::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::EmptyHost => "empty host at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

/// The canonical, transmission-safe serialization.
///
/// Walks the five top-level slots in order: `scheme:`, `//authority`, the
/// raw path, `?query` and `#fragment`, each emitted only when non-empty.
/// This is the exact inverse of [`Uri::parse`] for every string that
/// round-trips; a trailing bare "?" with no query content is dropped.
impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }

        let auth = self.authority();
        if !auth.is_empty() {
            write!(f, "//{}", auth)?;
        }

        f.write_str(self.raw_path())?;

        if !self.raw_query.is_empty() {
            write!(f, "?{}", self.raw_query)?;
        }

        let fragment = self.raw_fragment();
        if !fragment.is_empty() {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme)
            .field("userinfo", &self.userinfo)
            .field("host", &self.host)
            .field("path", &self.path)
            .field("raw_path", &self.raw_path)
            .field("raw_query", &self.raw_query)
            .field("fragment", &self.fragment)
            .field("raw_fragment", &self.raw_fragment)
            .finish()
    }
}

/// The decoded `user` or `user:pass` form, verbatim.
///
/// Meant for structural comparison, not transmission; the wire form is
/// [`UserInfo::encode`].
impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user)?;
        if let Some(pass) = &self.pass {
            write!(f, ":{}", pass)?;
        }
        Ok(())
    }
}

impl fmt::Debug for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserInfo")
            .field("user", &self.user)
            .field("pass", &self.pass)
            .finish()
    }
}

/// The encoded query string, as [`Query::encode`] produces it.
impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
