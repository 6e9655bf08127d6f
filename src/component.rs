//! URI components.

use crate::encoding;

/// The [userinfo] subcomponent of authority: a user name and an optional
/// password.
///
/// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2.1
///
/// Both halves are stored percent-decoded; [`encode`](Self::encode)
/// re-escapes them on demand. An absent password is distinct from an empty
/// one: only a present password puts a ":" in the rendered form.
///
/// # Examples
///
/// ```
/// use lenient_uri::UserInfo;
///
/// let info = UserInfo::parse("john%20doe:s3cret");
/// assert_eq!(info.user(), "john doe");
/// assert_eq!(info.pass(), Some("s3cret"));
/// assert_eq!(info.to_string(), "john doe:s3cret");
/// assert_eq!(info.encode(), "john%20doe:s3cret");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInfo {
    pub(crate) user: String,
    pub(crate) pass: Option<String>,
}

impl UserInfo {
    /// Creates a `UserInfo` from percent-encoded parts, decoding both.
    ///
    /// Passing `Some("")` keeps an empty password, which still renders
    /// its ":" separator; `None` drops the separator altogether.
    pub fn new(user: &str, pass: Option<&str>) -> UserInfo {
        UserInfo {
            user: encoding::decode(user).into_owned(),
            pass: pass.map(|p| encoding::decode(p).into_owned()),
        }
    }

    /// Parses a `UserInfo` from its combined `user:pass` form.
    ///
    /// The split happens at the first ":"; any further colon belongs to
    /// the password. Without a colon the whole input is the user and the
    /// password is absent. All inputs are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::UserInfo;
    ///
    /// let info = UserInfo::parse("user:pa:ss");
    /// assert_eq!(info.user(), "user");
    /// assert_eq!(info.pass(), Some("pa:ss"));
    ///
    /// let info = UserInfo::parse("user");
    /// assert_eq!(info.pass(), None);
    /// ```
    pub fn parse(s: &str) -> UserInfo {
        match s.split_once(':') {
            Some((user, pass)) => UserInfo::new(user, Some(pass)),
            None => UserInfo::new(s, None),
        }
    }

    /// Returns the decoded user name.
    #[inline]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the decoded password, if one is present.
    #[inline]
    pub fn pass(&self) -> Option<&str> {
        self.pass.as_deref()
    }

    /// Returns the percent-encoded `user` or `user:pass` form, suitable
    /// for placing inside an authority component.
    ///
    /// The decoded rendering for structural comparison is [`Display`];
    /// this one is for the wire.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn encode(&self) -> String {
        let mut out = encoding::encode(&self.user).into_owned();
        if let Some(pass) = &self.pass {
            out.push(':');
            out.push_str(&encoding::encode(pass));
        }
        out
    }

    /// Returns `true` if there is neither a user nor a password.
    ///
    /// An empty but present password counts as content and still renders
    /// an "@" in the authority.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.pass.is_none()
    }
}
