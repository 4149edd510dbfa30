//! IRC message prefix (source) view.
//!
//! ```text
//! prefix = servername / ( nickname [ [ "!" user ] "@" host ] )
//! ```

/// The origin of a message, split out of its prefix text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// A server name, e.g. `irc.example.net`.
    Server(&'a str),
    /// A user mask: `nick`, `nick@host` or `nick!user@host`.
    User {
        nick: &'a str,
        user: Option<&'a str>,
        host: Option<&'a str>,
    },
}

impl<'a> Source<'a> {
    /// Split a prefix into its origin shape.
    ///
    /// A prefix with neither `!` nor `@` is a server name when it contains a
    /// `.`, and a bare nickname otherwise.
    pub fn parse(prefix: &'a str) -> Source<'a> {
        let (mask, host) = match prefix.split_once('@') {
            Some((mask, host)) => (mask, Some(host)),
            None => (prefix, None),
        };
        let (nick, user) = match mask.split_once('!') {
            Some((nick, user)) => (nick, Some(user)),
            None => (mask, None),
        };

        if host.is_none() && user.is_none() && nick.contains('.') {
            Source::Server(prefix)
        } else {
            Source::User { nick, user, host }
        }
    }

    /// The nickname, if this source is a user.
    pub fn nickname(&self) -> Option<&'a str> {
        match self {
            Source::User { nick, .. } => Some(*nick),
            Source::Server(_) => None,
        }
    }

    /// The host part: the server name itself, or the user's host.
    pub fn host(&self) -> Option<&'a str> {
        match self {
            Source::Server(name) => Some(*name),
            Source::User { host, .. } => *host,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_user_mask() {
        assert_eq!(
            Source::parse("dan!d@localhost"),
            Source::User {
                nick: "dan",
                user: Some("d"),
                host: Some("localhost"),
            }
        );
    }

    #[test]
    fn test_nick_at_host() {
        let source = Source::parse("nick@irc.example.net");
        assert_eq!(source.nickname(), Some("nick"));
        assert_eq!(source.host(), Some("irc.example.net"));
    }

    #[test]
    fn test_server_name() {
        let source = Source::parse("tungsten.freenode.net");
        assert_eq!(source, Source::Server("tungsten.freenode.net"));
        assert_eq!(source.nickname(), None);
        assert_eq!(source.host(), Some("tungsten.freenode.net"));
    }

    #[test]
    fn test_bare_nick() {
        assert_eq!(
            Source::parse("NickServ"),
            Source::User {
                nick: "NickServ",
                user: None,
                host: None,
            }
        );
    }
}
