use std::borrow::Cow;
use std::fmt;

/// Optional text attached to a failure report.
#[derive(Debug, Clone, Default)]
pub enum Message<'a> {
    #[default]
    Empty,
    /// Used verbatim.
    Text(Cow<'a, str>),
    /// A format template with its arguments, as built by `format_args!`.
    Format(fmt::Arguments<'a>),
}

impl Message<'_> {
    /// A verbatim message from anything printable. Braces are not
    /// interpreted.
    pub fn display<T: fmt::Display + ?Sized>(msg: &T) -> Message<'static> {
        Message::Text(Cow::Owned(msg.to_string()))
    }
}

impl<'a> Message<'a> {
    /// The rendered message, or `None` when there is nothing to show.
    pub fn render(&self) -> Option<Cow<'a, str>> {
        let text = match self {
            Message::Empty => return None,
            Message::Text(s) => s.clone(),
            Message::Format(args) => match args.as_str() {
                Some(s) => Cow::Borrowed(s),
                None => Cow::Owned(args.to_string()),
            },
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(s: &'a str) -> Self {
        Message::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Message<'a> {
    fn from(s: &'a String) -> Self {
        Message::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Message<'_> {
    fn from(s: String) -> Self {
        Message::Text(Cow::Owned(s))
    }
}

impl<'a> From<fmt::Arguments<'a>> for Message<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        Message::Format(args)
    }
}
