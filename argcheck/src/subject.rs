//! How checked values appear in failure messages, and what "the same value"
//! means for identity checks.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A value that can be rendered into a failure message.
///
/// `Option::None` (at any depth) is the null value: it renders as the bare
/// `null` line and `render` is never called for it.
pub trait Subject {
    fn is_null(&self) -> bool {
        false
    }

    /// Writes the value as it appears between the quotes of an
    /// `actual:` / `expected:` line.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Implements [`Subject`] through the type's `Display` impl.
///
/// ```
/// use std::fmt;
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl fmt::Display for Port {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, ":{}", self.0)
///     }
/// }
///
/// argcheck::display_subject!(Port);
///
/// let failure = argcheck::equals(Port(80), Port(8080)).unwrap_err();
/// assert!(failure.message().contains("\tactual: ':8080'\n"));
/// ```
#[macro_export]
macro_rules! display_subject {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Subject for $ty {
                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_subject!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    Cow<'_, str>,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);

impl<T: Subject> Subject for Option<T> {
    fn is_null(&self) -> bool {
        match self {
            Some(value) => value.is_null(),
            None => true,
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("null"),
        }
    }
}

macro_rules! forward_subject {
    ($($wrapper:ident),+) => {
        $(
            impl<T: Subject + ?Sized> Subject for $wrapper<T> {
                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).render(f)
                }
            }
        )+
    };
}

forward_subject!(Box, Rc, Arc);

impl<T: Subject + ?Sized> Subject for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

/// Text that may be null, accepted by `not_empty`.
///
/// Lets callers pass `"text"`, a `String`, or an `Option` of either without
/// wrapping.
pub trait OptionalText {
    type Text: AsRef<str>;

    fn into_text(self) -> Option<Self::Text>;
}

macro_rules! optional_text {
    ($($ty:ty),+) => {
        $(
            impl<'a> OptionalText for $ty {
                type Text = $ty;

                fn into_text(self) -> Option<$ty> {
                    Some(self)
                }
            }

            impl<'a> OptionalText for Option<$ty> {
                type Text = $ty;

                fn into_text(self) -> Option<$ty> {
                    self
                }
            }
        )+
    };
}

optional_text!(&'a str, &'a String, String, Cow<'a, str>);

/// `Display` adapter over a [`Subject`].
pub(crate) struct Rendered<'a>(pub(crate) &'a dyn Subject);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

/// Identity comparison, as opposed to value equality.
///
/// Two values are the same when they point at the same allocation.
pub trait Identity {
    fn same_as(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for &T {
    fn same_as(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.same_as(right),
            (None, None) => true,
            _ => false,
        }
    }
}
