use std::fmt;

/// Wraps an email address so log output only shows its first character and domain.
///
/// `tracing::info!("{}", Masked(email))` renders `j***@example.com`.
#[derive(Clone, Copy)]
pub struct Masked<'a>(pub &'a str);

impl fmt::Display for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{}***@{}", first, domain),
                None => write!(f, "***@{}", domain),
            },
            None if self.0.is_empty() => f.write_str("<empty>"),
            None => f.write_str("********"),
        }
    }
}

impl fmt::Debug for Masked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
