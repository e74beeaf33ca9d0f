use crate::error::{Result, SetError};

/// Anything that names a set in the store.
pub trait KeyedSet {
    fn key(&self) -> &str;
}

/// The other side of a set algebra call: either a bare key name or another
/// set handle, possibly with a different store handle or codec.
#[derive(Clone, Copy)]
pub enum SetOperand<'a> {
    Named(&'a str),
    Ref(&'a dyn KeyedSet),
}

impl<'a> SetOperand<'a> {
    pub fn key(&self) -> &'a str {
        match *self {
            SetOperand::Named(name) => name,
            SetOperand::Ref(set) => set.key(),
        }
    }
}

impl std::fmt::Debug for SetOperand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetOperand::Named(name) => f.debug_tuple("Named").field(name).finish(),
            SetOperand::Ref(set) => f.debug_tuple("Ref").field(&set.key()).finish(),
        }
    }
}

impl<'a> From<&'a str> for SetOperand<'a> {
    fn from(name: &'a str) -> Self {
        SetOperand::Named(name)
    }
}

impl<'a> From<&'a String> for SetOperand<'a> {
    fn from(name: &'a String) -> Self {
        SetOperand::Named(name.as_str())
    }
}

/// Resolve operands to key names. Existence of the keys is not checked.
pub fn resolve<'a, I>(operands: I) -> Result<Vec<&'a str>>
where
    I: IntoIterator,
    I::Item: Into<SetOperand<'a>>,
{
    let keys: Vec<&'a str> = operands.into_iter().map(|op| op.into().key()).collect();
    if keys.is_empty() {
        return Err(SetError::InvalidArgument(
            "set algebra needs at least one other set".into(),
        ));
    }
    Ok(keys)
}
