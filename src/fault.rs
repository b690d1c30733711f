use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Types that may be carried as the error of a failed [`Outcome`](crate::Outcome).
///
/// A fault only has to describe itself: `Display` is its human-readable
/// message. Every [`std::error::Error`] is a fault, as is [`SharedError`].
pub trait Fault: fmt::Display + fmt::Debug {}

impl<T: StdError + ?Sized> Fault for T {}

impl Fault for SharedError {}

/// A type-erased, cheaply clonable error.
///
/// This is the broadest fault category: any `Error + Send + Sync + 'static`
/// converts into it, so an `ErrorLogger<SharedError>` can ingest failures of
/// every narrower error type.
#[derive(Clone)]
pub struct SharedError(Arc<dyn StdError + Send + Sync + 'static>);

impl SharedError {
    /// Wrap a concrete error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Build an error from a plain message.
    pub fn msg(message: impl fmt::Display) -> Self {
        Self::new(Message(message.to_string()))
    }

    /// Borrow the wrapped error as its concrete type, if it is one.
    pub fn downcast_ref<T: StdError + 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Borrow the wrapped error as a trait object.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }
}

impl<E> From<E> for SharedError
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for SharedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Message {}
