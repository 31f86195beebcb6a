/// A trait implemented by all types, where `Self::Type` is `Self`.
///
/// `Coro::yields()` and `Coro::returns()` take a type argument bounded by
/// `Is<Type = Y>` so that a caller can name the yield or return type of a
/// producer whose closure leaves it ambiguous, typically the error type of
/// an [`Emit`](crate::Emit) that no step mentions.
pub trait Is {
    type Type;
}

impl<T> Is for T {
    type Type = T;
}
