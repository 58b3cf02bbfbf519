use num_traits::{AsPrimitive, PrimInt, Unsigned};

pub mod macros;

/// Trait for unsigned integer types which can index the points of a mesh.
pub trait MeshIndex:
    PrimInt + Unsigned + AsPrimitive<usize> + std::fmt::Debug + std::fmt::Display + 'static
{
    /// Convert from `usize`, returning `None` if `value` doesn't fit.
    #[inline]
    fn from_usize(value: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(value)
    }

    /// Widen to `usize`.
    #[inline]
    fn index(self) -> usize {
        self.as_()
    }
}
impl<P> MeshIndex for P where
    P: PrimInt + Unsigned + AsPrimitive<usize> + std::fmt::Debug + std::fmt::Display + 'static
{
}
