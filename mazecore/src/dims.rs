use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Zero;
use paste::paste;

/// Lattice coordinate or size. `.0` is the column (x, grows right), `.1` is the row (y, grows
/// down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Dims(pub i32, pub i32);

pub trait DimsTrait<const SIZE: usize>:
    Sized
    + Copy
    + Into<[Self::Item; SIZE]>
    + From<[Self::Item; SIZE]>
    + Add
    + Add<Self::Item>
    + AddAssign
    + AddAssign<Self::Item>
    + Sub
    + Sub<Self::Item>
    + SubAssign
    + SubAssign<Self::Item>
    + Mul
    + Mul<Self::Item>
    + MulAssign
    + MulAssign<Self::Item>
    + Div
    + Div<Self::Item>
    + DivAssign
    + DivAssign<Self::Item>
{
    type Item: fmt::Debug + Copy;
    const COUNT: usize = SIZE;

    fn sum(&self) -> Self::Item
    where
        Self::Item: Add<Output = Self::Item> + Zero,
    {
        self.to_arr()
            .iter()
            .fold(Self::Item::zero(), |acc, &x| acc + x)
    }

    fn abs(self) -> Self
    where
        Self::Item: Neg<Output = Self::Item> + PartialOrd + Zero,
    {
        self.op_unary(|a| if *a < Self::Item::zero() { -*a } else { *a })
    }

    /// Manhattan length of the vector.
    fn abs_sum(&self) -> Self::Item
    where
        Self::Item: Neg<Output = Self::Item> + PartialOrd + Zero + Add<Output = Self::Item>,
    {
        self.abs().sum()
    }

    fn to_arr(self) -> [Self::Item; SIZE] {
        self.into()
    }

    fn from_arr(arr: [Self::Item; SIZE]) -> Self {
        arr.into()
    }

    fn op_unary(&self, op: impl Fn(&Self::Item) -> Self::Item) -> Self {
        let arr = self.to_arr();
        Self::from_arr(std::array::from_fn(|i| op(&arr[i])))
    }

    fn op_binary(&self, other: &Self, op: impl Fn(&Self::Item, &Self::Item) -> Self::Item) -> Self {
        let (a, b) = (self.to_arr(), other.to_arr());
        Self::from_arr(std::array::from_fn(|i| op(&a[i], &b[i])))
    }
}

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);
    pub const ONE: Dims = Dims(1, 1);

    /// Iterates all positions of the rectangle `from..to` row by row.
    pub fn iter_fill(from: Dims, to: Dims) -> impl Iterator<Item = Dims> {
        (from.1..to.1).flat_map(move |y| (from.0..to.0).map(move |x| Dims(x, y)))
    }

    pub fn is_odd(&self) -> bool {
        self.0 % 2 != 0 && self.1 % 2 != 0
    }
}

impl From<[i32; 2]> for Dims {
    fn from(arr: [i32; 2]) -> Self {
        Dims(arr[0], arr[1])
    }
}

impl From<Dims> for [i32; 2] {
    fn from(dims: Dims) -> Self {
        [dims.0, dims.1]
    }
}

impl DimsTrait<2> for Dims {
    type Item = i32;
}

impl From<(i32, i32)> for Dims {
    fn from((x, y): (i32, i32)) -> Self {
        Dims(x, y)
    }
}

impl From<Dims> for (i32, i32) {
    fn from(dims: Dims) -> Self {
        (dims.0, dims.1)
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

macro_rules! impl_op {
    ($trait:ident + Assign, $op:ident, $dims:ident $(, $item:ident)?) => {
        impl_op!($trait, $op, $dims, $($item)?);

        paste! {
            impl [<$trait Assign>] for $dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: $dims) {
                    *self = self.$op(other);
                }
            }

            $(
                impl [<$trait Assign>]<$item> for $dims {
                    #[inline(always)]
                    fn [<$op _assign>](&mut self, other: $item) {
                        *self = self.$op(other);
                    }
                }
            )?
        }
    };
    ($trait:ident, $op:ident, $dims:ident $(, $item:ident)?) => {
        impl $trait for $dims {
            type Output = $dims;

            #[inline(always)]
            fn $op(self, other: $dims) -> $dims {
                self.op_binary(&other, |a, b| a.$op(b))
            }
        }

        $(
            impl $trait<$item> for $dims {
                type Output = $dims;

                #[inline(always)]
                fn $op(self, other: $item) -> $dims {
                    self.op_unary(|a| a.$op(other))
                }
            }
        )?
    };
}

macro_rules! impl_ops {
    ( $(($dims:ident, $item:ident)),* ) => {
        $(
            impl_op!(Add + Assign, add, $dims, $item);
            impl_op!(Sub + Assign, sub, $dims, $item);
            impl_op!(Mul + Assign, mul, $dims, $item);
            impl_op!(Div + Assign, div, $dims, $item);
        )*
    };
}

impl_ops![(Dims, i32)];
