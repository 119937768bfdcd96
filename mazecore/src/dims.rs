use std::ops::{Add, AddAssign, Sub, SubAssign};

use paste::paste;
use serde::{Deserialize, Serialize};

use crate::gameboard::Direction;

/// Position of a cell, or a size of a grid.
///
/// `x` grows to the east, `y` grows to the south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    /// Position one cell away in `dir`. Bounds are the maze's business.
    pub fn neighbor(self, dir: Direction) -> Dims {
        self + dir.offset()
    }

    pub fn product(self) -> i32 {
        self.0 * self.1
    }

    /// Clamps both components into `[0, size)`.
    pub fn clamp_into(self, size: Dims) -> Dims {
        Dims(
            self.0.clamp(0, (size.0 - 1).max(0)),
            self.1.clamp(0, (size.1 - 1).max(0)),
        )
    }

    /// Row-major iteration over every position inside `size`.
    pub fn iter_fill(size: Dims) -> impl Iterator<Item = Dims> {
        (0..size.1).flat_map(move |y| (0..size.0).map(move |x| Dims(x, y)))
    }

    #[inline(always)]
    fn op_binary(self, other: Dims, op: impl Fn(i32, i32) -> i32) -> Dims {
        Dims(op(self.0, other.0), op(self.1, other.1))
    }
}

macro_rules! impl_op {
    ($trait:ident, $op:ident) => {
        impl $trait for Dims {
            type Output = Dims;

            #[inline(always)]
            fn $op(self, other: Dims) -> Dims {
                self.op_binary(other, |a, b| a.$op(b))
            }
        }

        paste! {
            impl [<$trait Assign>] for Dims {
                #[inline(always)]
                fn [<$op _assign>](&mut self, other: Dims) {
                    *self = self.$op(other);
                }
            }
        }
    };
}

impl_op!(Add, add);
impl_op!(Sub, sub);
