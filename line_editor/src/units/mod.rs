// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type safe indices for the buffer. A row is a position in the document. A column is
//! either *logical* ([`ColIndex`], an index into a line's raw bytes) or *rendered*
//! ([`RenderColIndex`], an index into the tab expanded display bytes). Keeping them apart
//! in the type system makes it impossible to hand a rendered column to an API that
//! expects a logical one.

// Attach.
pub mod col_index;
pub mod row_index;

// Re-export.
pub use col_index::*;
pub use row_index::*;

/// Implements the arithmetic that every index newtype in this module shares. Addition
/// and subtraction take a plain `usize` offset. Subtraction saturates at zero, since
/// none of these indices can be negative.
#[macro_export]
macro_rules! create_index_arithmetic_operators {
    ($index_type:ident) => {
        impl std::ops::Add<usize> for $index_type {
            type Output = $index_type;
            fn add(self, rhs: usize) -> Self::Output { $index_type(self.0 + rhs) }
        }

        impl std::ops::AddAssign<usize> for $index_type {
            fn add_assign(&mut self, rhs: usize) { self.0 += rhs; }
        }

        impl std::ops::Sub<usize> for $index_type {
            type Output = $index_type;
            fn sub(self, rhs: usize) -> Self::Output {
                $index_type(self.0.saturating_sub(rhs))
            }
        }

        impl std::ops::SubAssign<usize> for $index_type {
            fn sub_assign(&mut self, rhs: usize) { self.0 = self.0.saturating_sub(rhs); }
        }

        impl From<usize> for $index_type {
            fn from(val: usize) -> Self { $index_type(val) }
        }

        impl From<$index_type> for usize {
            fn from(it: $index_type) -> Self { it.0 }
        }

        impl std::fmt::Debug for $index_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($index_type), self.0)
            }
        }

        impl std::fmt::Display for $index_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
