// crates/domain/src/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::category::Category;

/// Five counters: one per [`Category`] plus the number of counted words.
///
/// Used both for the partial result of a single line and for the running
/// totals of a whole run. Every category hit is also a counted word, so
/// `total >= category_sum()` holds for any value built through [`record`].
///
/// [`record`]: TallyCounts::record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TallyCounts {
    pub horatio: usize,
    pub and: usize,
    pub hamlet: usize,
    pub god: usize,
    pub total: usize,
}

impl TallyCounts {
    #[inline]
    pub const fn zero() -> Self {
        Self { horatio: 0, and: 0, hamlet: 0, god: 0, total: 0 }
    }

    #[inline]
    pub const fn get(&self, category: Category) -> usize {
        match category {
            Category::Horatio => self.horatio,
            Category::And => self.and,
            Category::Hamlet => self.hamlet,
            Category::God => self.god,
        }
    }

    #[inline]
    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Horatio => &mut self.horatio,
            Category::And => &mut self.and,
            Category::Hamlet => &mut self.hamlet,
            Category::God => &mut self.god,
        }
    }

    /// Count one non-empty word, bumping at most one category.
    #[inline]
    pub fn record(&mut self, category: Option<Category>) {
        self.total += 1;
        if let Some(category) = category {
            *self.slot_mut(category) += 1;
        }
    }

    /// Sum of the four category counters.
    pub const fn category_sum(&self) -> usize {
        self.horatio + self.and + self.hamlet + self.god
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.total == 0 && self.category_sum() == 0
    }

    /// `(category, count)` pairs in report order.
    pub fn by_category(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl AddAssign<&TallyCounts> for TallyCounts {
    fn add_assign(&mut self, rhs: &TallyCounts) {
        self.horatio += rhs.horatio;
        self.and += rhs.and;
        self.hamlet += rhs.hamlet;
        self.god += rhs.god;
        self.total += rhs.total;
    }
}

impl AddAssign for TallyCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Add for TallyCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Sum for TallyCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a TallyCounts> for TallyCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut acc, c| {
            acc += c;
            acc
        })
    }
}
