use thiserror::Error;

/// A sample `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Errors that can occur when building or selecting from a [`PointSet`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PointSetError {
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    #[error("index {index} is out of range for {len} points")]
    Index { index: usize, len: usize },
}

/// An ordered list of finite points.
///
/// Points keep the order they were given in; use [`PointSet::sorted`] for
/// ascending `x`. Distinct `x` values are not enforced here; methods that
/// need them check their own nodes.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set, rejecting non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first point with a NaN or infinite value.
    pub fn new<I, P>(points: I) -> Result<Self, PointSetError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(PointSetError::NonFinite {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(Self { points })
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the `x` values in order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Returns the `y` values in order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Builds a new set from the points at `indices`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is out of range.
    pub fn select(&self, indices: &[usize]) -> Result<Self, PointSetError> {
        let len = self.points.len();
        let points = indices
            .iter()
            .map(|&index| {
                self.points
                    .get(index)
                    .copied()
                    .ok_or(PointSetError::Index { index, len })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    /// Returns a copy sorted by ascending `x`.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut points = self.points.clone();
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        Self { points }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
