use crate::Coordinate;
use serde::Deserialize;
use serde::Serialize;

/// Anything that can be read as a fixed-length slice of coordinates.
///
/// Lets the statistics and distance functions accept bare vectors,
/// slices, and metadata-carrying points alike.
pub trait Coordinates {
    fn coordinates(&self) -> &[Coordinate];
    fn dimension(&self) -> usize {
        self.coordinates().len()
    }
}

impl Coordinates for [Coordinate] {
    fn coordinates(&self) -> &[Coordinate] {
        self
    }
}
impl Coordinates for Vec<Coordinate> {
    fn coordinates(&self) -> &[Coordinate] {
        self.as_slice()
    }
}
impl<const D: usize> Coordinates for [Coordinate; D] {
    fn coordinates(&self) -> &[Coordinate] {
        self.as_slice()
    }
}
impl<T> Coordinates for &T
where
    T: Coordinates + ?Sized,
{
    fn coordinates(&self) -> &[Coordinate] {
        (**self).coordinates()
    }
}

/// Ordered tuple of real numbers with a fixed dimension per run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<Coordinate>);

impl Vector {
    /// The origin in `d` dimensions.
    pub fn zeros(d: usize) -> Self {
        Self::filled(d, 0.)
    }
    /// Every coordinate set to `value`.
    pub fn filled(d: usize, value: Coordinate) -> Self {
        Self(vec![value; d])
    }
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.0.iter()
    }
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }
}

impl Coordinates for Vector {
    fn coordinates(&self) -> &[Coordinate] {
        self.0.as_slice()
    }
}

impl std::ops::Index<usize> for Vector {
    type Output = Coordinate;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl From<Vec<Coordinate>> for Vector {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }
}
impl From<&[Coordinate]> for Vector {
    fn from(coordinates: &[Coordinate]) -> Self {
        Self(coordinates.to_vec())
    }
}
impl<const D: usize> From<[Coordinate; D]> for Vector {
    fn from(coordinates: [Coordinate; D]) -> Self {
        Self(coordinates.to_vec())
    }
}
impl From<Vector> for Vec<Coordinate> {
    fn from(vector: Vector) -> Self {
        vector.0
    }
}
impl FromIterator<Coordinate> for Vector {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", x)?;
        }
        write!(f, ")")
    }
}

/// A vector plus caller metadata.
///
/// The metadata is never read by the engines; it rides along so callers can
/// match output rows back to input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<M = ()> {
    vector: Vector,
    meta: M,
}

impl<M> Point<M> {
    pub fn new(vector: Vector, meta: M) -> Self {
        Self { vector, meta }
    }
    pub fn vector(&self) -> &Vector {
        &self.vector
    }
    pub fn meta(&self) -> &M {
        &self.meta
    }
    pub fn into_parts(self) -> (Vector, M) {
        (self.vector, self.meta)
    }
}

impl<M> Coordinates for Point<M> {
    fn coordinates(&self) -> &[Coordinate] {
        self.vector.coordinates()
    }
}

impl From<Vector> for Point {
    fn from(vector: Vector) -> Self {
        Self::new(vector, ())
    }
}
impl From<Vec<Coordinate>> for Point {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self::from(Vector::from(coordinates))
    }
}
impl<const D: usize> From<[Coordinate; D]> for Point {
    fn from(coordinates: [Coordinate; D]) -> Self {
        Self::from(Vector::from(coordinates))
    }
}
