use crate::Errors::InvalidDetection;
use crate::{EstimateClose, EPS};
use anyhow::Result;
use nalgebra::Point2;

/// Bounding box in the format (x, y, width, height), where (x, y) is the top-left corner
///
#[derive(Clone, Default, Debug, Copy)]
pub struct BoundingBox {
    _x: f32,
    _y: f32,
    _width: f32,
    _height: f32,
}

impl BoundingBox {
    pub fn x(&self) -> f32 {
        self._x
    }

    pub fn y(&self) -> f32 {
        self._y
    }

    pub fn width(&self) -> f32 {
        self._width
    }

    pub fn height(&self) -> f32 {
        self._height
    }

    /// Constructor
    ///
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            _x: x,
            _y: y,
            _width: width,
            _height: height,
        }
    }

    /// Builds the box that has the center in `(cx, cy)`
    ///
    pub fn with_center(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Center of the box: `(x + width / 2, y + height / 2)`
    ///
    pub fn center(&self) -> Point2<f32> {
        Point2::new(self._x + self._width / 2.0, self._y + self._height / 2.0)
    }

    /// Checks that the box is usable for association: all the components are finite and
    /// the dimensions are not negative.
    ///
    pub fn validate(&self) -> Result<()> {
        let components = [self._x, self._y, self._width, self._height];
        if components.iter().any(|c| !c.is_finite()) {
            return Err(InvalidDetection(format!(
                "bounding box has non-finite components: {self:?}"
            ))
            .into());
        }
        if self._width < 0.0 || self._height < 0.0 {
            return Err(InvalidDetection(format!(
                "bounding box has negative dimensions: {self:?}"
            ))
            .into());
        }
        Ok(())
    }

    /// Euclidean distance between the centers of two boxes
    ///
    pub fn center_distance(l: &BoundingBox, r: &BoundingBox) -> f32 {
        nalgebra::distance(&l.center(), &r.center())
    }
}

impl EstimateClose for BoundingBox {
    /// Allows comparing bboxes
    ///
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self._x - other._x).abs() < eps
            && (self._y - other._y).abs() < eps
            && (self._width - other._width).abs() < eps
            && (self._height - other._height).abs() < eps
    }
}

impl PartialEq for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.almost_same(other, EPS)
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(v: [f32; 4]) -> Self {
        BoundingBox::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(b: BoundingBox) -> Self {
        [b._x, b._y, b._width, b._height]
    }
}
