//! # 2-D Affine Transforms
//!
//! The diagonal pattern rotates its grid about the surface center. Rather
//! than mutating a shared drawing context
//! (`save`/`translate`/`rotate`/`scale`/`restore`), that geometry is an
//! explicit [`Transform2D`] value carried alongside the tile coordinates,
//! so generators stay pure and a renderer can apply it to any drawing
//! surface.

use serde::{Deserialize, Serialize};

/// A 2-D affine transform.
///
/// A point `(x, y)` maps to `(a*x + c*y + tx, b*x + d*y + ty)`, the same
/// six-value column-major convention as the HTML canvas and cairo matrices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform2D {
    /// The identity transform
    pub const IDENTITY: Transform2D = Transform2D {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Pure translation
    pub fn translation(tx: f64, ty: f64) -> Self {
        Transform2D {
            tx,
            ty,
            ..Transform2D::IDENTITY
        }
    }

    /// Axis-aligned scaling about the origin
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Transform2D {
            a: sx,
            d: sy,
            ..Transform2D::IDENTITY
        }
    }

    /// Counter-clockwise rotation about the origin
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Transform2D {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Compose: apply `self` first, then `next`.
    ///
    /// `a.then(b).apply(p) == b.apply(a.apply(p))`
    pub fn then(self, next: Transform2D) -> Self {
        Transform2D {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    /// Apply the transform to a point
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    /// Whether this is exactly the identity transform
    pub fn is_identity(&self) -> bool {
        *self == Transform2D::IDENTITY
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Transform2D::IDENTITY
    }
}
