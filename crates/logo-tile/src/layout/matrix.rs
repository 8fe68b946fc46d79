//! Affine transforms in PDF operand order `[a b c d e f]`

use super::Rect;

/// A PDF transformation matrix.
///
/// Points map as `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn from_array([a, b, c, d, e, f]: [f32; 6]) -> Self {
        Self::new(a, b, c, d, e, f)
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Maps `from` onto `to`, scaling each axis independently
    pub fn rect_to_rect(from: &Rect, to: &Rect) -> Self {
        let sx = if from.width > 0.0 { to.width / from.width } else { 1.0 };
        let sy = if from.height > 0.0 { to.height / from.height } else { 1.0 };
        Self::new(sx, 0.0, 0.0, sy, to.x - from.x * sx, to.y - from.y * sy)
    }

    /// Turns content in `page` a quarter clockwise so it fills a
    /// `page.height × page.width` box anchored at the origin.
    pub fn quarter_turn_cw(page: &Rect) -> Self {
        // x' = y - y0, y' = (x0 + w) - x
        Self::new(0.0, -1.0, 1.0, 0.0, -page.y, page.x + page.width)
    }

    /// Apply `self` first, then `next`
    pub fn then(&self, next: &Matrix) -> Matrix {
        Matrix {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            e: self.e * next.a + self.f * next.c + next.e,
            f: self.e * next.b + self.f * next.d + next.f,
        }
    }

    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Operand string for a `cm` operator
    pub fn to_operands(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
    }

    #[test]
    fn test_then_applies_left_first() {
        let m = Matrix::scale(2.0, 3.0).then(&Matrix::translate(10.0, 20.0));
        assert!(close(m.transform_point(1.0, 1.0), (12.0, 23.0)));

        let m = Matrix::translate(10.0, 20.0).then(&Matrix::scale(2.0, 3.0));
        assert!(close(m.transform_point(1.0, 1.0), (22.0, 63.0)));
    }

    #[test]
    fn test_rect_to_rect() {
        let from = Rect::new(10.0, 10.0, 100.0, 50.0);
        let to = Rect::new(0.0, 200.0, 20.0, 20.0);
        let m = Matrix::rect_to_rect(&from, &to);
        assert!(close(m.transform_point(10.0, 10.0), (0.0, 200.0)));
        assert!(close(m.transform_point(110.0, 60.0), (20.0, 220.0)));
    }

    #[test]
    fn test_quarter_turn_cw_corners() {
        // 200 wide, 100 tall page with an offset origin
        let page = Rect::new(5.0, 7.0, 200.0, 100.0);
        let m = Matrix::quarter_turn_cw(&page);

        // Top-left goes to top-right of the 100 x 200 result
        assert!(close(m.transform_point(5.0, 107.0), (100.0, 200.0)));
        // Bottom-left goes to top-left
        assert!(close(m.transform_point(5.0, 7.0), (0.0, 200.0)));
        // Bottom-right goes to the origin
        assert!(close(m.transform_point(205.0, 7.0), (0.0, 0.0)));
    }
}
