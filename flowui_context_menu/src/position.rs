// Copyright 2025 the Flowui Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of an open menu relative to the pointer.

use kurbo::{Point, Size};

/// Top-left corner for a menu of size `menu` opened at `pointer`.
///
/// On each axis the menu opens at the pointer unless it would reach the far
/// viewport edge, in which case it is flipped to end `margin` short of that
/// edge. The near edges are not clamped: a menu larger than the viewport can
/// end up at a negative coordinate.
pub fn clamp_position(pointer: Point, menu: Size, viewport: Size, margin: f64) -> Point {
    let x = if pointer.x + menu.width >= viewport.width {
        viewport.width - menu.width - margin
    } else {
        pointer.x
    };
    let y = if pointer.y + menu.height >= viewport.height {
        viewport.height - menu.height - margin
    } else {
        pointer.y
    };
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(800.0, 600.0);
    const MENU: Size = Size::new(200.0, 100.0);

    #[test]
    fn flips_near_bottom_right_corner() {
        let p = clamp_position(Point::new(750.0, 550.0), MENU, VIEWPORT, 20.0);
        assert_eq!(p, Point::new(580.0, 480.0));
    }

    #[test]
    fn keeps_pointer_when_menu_fits() {
        let p = clamp_position(Point::new(10.0, 10.0), MENU, VIEWPORT, 20.0);
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn touching_the_edge_counts_as_overflow() {
        // 600 + 200 == 800 on x; 499 + 100 < 600 on y.
        let p = clamp_position(Point::new(600.0, 499.0), MENU, VIEWPORT, 20.0);
        assert_eq!(p, Point::new(580.0, 499.0));
    }

    #[test]
    fn oversized_menu_goes_negative() {
        let p = clamp_position(Point::new(0.0, 0.0), Size::new(900.0, 50.0), VIEWPORT, 20.0);
        assert_eq!(p, Point::new(-120.0, 0.0));
    }
}
