//! Window layout: the chrome strip on top, tab content below.

use hack_common::Rect;

// =============================================================================
// LAYOUT
// =============================================================================

/// Split a `width` x `height` viewport into the chrome and content rects.
///
/// The chrome takes the top `toolbar_height` pixels, clamped to the window.
pub fn split_viewport(width: f64, height: f64, toolbar_height: f64) -> (Rect, Rect) {
    let width = width.max(0.0);
    let height = height.max(0.0);
    let chrome_height = toolbar_height.clamp(0.0, height);

    let chrome = Rect::new(0.0, 0.0, width, chrome_height);
    let content = Rect::new(0.0, chrome_height, width, height - chrome_height);
    (chrome, content)
}

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_on_top_content_below() {
        let (chrome, content) = split_viewport(1280.0, 800.0, 76.0);
        assert_eq!(chrome, Rect::new(0.0, 0.0, 1280.0, 76.0));
        assert_eq!(content, Rect::new(0.0, 76.0, 1280.0, 724.0));
    }

    #[test]
    fn toolbar_taller_than_window_is_clamped() {
        let (chrome, content) = split_viewport(400.0, 50.0, 76.0);
        assert!((chrome.height - 50.0).abs() < f64::EPSILON);
        assert!(content.height.abs() < f64::EPSILON);
        assert!((content.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_sized_window() {
        let (chrome, content) = split_viewport(0.0, 0.0, 76.0);
        assert_eq!(chrome, Rect::default());
        assert_eq!(content, Rect::default());
    }

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let rect = Rect::new(0.0, 76.0, 800.0, 600.0);
        let wry_rect = rect_to_wry(&rect);

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!((pos.y - 76.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 800.0).abs() < f64::EPSILON);
                assert!((size.height - 600.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
