#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::pattern::Point;
    use rgb::RGB8;

    fn square_layout() -> Layout {
        Layout {
            scale: 10.0,
            canvas_width: 120,
            canvas_height: 120,
            translate_x: 10.0,
            translate_y: 10.0,
        }
    }

    fn horizontal_segment(y: f64, color: RGB8) -> PathSegment {
        PathSegment {
            subpaths: vec![vec![Point::new(0.0, y), Point::new(10.0, y)]],
            color,
        }
    }

    fn pixel(image: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
        image.get_pixel(x, y).0
    }

    #[test]
    fn test_blank_canvas_is_opaque_white() {
        let pixmap = rasterize(&square_layout(), &[]).unwrap();
        assert_eq!(pixmap.width(), 120);
        assert_eq!(pixmap.height(), 120);

        let image = to_rgba_image(&pixmap).unwrap();
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_stroke_is_drawn_in_segment_color() {
        let red = RGB8 { r: 255, g: 0, b: 0 };
        let pixmap = rasterize(&square_layout(), &[horizontal_segment(5.0, red)]).unwrap();
        let image = to_rgba_image(&pixmap).unwrap();

        // Line runs along canvas y = 60, 3.5px wide
        assert_eq!(pixel(&image, 60, 60), [255, 0, 0, 255]);
        assert_eq!(pixel(&image, 60, 20), [255, 255, 255, 255]);
        assert_eq!(pixel(&image, 0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_output_stays_opaque() {
        let blue = RGB8 { r: 0, g: 0, b: 255 };
        let pixmap = rasterize(&square_layout(), &[horizontal_segment(5.0, blue)]).unwrap();
        let image = to_rgba_image(&pixmap).unwrap();
        assert!(image.pixels().all(|p| p.0[3] == 255));

        // Antialiased edge pixels blend towards white, never something else
        assert!(image.pixels().all(|p| p.0[2] == 255));
    }

    #[test]
    fn test_later_segments_paint_over_earlier() {
        let red = RGB8 { r: 255, g: 0, b: 0 };
        let green = RGB8 { r: 0, g: 255, b: 0 };
        let segments = [horizontal_segment(5.0, red), horizontal_segment(5.0, green)];
        let image = to_rgba_image(&rasterize(&square_layout(), &segments).unwrap()).unwrap();
        assert_eq!(pixel(&image, 60, 60), [0, 255, 0, 255]);
    }

    #[test]
    fn test_round_cap_extends_past_endpoint() {
        let black = RGB8 { r: 0, g: 0, b: 0 };
        let image = to_rgba_image(
            &rasterize(&square_layout(), &[horizontal_segment(5.0, black)]).unwrap(),
        )
        .unwrap();
        // Endpoint at canvas x = 110, cap radius 1.75px
        assert_ne!(pixel(&image, 110, 60), [255, 255, 255, 255]);
        assert_eq!(pixel(&image, 114, 60), [255, 255, 255, 255]);
    }

    #[test]
    fn test_empty_segment_is_skipped() {
        let segment = PathSegment {
            subpaths: vec![],
            color: RGB8 { r: 0, g: 0, b: 0 },
        };
        let image = to_rgba_image(&rasterize(&square_layout(), &[segment]).unwrap()).unwrap();
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let segments = [
            horizontal_segment(2.5, RGB8 { r: 12, g: 200, b: 77 }),
            PathSegment {
                subpaths: vec![vec![
                    Point::new(1.0, 1.0),
                    Point::new(9.0, 9.0),
                    Point::new(1.0, 9.0),
                ]],
                color: RGB8 { r: 90, g: 10, b: 160 },
            },
        ];
        let first = rasterize(&square_layout(), &segments).unwrap();
        let second = rasterize(&square_layout(), &segments).unwrap();
        assert_eq!(first.data(), second.data());
    }
}
