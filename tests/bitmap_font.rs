use rotext::{
    BitmapFont, FontFace, LineStyle, OwnedImage, Point2i, RotextError, TextMetrics,
    TextRenderer, TextStyle,
};

fn style(font: FontFace, scale: f64, thickness: u32, line_style: LineStyle) -> TextStyle {
    TextStyle {
        font,
        scale,
        thickness,
        line_style,
    }
}

fn inked(img: &OwnedImage<u8>) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for y in 0..img.height() {
        for x in 0..img.width() {
            if img.data()[y * img.width() + x] != 0 {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn metrics_scale_with_style() {
    let font = BitmapFont;
    let plain = TextStyle::default();
    assert_eq!(
        font.measure("Hello", &plain).unwrap(),
        TextMetrics {
            width: 29,
            height: 7,
            baseline: 2
        }
    );

    let big = style(FontFace::Plain, 2.0, 3, LineStyle::Eight);
    assert_eq!(
        font.measure("Hello", &big).unwrap(),
        TextMetrics {
            width: 60,
            height: 15,
            baseline: 5
        }
    );

    let bold = style(FontFace::Bold, 1.0, 1, LineStyle::Eight);
    assert_eq!(font.measure("abc", &bold).unwrap().width, 20);

    let fractional = style(FontFace::Plain, 1.5, 1, LineStyle::Eight);
    assert_eq!(
        font.measure("A", &fractional).unwrap(),
        TextMetrics {
            width: 8,
            height: 11,
            baseline: 3
        }
    );
    assert_eq!(font.measure("", &plain).unwrap().width, 0);
}

#[test]
fn invalid_scale_is_reported() {
    let font = BitmapFont;
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = font
            .measure("x", &style(FontFace::Plain, scale, 1, LineStyle::Eight))
            .err()
            .unwrap();
        assert!(matches!(err, RotextError::InvalidTextStyle { .. }), "{scale}");
    }

    let mut img = OwnedImage::from_pixel(8, 8, 0u8).unwrap();
    let err = font
        .draw(
            &mut img.view_mut(),
            "x",
            Point2i::new(0, 7),
            &style(FontFace::Plain, 0.0, 1, LineStyle::Eight),
            255,
        )
        .err()
        .unwrap();
    assert!(matches!(err, RotextError::InvalidTextStyle { .. }));
    assert!(img.data().iter().all(|&v| v == 0));
}

#[test]
fn drawn_pixels_stay_inside_measured_box() {
    let font = BitmapFont;
    let origin = Point2i::new(20, 50);
    let styles = [
        style(FontFace::Plain, 1.0, 1, LineStyle::Eight),
        style(FontFace::Bold, 1.0, 1, LineStyle::Eight),
        style(FontFace::Plain, 0.6, 1, LineStyle::Four),
        style(FontFace::Plain, 1.7, 4, LineStyle::AntiAliased),
        style(FontFace::Bold, 2.5, 5, LineStyle::Four),
    ];
    for st in styles {
        for text in ["Hello, World!", "gjpqy_|", "W@#%&"] {
            let metrics = font.measure(text, &st).unwrap();
            let mut img = OwnedImage::from_pixel(260, 100, 0u8).unwrap();
            font.draw(&mut img.view_mut(), text, origin, &st, 255).unwrap();
            let pixels = inked(&img);
            assert!(!pixels.is_empty(), "{text} {st:?}");
            let x0 = origin.x as usize;
            let x1 = (origin.x + metrics.width) as usize;
            let y0 = (origin.y - metrics.height) as usize;
            let y1 = (origin.y + metrics.baseline) as usize;
            for (x, y) in pixels {
                assert!(
                    x >= x0 && x < x1 && y >= y0 && y < y1,
                    "{text} {st:?}: ({x}, {y}) outside [{x0}, {x1}) x [{y0}, {y1})"
                );
            }
        }
    }
}

#[test]
fn descenders_reach_below_baseline() {
    let font = BitmapFont;
    let origin = Point2i::new(2, 10);
    let mut img = OwnedImage::from_pixel(40, 14, 0u8).unwrap();
    font.draw(&mut img.view_mut(), "gy", origin, &TextStyle::default(), 1)
        .unwrap();
    assert!(inked(&img).iter().any(|&(_, y)| y >= origin.y as usize));

    let mut img = OwnedImage::from_pixel(40, 14, 0u8).unwrap();
    font.draw(&mut img.view_mut(), "AH", origin, &TextStyle::default(), 1)
        .unwrap();
    assert!(inked(&img).iter().all(|&(_, y)| y < origin.y as usize));
}

#[test]
fn brush_shape_controls_stroke_weight() {
    let font = BitmapFont;
    let mut counts = Vec::new();
    for line_style in [LineStyle::Four, LineStyle::AntiAliased, LineStyle::Eight] {
        let mut img = OwnedImage::from_pixel(120, 60, 0u8).unwrap();
        font.draw(
            &mut img.view_mut(),
            "ROT",
            Point2i::new(10, 40),
            &style(FontFace::Plain, 2.0, 7, line_style),
            9,
        )
        .unwrap();
        counts.push(inked(&img).len());
    }
    assert!(counts[0] <= counts[1] && counts[1] <= counts[2], "{counts:?}");
    assert!(counts[0] < counts[2]);
}

#[test]
fn drawing_clips_to_canvas() {
    let font = BitmapFont;
    let mut img = OwnedImage::from_pixel(6, 6, 0u8).unwrap();
    font.draw(
        &mut img.view_mut(),
        "MMMM",
        Point2i::new(-3, 4),
        &style(FontFace::Plain, 1.0, 1, LineStyle::Eight),
        255,
    )
    .unwrap();
    assert!(!inked(&img).is_empty());
}
