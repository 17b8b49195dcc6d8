use cairo::{Context, ImageSurface};
use sketchpad::draw::{Canvas, Point, RenderOptions, Stroke, WHITE, render_strokes};
use sketchpad::input::{InputEvent, InputState, Tool, ToolState};
use sketchpad::util::{CanvasBounds, Viewport};

fn stroke(color: &str, width: f64, points: &[(f64, f64)]) -> Stroke {
    Stroke {
        color: color.to_string(),
        points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        width,
    }
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_bytes(surface: &mut ImageSurface) -> Vec<u8> {
    surface.data().map(|data| data.to_vec()).unwrap()
}

#[test]
fn render_twice_matches_render_once() {
    let strokes = vec![
        stroke("#ff0000", 6.0, &[(5.0, 5.0), (60.0, 40.0), (90.0, 10.0)]),
        stroke("#0000ff80", 10.0, &[(10.0, 60.0), (80.0, 60.0)]),
        stroke("black", 4.0, &[(50.0, 50.0)]),
    ];
    let options = RenderOptions::default();

    let (mut once, ctx) = surface_with_context(100, 100);
    render_strokes(&ctx, &strokes, &options);
    drop(ctx);

    let (mut twice, ctx) = surface_with_context(100, 100);
    render_strokes(&ctx, &strokes, &options);
    render_strokes(&ctx, &strokes, &options);
    drop(ctx);

    assert_eq!(surface_bytes(&mut once), surface_bytes(&mut twice));
}

#[test]
fn later_strokes_paint_over_earlier_ones() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let strokes = vec![
        stroke("#ff0000", 10.0, &[(0.0, 20.0), (40.0, 20.0)]),
        stroke("#0000ff", 10.0, &[(20.0, 0.0), (20.0, 40.0)]),
    ];

    canvas.render(&strokes, &RenderOptions::default()).unwrap();
    assert_eq!(canvas.pixel(20, 20).unwrap(), Some([0, 0, 255, 255]));
    assert_eq!(canvas.pixel(5, 20).unwrap(), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(5, 5).unwrap(), Some([0, 0, 0, 0]));
}

#[test]
fn single_point_stroke_paints_a_dot_by_default() {
    let mut canvas = Canvas::new(30, 30).unwrap();
    let strokes = vec![stroke("#000000", 8.0, &[(15.0, 15.0)])];

    canvas.render(&strokes, &RenderOptions::default()).unwrap();
    assert_eq!(canvas.pixel(15, 15).unwrap(), Some([0, 0, 0, 255]));

    let options = RenderOptions {
        single_point_dots: false,
        ..RenderOptions::default()
    };
    canvas.render(&strokes, &options).unwrap();
    assert!(!canvas.has_visible_pixels().unwrap());
}

#[test]
fn empty_stroke_list_leaves_nothing_visible() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    canvas
        .render(&[stroke("#000000", 5.0, &[(1.0, 1.0), (19.0, 19.0)])], &RenderOptions::default())
        .unwrap();
    assert!(canvas.has_visible_pixels().unwrap());

    canvas.render(&[], &RenderOptions::default()).unwrap();
    assert!(!canvas.has_visible_pixels().unwrap());
}

#[test]
fn background_fills_before_strokes() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    let options = RenderOptions {
        background: Some(WHITE),
        single_point_dots: true,
    };

    canvas.render(&[], &options).unwrap();
    assert_eq!(canvas.pixel(3, 3).unwrap(), Some([255, 255, 255, 255]));
}

#[test]
fn invalid_color_keeps_previous_color() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let strokes = vec![
        stroke("#00ff00", 6.0, &[(0.0, 5.0), (40.0, 5.0)]),
        stroke("definitely-not-a-color", 6.0, &[(0.0, 30.0), (40.0, 30.0)]),
    ];

    canvas.render(&strokes, &RenderOptions::default()).unwrap();
    assert_eq!(canvas.pixel(20, 30).unwrap(), Some([0, 255, 0, 255]));
}

#[test]
fn functional_and_named_colors_render_in_their_own_color() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let strokes = vec![
        stroke("#00ff00", 6.0, &[(0.0, 5.0), (40.0, 5.0)]),
        stroke("rgb(255, 0, 0)", 6.0, &[(0.0, 20.0), (40.0, 20.0)]),
        stroke("purple", 6.0, &[(0.0, 35.0), (40.0, 35.0)]),
    ];

    canvas.render(&strokes, &RenderOptions::default()).unwrap();
    assert_eq!(canvas.pixel(20, 20).unwrap(), Some([255, 0, 0, 255]));
    assert_eq!(canvas.pixel(20, 35).unwrap(), Some([128, 0, 128, 255]));
}

#[test]
fn invalid_first_color_falls_back_to_black() {
    let mut canvas = Canvas::new(20, 20).unwrap();
    let strokes = vec![stroke("???", 6.0, &[(0.0, 10.0), (20.0, 10.0)])];

    canvas.render(&strokes, &RenderOptions::default()).unwrap();
    assert_eq!(canvas.pixel(10, 10).unwrap(), Some([0, 0, 0, 255]));
}

#[test]
fn eraser_stroke_covers_pencil_stroke() {
    let mut state = InputState::with_defaults(
        ToolState::new("#000000", 6.0, "#FFFFFF"),
        Viewport::new(CanvasBounds::sized(50.0, 50.0), 1.0),
        RenderOptions::default(),
    );
    let mut canvas = Canvas::new(50, 50).unwrap();

    for event in [
        InputEvent::PointerDown {
            client_x: 0.0,
            client_y: 25.0,
            bounds: None,
        },
        InputEvent::PointerMove {
            client_x: 50.0,
            client_y: 25.0,
            bounds: None,
        },
        InputEvent::PointerUp,
        InputEvent::SetTool { tool: Tool::Eraser },
        InputEvent::PointerDown {
            client_x: 25.0,
            client_y: 0.0,
            bounds: None,
        },
        InputEvent::PointerMove {
            client_x: 25.0,
            client_y: 50.0,
            bounds: None,
        },
        InputEvent::PointerUp,
    ] {
        state.dispatch(event);
    }

    state.render(&mut canvas).unwrap();
    assert_eq!(canvas.pixel(25, 25).unwrap(), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(5, 25).unwrap(), Some([0, 0, 0, 255]));

    state.dispatch(InputEvent::Undo);
    state.render(&mut canvas).unwrap();
    assert_eq!(canvas.pixel(25, 25).unwrap(), Some([0, 0, 0, 255]));
}

#[test]
fn redo_buffer_never_reaches_the_raster() {
    let mut state = InputState::with_defaults(
        ToolState::new("#000000", 4.0, "#FFFFFF"),
        Viewport::new(CanvasBounds::sized(30.0, 30.0), 1.0),
        RenderOptions::default(),
    );
    let mut canvas = Canvas::new(30, 30).unwrap();

    state.dispatch(InputEvent::PointerDown {
        client_x: 2.0,
        client_y: 2.0,
        bounds: None,
    });
    state.dispatch(InputEvent::PointerMove {
        client_x: 28.0,
        client_y: 28.0,
        bounds: None,
    });
    state.dispatch(InputEvent::PointerUp);
    state.dispatch(InputEvent::Undo);

    assert!(state.render_if_needed(&mut canvas).unwrap());
    assert!(state.history.can_redo());
    assert!(!canvas.has_visible_pixels().unwrap());
}
