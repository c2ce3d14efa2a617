use crate::geometry::{clamp, clamp01, PointF, RectF, SizeF};

use super::PreviewAspect;

/// Fraction of the viewport the card's anchor point sits at, both axes.
const ANCHOR_FRACTION: f64 = 0.52;
/// Full vertical travel of the card as the cursor sweeps the viewport.
const Y_TRAVEL: f64 = 160.0;
/// Full horizontal drift as the cursor sweeps the hovered item.
const X_TRAVEL: f64 = 80.0;
/// How far the card is pulled back toward the timeline, by aspect.
const MAX_OVERLAP_IPHONE: f64 = 90.0;
const MAX_OVERLAP_FOURTHREE: f64 = 55.0;
/// Breathing room kept between the card and the viewport edges.
const VIEWPORT_GUTTER: f64 = 18.0;
/// The card never crosses this far into the timeline container.
const CONTAINER_LEFT_INSET: f64 = 12.0;

/// Last known cursor position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Measured layout the placement is computed against.
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext {
    pub viewport: SizeF,
    /// Bounding box of the hovered timeline item.
    pub item: RectF,
    /// Left edge of the timeline container.
    pub container_left: f64,
    /// Measured size of the preview card.
    pub card: SizeF,
}

/// Cursor position normalized for placement: horizontal within the
/// hovered item's own box, vertical against the full viewport.
pub fn normalized_pointer(sample: PointerSample, ctx: &PlacementContext) -> (f64, f64) {
    let item_width = ctx.item.width.max(1.0);
    let t_x = clamp01((sample.x - ctx.item.left()) / item_width);
    let v_y = clamp01(sample.y / ctx.viewport.height.max(1.0));
    (t_x, v_y)
}

fn max_overlap(aspect: PreviewAspect) -> f64 {
    match aspect {
        PreviewAspect::Iphone => MAX_OVERLAP_IPHONE,
        PreviewAspect::FourThree => MAX_OVERLAP_FOURTHREE,
    }
}

/// Computes the card's top-left corner so it chases the cursor around a
/// fixed viewport anchor: vertical offset from the cursor's viewport
/// position, horizontal drift from its position within the item, and an
/// overlap pull toward the timeline that grows as the cursor nears the
/// item's left edge. The result is clamped into the viewport with a
/// gutter and never crosses the container's left inset.
pub fn compute_card_position(
    sample: PointerSample,
    aspect: PreviewAspect,
    ctx: &PlacementContext,
) -> PointF {
    let (t_x, v_y) = normalized_pointer(sample, ctx);

    let base_x = ctx.viewport.width * ANCHOR_FRACTION;
    let base_y = ctx.viewport.height * ANCHOR_FRACTION;

    let y_offset = (v_y - 0.5) * Y_TRAVEL;
    let x_offset = (t_x - 0.5) * X_TRAVEL;
    let overlap = (1.0 - t_x) * max_overlap(aspect);

    let mut x = base_x + x_offset - overlap - ctx.card.width / 2.0;
    let mut y = base_y + y_offset - ctx.card.height / 2.0;

    x = clamp(
        x,
        VIEWPORT_GUTTER,
        ctx.viewport.width - ctx.card.width - VIEWPORT_GUTTER,
    );
    y = clamp(
        y,
        VIEWPORT_GUTTER,
        ctx.viewport.height - ctx.card.height - VIEWPORT_GUTTER,
    );

    x = x.max(ctx.container_left + CONTAINER_LEFT_INSET);

    PointF::new(x, y)
}

/// Stand-in pointer for keyboard focus without a real cursor: the item's
/// horizontal center at the anchor height.
pub fn focus_fallback_sample(item: &RectF, viewport_height: f64) -> PointerSample {
    PointerSample::new(
        item.left() + item.width / 2.0,
        viewport_height * ANCHOR_FRACTION,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PlacementContext {
        PlacementContext {
            viewport: SizeF::new(1000.0, 800.0),
            item: RectF::new(100.0, 300.0, 200.0, 48.0),
            container_left: 60.0,
            card: SizeF::new(280.0, 560.0),
        }
    }

    #[test]
    fn cursor_at_item_midpoint_normalizes_to_half() {
        let (t_x, v_y) = normalized_pointer(PointerSample::new(200.0, 400.0), &context());
        assert_eq!(t_x, 0.5);
        assert_eq!(v_y, 0.5);
    }

    #[test]
    fn iphone_overlap_at_item_midpoint_is_half_of_max() {
        let ctx = context();
        let sample = PointerSample::new(200.0, 400.0);
        let (t_x, _) = normalized_pointer(sample, &ctx);
        // (1 - 0.5) * 90 for the iphone preset
        assert_eq!((1.0 - t_x) * 90.0, 45.0);

        let with_pull = compute_card_position(sample, PreviewAspect::Iphone, &ctx);
        let without_pull = compute_card_position(sample, PreviewAspect::FourThree, &ctx);
        // the iphone preset pulls 35px further left than fourthree
        assert_eq!(without_pull.x - with_pull.x, (90.0 - 55.0) * 0.5);
    }

    #[test]
    fn centered_cursor_rests_on_the_anchor_before_clamping() {
        let ctx = PlacementContext {
            card: SizeF::new(200.0, 200.0),
            ..context()
        };
        let position = compute_card_position(
            PointerSample::new(200.0, 400.0),
            PreviewAspect::FourThree,
            &ctx,
        );
        // baseY = 0.52 * 800 = 416, zero vertical offset, minus half height
        assert_eq!(position.y, 416.0 - 100.0);
    }

    #[test]
    fn position_always_lands_inside_gutters_and_container_inset() {
        let ctx = context();
        let samples = [
            PointerSample::new(-500.0, -500.0),
            PointerSample::new(5000.0, 5000.0),
            PointerSample::new(100.0, 0.0),
            PointerSample::new(300.0, 800.0),
        ];
        for sample in samples {
            for aspect in [PreviewAspect::Iphone, PreviewAspect::FourThree] {
                let p = compute_card_position(sample, aspect, &ctx);
                assert!(p.x >= VIEWPORT_GUTTER, "x underflow for {sample:?}");
                assert!(
                    p.x <= ctx.viewport.width - ctx.card.width - VIEWPORT_GUTTER,
                    "x overflow for {sample:?}"
                );
                assert!(p.y >= VIEWPORT_GUTTER, "y underflow for {sample:?}");
                assert!(
                    p.y <= ctx.viewport.height - ctx.card.height - VIEWPORT_GUTTER,
                    "y overflow for {sample:?}"
                );
                assert!(p.x >= ctx.container_left + CONTAINER_LEFT_INSET);
            }
        }
    }

    #[test]
    fn container_inset_floors_the_horizontal_position() {
        let ctx = PlacementContext {
            container_left: 400.0,
            ..context()
        };
        // cursor hard left maximizes the overlap pull
        let p = compute_card_position(PointerSample::new(100.0, 400.0), PreviewAspect::Iphone, &ctx);
        assert_eq!(p.x, 412.0);
    }

    #[test]
    fn focus_fallback_centers_on_the_item_at_anchor_height() {
        let sample = focus_fallback_sample(&RectF::new(100.0, 300.0, 200.0, 48.0), 800.0);
        assert_eq!(sample.x, 200.0);
        assert_eq!(sample.y, 416.0);
    }

    #[test]
    fn zero_width_item_does_not_produce_nan() {
        let ctx = PlacementContext {
            item: RectF::new(100.0, 300.0, 0.0, 48.0),
            ..context()
        };
        let p = compute_card_position(PointerSample::new(100.0, 400.0), PreviewAspect::Iphone, &ctx);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
