use crate::geometry::RectF;

/// A tile video plays once at least this fraction of it is visible.
pub const AUTOPLAY_THRESHOLD: f64 = 0.25;

/// Vertical slack around a topbar region before a tile is even
/// considered for the overlap test, to avoid flicker at the boundary.
const TOLERANCE_ABOVE: f64 = 8.0;
const TOLERANCE_BELOW: f64 = 120.0;

/// Fraction of `tile` that lies inside `viewport`, in [0, 1].
pub fn visible_fraction(tile: &RectF, viewport: &RectF) -> f64 {
    let area = tile.width * tile.height;
    if area <= 0.0 {
        return 0.0;
    }
    let left = tile.left().max(viewport.left());
    let right = tile.right().min(viewport.right());
    let top = tile.top().max(viewport.top());
    let bottom = tile.bottom().min(viewport.bottom());
    if right <= left || bottom <= top {
        return 0.0;
    }
    ((right - left) * (bottom - top)) / area
}

pub fn should_autoplay(fraction: f64) -> bool {
    fraction >= AUTOPLAY_THRESHOLD
}

/// Whether any topbar region rectangle overlaps any tile media
/// rectangle. Tiles far above or below a region are rejected by a crude
/// vertical prefilter before the full AABB test; a region that hits any
/// tile short-circuits the scan.
pub fn topbar_over_tiles(targets: &[RectF], tiles: &[RectF]) -> bool {
    for target in targets {
        for tile in tiles {
            if tile.bottom() < target.top() - TOLERANCE_ABOVE {
                continue;
            }
            if tile.top() > target.bottom() + TOLERANCE_BELOW {
                continue;
            }
            if target.overlaps(tile) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_tile_has_fraction_one() {
        let viewport = RectF::new(0.0, 0.0, 1000.0, 800.0);
        let tile = RectF::new(100.0, 100.0, 400.0, 300.0);
        assert_eq!(visible_fraction(&tile, &viewport), 1.0);
    }

    #[test]
    fn half_scrolled_tile_has_fraction_half() {
        let viewport = RectF::new(0.0, 0.0, 1000.0, 800.0);
        let tile = RectF::new(100.0, -150.0, 400.0, 300.0);
        assert_eq!(visible_fraction(&tile, &viewport), 0.5);
    }

    #[test]
    fn offscreen_or_empty_tiles_have_fraction_zero() {
        let viewport = RectF::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(
            visible_fraction(&RectF::new(0.0, 900.0, 400.0, 300.0), &viewport),
            0.0
        );
        assert_eq!(
            visible_fraction(&RectF::new(100.0, 100.0, 0.0, 300.0), &viewport),
            0.0
        );
    }

    #[test]
    fn autoplay_follows_the_media_box_not_the_padded_tile() {
        let viewport = RectF::new(0.0, 0.0, 1000.0, 800.0);
        // tile scrolled mostly off the top; the root box wraps the media
        // in 8px padding with a caption below it
        let root = RectF::new(100.0, -212.0, 356.0, 284.0);
        let media = RectF::new(108.0, -204.0, 340.0, 240.0);
        assert!(should_autoplay(visible_fraction(&root, &viewport)));
        assert!(!should_autoplay(visible_fraction(&media, &viewport)));
    }

    #[test]
    fn autoplay_threshold_is_a_quarter() {
        assert!(should_autoplay(0.25));
        assert!(should_autoplay(0.8));
        assert!(!should_autoplay(0.24));
    }

    #[test]
    fn horizontally_separated_rects_never_register() {
        let target = RectF::new(0.0, 0.0, 100.0, 40.0);
        let tile = RectF::new(101.0, 0.0, 100.0, 40.0);
        assert!(!topbar_over_tiles(&[target], &[tile]));
    }

    #[test]
    fn tile_nine_px_above_target_is_prefiltered_out() {
        let target = RectF::new(0.0, 100.0, 100.0, 40.0);
        // bottom at 91, nine above the target's top
        let tile = RectF::new(0.0, 41.0, 100.0, 50.0);
        assert!(!topbar_over_tiles(&[target], &[tile]));
    }

    #[test]
    fn any_overlapping_region_sets_the_flag() {
        let brand = RectF::new(0.0, 0.0, 120.0, 48.0);
        let center = RectF::new(400.0, 0.0, 200.0, 48.0);
        let right = RectF::new(880.0, 0.0, 120.0, 48.0);
        let tile = RectF::new(420.0, 30.0, 300.0, 200.0);
        assert!(topbar_over_tiles(&[brand, center, right], &[tile]));
        assert!(!topbar_over_tiles(&[brand, right], &[tile]));
    }
}
